use vitals_types::UserData;

/// Replace every literal occurrence of each token with its value.
///
/// This is plain string replacement, not pattern matching. Values are
/// inserted verbatim, HTML-special characters included. Tokens absent from
/// the text are skipped silently and `{{...}}` sequences that match no
/// token are left untouched. The result only depends on the inputs, and a
/// second pass with the same mapping is a no-op as long as values do not
/// themselves contain tokens.
pub fn substitute<'a, I>(template: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut html = template.to_string();
    for (token, value) in replacements {
        html = html.replace(token, value);
    }
    html
}

/// Apply a user record's token/value pairs to template text.
pub fn render_user_data(template: &str, data: &UserData) -> String {
    let html = substitute(template, data.replacements());
    log::debug!(
        "Substituted user fields ({} -> {} bytes)",
        template.len(),
        html.len()
    );
    html
}
