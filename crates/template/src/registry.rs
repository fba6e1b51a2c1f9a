/// Registry name of the embedded front cover template.
pub const FRONT_COVER_PAGE: &str = "front-cover-page";

const EMBEDDED: &[(&str, &str)] = &[(
    FRONT_COVER_PAGE,
    include_str!("../templates/front-cover-page.html"),
)];

/// Look up an embedded template by registry name.
pub fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, html)| *html)
}

/// Names of all embedded templates.
pub fn embedded_names() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(|(name, _)| *name)
}
