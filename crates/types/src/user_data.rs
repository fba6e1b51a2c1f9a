use serde::{Deserialize, Serialize};

/// The six placeholder tokens recognized in report templates.
pub const TOKENS: [&str; 6] = [
    "{{name}}",
    "{{gender}}",
    "{{country}}",
    "{{birthYear}}",
    "{{reportPeriod}}",
    "{{footerText}}",
];

/// The caller-supplied field-to-value mapping driving template substitution.
///
/// Field names serialize in camelCase so a JSON data file uses the same
/// spelling as the template tokens (`{{birthYear}}`, `{{reportPeriod}}`,
/// `{{footerText}}`). Values are free text and are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub gender: String,
    pub country: String,
    pub birth_year: String,
    pub report_period: String,
    pub footer_text: String,
}

impl UserData {
    /// Demo record used by the CLI and examples when no data file is given.
    pub fn sample() -> Self {
        Self {
            name: "Jane Smith".to_string(),
            gender: "Female".to_string(),
            country: "United Kingdom".to_string(),
            birth_year: "1990".to_string(),
            report_period: "Jan 1, 2024 - Dec 31, 2024".to_string(),
            footer_text: "2024-12-31 • For Personal Use Only".to_string(),
        }
    }

    /// Token/value pairs in declaration order, matching [`TOKENS`].
    pub fn replacements(&self) -> [(&'static str, &str); 6] {
        [
            ("{{name}}", self.name.as_str()),
            ("{{gender}}", self.gender.as_str()),
            ("{{country}}", self.country.as_str()),
            ("{{birthYear}}", self.birth_year.as_str()),
            ("{{reportPeriod}}", self.report_period.as_str()),
            ("{{footerText}}", self.footer_text.as_str()),
        ]
    }

    /// Output file stem derived from the display name, spaces becoming
    /// hyphens. A name with no usable characters yields the generic stem
    /// `output`.
    pub fn output_file_stem(&self) -> String {
        let slugged = slug::slugify(&self.name);
        if slugged.is_empty() {
            "output".to_string()
        } else {
            format!("health-report-{slugged}")
        }
    }

    /// Default output filename for this record.
    pub fn default_output_name(&self) -> String {
        format!("{}.pdf", self.output_file_stem())
    }
}
