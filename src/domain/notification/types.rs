use serde::{Deserialize, Serialize};
use std::fmt;

pub const CLOSE_BUTTON_CLASS: &str = "btn-close";
pub const BANNER_ROLE: &str = "alert";

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Any other value is carried through to the style token unvalidated.
    Other(String),
}

impl Severity {
    pub fn token(&self) -> &str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Other(raw) => raw,
        }
    }

    /// Maps an optional caller-supplied value, defaulting to `Info`.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Severity::from).unwrap_or_default()
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        match raw {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        Severity::from(raw.as_str())
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.token().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BannerId(pub u32);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerBody {
    /// Untrusted text, escaped before it reaches the page.
    Text(String),
    /// Trusted markup inserted verbatim.
    Markup(String),
}

impl BannerBody {
    pub fn to_html(&self) -> String {
        match self {
            BannerBody::Text(text) => ammonia::clean_text(text),
            BannerBody::Markup(markup) => markup.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub severity: Severity,
    pub body: BannerBody,
}

impl Banner {
    pub fn new(id: BannerId, severity: Severity, body: BannerBody) -> Self {
        Self { id, severity, body }
    }

    pub fn class_name(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show",
            self.severity.token()
        )
    }

    pub fn role(&self) -> &'static str {
        BANNER_ROLE
    }

    pub fn inner_html(&self) -> String {
        format!(
            "{}<button type=\"button\" class=\"{}\" aria-label=\"Close\"></button>",
            self.body.to_html(),
            CLOSE_BUTTON_CLASS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::from_option(None).token(), "info");
    }

    #[test]
    fn test_known_and_open_ended_severities() {
        assert_eq!(Severity::from("success"), Severity::Success);
        assert_eq!(Severity::from("warning").token(), "warning");
        assert_eq!(
            Severity::from("primary"),
            Severity::Other("primary".to_string())
        );
        assert_eq!(Severity::from_option(Some("primary")).token(), "primary");
    }

    #[test]
    fn test_severity_serde_uses_token() {
        let severity: Severity = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(severity.token(), "danger");
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
    }

    #[test]
    fn test_class_name_concatenates_token() {
        let banner = Banner::new(
            BannerId(1),
            Severity::Success,
            BannerBody::Text("Saved".to_string()),
        );
        assert_eq!(
            banner.class_name(),
            "alert alert-success alert-dismissible fade show"
        );
        assert_eq!(banner.role(), "alert");
    }

    #[test]
    fn test_text_body_is_escaped() {
        let banner = Banner::new(
            BannerId(1),
            Severity::Info,
            BannerBody::Text("<img src=x onerror=alert(1)>".to_string()),
        );
        let html = banner.inner_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
        assert!(html.ends_with(
            "<button type=\"button\" class=\"btn-close\" aria-label=\"Close\"></button>"
        ));
    }

    #[test]
    fn test_markup_body_is_verbatim() {
        let banner = Banner::new(
            BannerId(2),
            Severity::Warning,
            BannerBody::Markup("<strong>Heads up</strong>".to_string()),
        );
        assert!(banner.inner_html().starts_with("<strong>Heads up</strong><button"));
    }
}
