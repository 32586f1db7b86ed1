//! Content validation errors.

/// Error returned when the portfolio content fails its completeness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A required field is missing or blank.
    BlankField {
        /// The record the field belongs to (e.g. `profile`, `project "Quurls"`).
        record: String,
        /// The field name.
        field: &'static str,
    },
    /// A navigation target carries a scheme the page cannot link to.
    UnsupportedScheme {
        /// The record the URL belongs to.
        record: String,
        /// The offending URL.
        url: String,
    },
    /// A section declares no entries at all.
    EmptySection {
        /// The section name.
        section: &'static str,
    },
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::BlankField { record, field } => {
                write!(f, "{} is missing required field '{}'", record, field)
            }
            ContentError::UnsupportedScheme { record, url } => {
                write!(
                    f,
                    "{} links to \"{}\" which is not an http, https, or mailto target",
                    record, url
                )
            }
            ContentError::EmptySection { section } => {
                write!(f, "section '{}' has no entries", section)
            }
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_display() {
        let err = ContentError::BlankField { record: "profile".to_string(), field: "name" };
        let msg = err.to_string();
        assert!(msg.contains("profile"));
        assert!(msg.contains("name"));
    }

    #[test]
    fn test_unsupported_scheme_display() {
        let err = ContentError::UnsupportedScheme {
            record: "project \"Quurls\"".to_string(),
            url: "ftp://quurls.com".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Quurls"));
        assert!(msg.contains("ftp://quurls.com"));
    }

    #[test]
    fn test_empty_section_display() {
        let err = ContentError::EmptySection { section: "experience" };
        assert!(err.to_string().contains("experience"));
    }
}
