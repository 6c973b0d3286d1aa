use thiserror::Error;

/// Where in the static catalog data a schema issue was found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueLocation {
    /// Component (or category) the issue belongs to.
    pub owner: String,
    /// Prop name, when the issue concerns a single prop.
    pub prop: Option<String>,
    /// Zero-based example index, when the issue concerns an example.
    pub example: Option<usize>,
}

impl IssueLocation {
    /// Create a location pointing at a whole component or category
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            prop: None,
            example: None,
        }
    }

    /// Narrow the location to a prop
    pub fn with_prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = Some(prop.into());
        self
    }

    /// Narrow the location to an example
    pub fn with_example(mut self, index: usize) -> Self {
        self.example = Some(index);
        self
    }
}

impl std::fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.owner)?;
        if let Some(index) = self.example {
            write!(f, ".examples[{}]", index)?;
        }
        if let Some(prop) = &self.prop {
            write!(f, ".{}", prop)?;
        }
        Ok(())
    }
}

/// Errors and degradations surfaced by the studio core.
///
/// Only [`StudioError::RouteNotFound`] replaces the whole view. The other
/// runtime variants are substituted in place and only reach the log.
#[derive(Debug, Error)]
pub enum StudioError {
    /// A component name has no registry entry.
    #[error("component `{name}` is not configured")]
    ConfigurationMissing {
        /// Requested component name
        name: String,
    },
    /// A section key outside the allow-list.
    #[error("section `{section}` does not exist")]
    RouteNotFound {
        /// Section after alias rewriting
        section: String,
    },
    /// A select control holds a value no longer in its options.
    #[error("stale value `{value}` for `{prop}`, reset to default")]
    StaleSelection {
        /// Prop name
        prop: String,
        /// Rejected value
        value: String,
    },
    /// A path segment has no route-config label.
    #[error("no label for path segment `{segment}`")]
    MissingBreadcrumbLabel {
        /// Raw segment text
        segment: String,
    },
    /// Static data could not be decoded.
    #[error("failed to load {what}: {message}")]
    Load {
        /// Which document failed (e.g. "sitemap")
        what: &'static str,
        /// Decoder message
        message: String,
    },
    /// Static data decoded but failed schema validation.
    #[error("catalog validation failed with {} error(s)", .0.errors.len())]
    Validation(ValidationReport),
}

impl StudioError {
    /// Create a load error from any decoder error
    pub fn load(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Load {
            what,
            message: err.to_string(),
        }
    }

    /// Whether this error replaces the entire view with a not-found page.
    pub fn is_page_level(&self) -> bool {
        matches!(self, Self::RouteNotFound { .. })
    }
}

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the data set
    Error,
    /// Reported but tolerated
    Warning,
}

/// A single schema validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Human readable message
    pub message: String,
    /// Where the issue was found
    pub location: IssueLocation,
    /// Issue severity
    pub severity: Severity,
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{} at {}: {}", severity, self.location, self.message)
    }
}

/// Collection of validation findings over the static catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Findings that reject the data
    pub errors: Vec<SchemaIssue>,
    /// Findings that are only reported
    pub warnings: Vec<SchemaIssue>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, location: IssueLocation, message: impl Into<String>) {
        self.errors.push(SchemaIssue {
            message: message.into(),
            location,
            severity: Severity::Error,
        });
    }

    /// Record a warning
    pub fn warning(&mut self, location: IssueLocation, message: impl Into<String>) {
        self.warnings.push(SchemaIssue {
            message: message.into(),
            location,
            severity: Severity::Warning,
        });
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all findings
    pub fn count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Turn the report into a `Result`, failing when errors were recorded.
    /// Warnings are logged and dropped.
    pub fn into_result(self) -> Result<(), StudioError> {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
        if self.has_errors() {
            Err(StudioError::Validation(self))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_includes_example_and_prop() {
        let location = IssueLocation::new("Button").with_example(2).with_prop("variant");
        assert_eq!(location.to_string(), "Button.examples[2].variant");
    }

    #[test]
    fn only_route_not_found_is_page_level() {
        assert!(
            StudioError::RouteNotFound {
                section: "nope".into()
            }
            .is_page_level()
        );
        assert!(
            !StudioError::ConfigurationMissing {
                name: "Frobnicator".into()
            }
            .is_page_level()
        );
    }

    #[test]
    fn report_with_only_warnings_is_ok() {
        let mut report = ValidationReport::new();
        report.warning(IssueLocation::new("Card"), "no examples");
        assert!(report.has_warnings());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn report_with_errors_fails() {
        let mut report = ValidationReport::new();
        report.error(IssueLocation::new("Button").with_prop("size"), "bad default");
        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "catalog validation failed with 1 error(s)");
    }
}
