// ABOUTME: Centralized constants for the Jira CLI application
// ABOUTME: Contains result limits, list-view field selection, and UI tuning

/// Default limits for issue queries
pub mod limits {
    pub const DEFAULT_RESULT_LIMIT: u32 = 50;
}

/// Field selection for list views.
///
/// The detail view fetches every field; list fetches are restricted to
/// what the table actually shows.
pub mod fields {
    pub const LIST_FIELDS: &[&str] = &[
        "key",
        "status",
        "issuetype",
        "summary",
        "components",
        "updated",
    ];
}

/// UI and formatting constants
pub mod ui {
    /// Maximum rendered width of the summary column.
    pub const SUMMARY_WIDTH: usize = 60;

    /// Pager used when neither config nor $PAGER specify one.
    pub const DEFAULT_PAGER: &str = "less";

    /// Default LESS flags: quit-if-one-screen, raw color codes, no init.
    pub const DEFAULT_LESS_FLAGS: &str = "FRX";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert_eq!(limits::DEFAULT_RESULT_LIMIT, 50);
    }

    #[test]
    fn test_list_fields() {
        assert_eq!(
            fields::LIST_FIELDS,
            &["key", "status", "issuetype", "summary", "components", "updated"]
        );
    }

    #[test]
    fn test_ui_constants() {
        assert!(ui::SUMMARY_WIDTH >= 40);
        assert_eq!(ui::DEFAULT_PAGER, "less");
    }
}
