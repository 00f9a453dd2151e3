// ABOUTME: Filter criteria model and deterministic JQL compilation
// ABOUTME: Also builds browse and search URLs for the browser hand-off path

use thiserror::Error;

use crate::constants::{fields, limits};

/// The predefined-filter sentinel meaning "no filter selected".
pub const FILTER_UNSET: i64 = -1;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("filter value {0:?} contains characters that cannot be escaped")]
    UnescapableValue(String),

    #[error("filter value for {0} is empty")]
    EmptyValue(&'static str),
}

/// The user's filter selection for one invocation.
///
/// Field declaration order is load-bearing: it is the clause order of
/// the compiled JQL, so identical criteria always compile to identical
/// bytes. Values inside each field keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueFilters {
    /// Predefined filter id; [`FILTER_UNSET`] when not selected.
    pub filter: i64,
    pub project: Vec<String>,
    pub issue_type: Vec<String>,
    pub status: Vec<String>,
    pub status_category: Vec<String>,
    pub assignee: Vec<String>,
    pub component: Vec<String>,
    pub label: Vec<String>,
    pub priority: Vec<String>,
    pub resolution: Vec<String>,
    /// Free-text search; empty = unset.
    pub query: String,
    /// Raw JQL override; empty = unset. Takes precedence over everything.
    pub jql: String,
    /// Maximum number of results to fetch.
    pub limit: u32,
    /// Fields the server should populate for list views.
    pub fields: Vec<String>,
}

impl Default for IssueFilters {
    fn default() -> Self {
        Self {
            filter: FILTER_UNSET,
            project: Vec::new(),
            issue_type: Vec::new(),
            status: Vec::new(),
            status_category: Vec::new(),
            assignee: Vec::new(),
            component: Vec::new(),
            label: Vec::new(),
            priority: Vec::new(),
            resolution: Vec::new(),
            query: String::new(),
            jql: String::new(),
            limit: limits::DEFAULT_RESULT_LIMIT,
            fields: fields::LIST_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl IssueFilters {
    /// Compile the criteria into a single JQL expression.
    ///
    /// A raw JQL override is returned verbatim, skipping all other fields
    /// and all validation. Otherwise each non-empty field contributes one
    /// clause, in field declaration order, joined with `AND`. A selected
    /// predefined filter is additive: its `filter = N` clause leads and is
    /// ANDed with any structured clauses. No criteria at all compiles to
    /// the empty expression (match everything).
    pub fn to_jql(&self) -> Result<String, ValidationError> {
        if !self.jql.is_empty() {
            return Ok(self.jql.clone());
        }

        let mut clauses = Vec::new();

        if self.filter != FILTER_UNSET {
            clauses.push(format!("filter = {}", self.filter));
        }

        let multi_valued: [(&'static str, &Vec<String>); 9] = [
            ("project", &self.project),
            ("type", &self.issue_type),
            ("status", &self.status),
            ("statusCategory", &self.status_category),
            ("assignee", &self.assignee),
            ("component", &self.component),
            ("labels", &self.label),
            ("priority", &self.priority),
            ("resolution", &self.resolution),
        ];
        for (field, values) in multi_valued {
            if let Some(clause) = in_clause(field, values)? {
                clauses.push(clause);
            }
        }

        if !self.query.is_empty() {
            clauses.push(format!("text ~ {}", quote("text", &self.query)?));
        }

        Ok(clauses.join(" AND "))
    }

    /// Full-text issue-navigator URL for `--web` list mode.
    pub fn search_url(&self, host: &str) -> Result<String, ValidationError> {
        let jql = self.to_jql()?;
        Ok(format!(
            "https://{}/issues/?jql={}",
            host,
            urlencoding::encode(&jql)
        ))
    }
}

/// Browse URL for a single issue key. Pure formatting; the key is not
/// checked for existence.
pub fn browse_url(host: &str, key: &str) -> String {
    format!("https://{}/browse/{}", host, key)
}

/// Emit `field IN (a, b)` for a non-empty value list, None otherwise.
fn in_clause(field: &'static str, values: &[String]) -> Result<Option<String>, ValidationError> {
    if values.is_empty() {
        return Ok(None);
    }

    let escaped: Vec<String> = values
        .iter()
        .map(|v| escape_value(field, v))
        .collect::<Result<_, _>>()?;

    Ok(Some(format!("{} IN ({})", field, escaped.join(", "))))
}

/// Emit a value as a JQL term: bare when it is free of delimiter
/// characters, double-quoted with `\"`/`\\` escapes otherwise.
fn escape_value(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = validate(field, value)?;

    if trimmed.contains(['"', '\\', ',', '(', ')']) {
        Ok(quote_inner(trimmed))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Emit a value as a quoted JQL string literal (the `~` operator requires
/// quoting regardless of content).
fn quote(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = validate(field, value)?;
    Ok(quote_inner(trimmed))
}

fn validate<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.chars().any(|c| c.is_control()) {
        return Err(ValidationError::UnescapableValue(value.to_string()));
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue(field));
    }
    Ok(trimmed)
}

fn quote_inner(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_filters_compile_to_empty_query() {
        let filters = IssueFilters::default();
        assert_eq!(filters.to_jql().unwrap(), "");
    }

    #[test]
    fn test_single_field_in_clause() {
        let filters = IssueFilters {
            status: strings(&["Open", "In Progress"]),
            ..Default::default()
        };
        assert_eq!(filters.to_jql().unwrap(), "status IN (Open, In Progress)");
    }

    #[test]
    fn test_clause_order_is_declaration_order() {
        let filters = IssueFilters {
            status: strings(&["Open"]),
            project: strings(&["DEMO"]),
            assignee: strings(&["alice"]),
            filter: 1200,
            ..Default::default()
        };
        assert_eq!(
            filters.to_jql().unwrap(),
            "filter = 1200 AND project IN (DEMO) AND status IN (Open) AND assignee IN (alice)"
        );
    }

    #[test]
    fn test_raw_jql_takes_absolute_precedence() {
        let filters = IssueFilters {
            jql: "assignee = currentUser() ORDER BY updated".to_string(),
            project: strings(&["DEMO"]),
            filter: 42,
            query: "ignored".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filters.to_jql().unwrap(),
            "assignee = currentUser() ORDER BY updated"
        );
    }

    #[test]
    fn test_compilation_is_deterministic() {
        let filters = IssueFilters {
            project: strings(&["DEMO", "OPS"]),
            label: strings(&["backend"]),
            query: "login".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.to_jql().unwrap(), filters.to_jql().unwrap());
    }

    #[test]
    fn test_free_text_is_always_quoted() {
        let filters = IssueFilters {
            query: "login bug".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.to_jql().unwrap(), "text ~ \"login bug\"");
    }

    #[test]
    fn test_values_with_delimiters_are_quoted_and_escaped() {
        let filters = IssueFilters {
            component: strings(&["api, internal", "plain"]),
            ..Default::default()
        };
        assert_eq!(
            filters.to_jql().unwrap(),
            "component IN (\"api, internal\", plain)"
        );

        let filters = IssueFilters {
            status: strings(&["He said \"done\""]),
            ..Default::default()
        };
        assert_eq!(
            filters.to_jql().unwrap(),
            "status IN (\"He said \\\"done\\\"\")"
        );
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let filters = IssueFilters {
            project: strings(&["DE\0MO"]),
            ..Default::default()
        };
        assert!(matches!(
            filters.to_jql().unwrap_err(),
            ValidationError::UnescapableValue(_)
        ));
    }

    #[test]
    fn test_whitespace_only_value_is_rejected() {
        let filters = IssueFilters {
            label: strings(&["   "]),
            ..Default::default()
        };
        assert_eq!(
            filters.to_jql().unwrap_err(),
            ValidationError::EmptyValue("labels")
        );
    }

    #[test]
    fn test_browse_url() {
        assert_eq!(
            browse_url("example.com", "ABC-123"),
            "https://example.com/browse/ABC-123"
        );
    }

    #[test]
    fn test_search_url_encodes_jql() {
        let filters = IssueFilters {
            project: strings(&["DEMO"]),
            status: strings(&["Open", "In Progress"]),
            ..Default::default()
        };
        assert_eq!(
            filters.search_url("example.com").unwrap(),
            "https://example.com/issues/?jql=project%20IN%20%28DEMO%29%20AND%20status%20IN%20%28Open%2C%20In%20Progress%29"
        );
    }
}
