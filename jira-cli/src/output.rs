// ABOUTME: Result rendering for the Jira CLI: list tables and detail reports
// ABOUTME: Both paths write through the scoped pager sink, never stdout directly

use chrono::{DateTime, Utc};
use jira_sdk::Issue;
use owo_colors::OwoColorize;
use std::io::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use thiserror::Error;

use crate::constants::ui;
use crate::markup::{self, MarkupError};
use crate::time_ago;
use crate::types::CategoryColor;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render issue body: {0}")]
    Markup(#[from] MarkupError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Type")]
    issue_type: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Components")]
    components: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Render issue summaries as a table, in the order they were fetched.
///
/// An empty slice still renders the header row.
pub fn render_issue_list(
    w: &mut dyn Write,
    issues: &[Issue],
    use_color: bool,
    now: DateTime<Utc>,
) -> Result<(), RenderError> {
    let rows: Vec<IssueRow> = issues
        .iter()
        .map(|issue| IssueRow {
            key: issue.key.clone(),
            status: colorize_status(issue, use_color),
            issue_type: issue.issue_type().to_string(),
            summary: truncate(&issue.fields.summary, ui::SUMMARY_WIDTH),
            components: issue.component_names().join(", "),
            updated: issue
                .fields
                .updated
                .as_deref()
                .and_then(|raw| time_ago::fuzzy_since(raw, now))
                .unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    writeln!(w, "{}", table)?;
    Ok(())
}

/// Render a single issue as a structured report.
///
/// The body is converted before anything is written: a conversion
/// failure yields an error and no partial output.
pub fn render_issue_detail(
    w: &mut dyn Write,
    issue: &Issue,
    use_color: bool,
    now: DateTime<Utc>,
) -> Result<(), RenderError> {
    let body = markup::convert_body(issue.description_raw(), use_color)?;

    let opened = issue
        .fields
        .created
        .as_deref()
        .and_then(|raw| time_ago::fuzzy_since(raw, now))
        .unwrap_or_else(|| "some time ago".to_string());

    writeln!(
        w,
        "{} {} {}",
        bold(&issue.key, use_color),
        bold(&issue.fields.summary, use_color),
        dim(&format!("[{}]", issue.priority_name()), use_color),
    )?;
    writeln!(
        w,
        "{} {} • opened {} • {} comment(s)",
        colorize_status(issue, use_color),
        issue.issue_type(),
        opened,
        issue.comment_count(),
    )?;
    writeln!(
        w,
        "Components: {}",
        dim(&issue.component_names().join(", "), use_color)
    )?;
    writeln!(w, "Labels: {}", dim(&issue.fields.labels.join(", "), use_color))?;
    writeln!(w)?;
    write!(w, "{}", body)?;
    Ok(())
}

fn colorize_status(issue: &Issue, use_color: bool) -> String {
    CategoryColor::from(issue.status_category_color()).paint(issue.status(), use_color)
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn bold(text: &str, use_color: bool) -> String {
    if use_color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}

fn dim(text: &str, use_color: bool) -> String {
    if use_color {
        format!("{}", text.dimmed())
    } else {
        text.to_string()
    }
}
