// ABOUTME: Shell completion generation and per-field completion candidates
// ABOUTME: Candidate lookup queries the API; the core pipeline never depends on it

use anyhow::{anyhow, Result};
use clap::{Command, ValueEnum};
use clap_complete::{generate, shells};
use jira_sdk::JiraClient;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[allow(clippy::enum_variant_names)]
    PowerShell,
}

impl Shell {
    /// Get all supported shell variants
    pub fn all() -> Vec<Shell> {
        vec![Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell]
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shell_str = match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
        };
        write!(f, "{}", shell_str)
    }
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            _ => Err(anyhow!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish, powershell",
                s
            )),
        }
    }
}

/// Generate a static completion script for the specified shell.
pub fn generate_completions<W: Write>(shell: Shell, cmd: &mut Command, writer: &mut W) {
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, "jira", writer),
        Shell::Zsh => generate(shells::Zsh, cmd, "jira", writer),
        Shell::Fish => generate(shells::Fish, cmd, "jira", writer),
        Shell::PowerShell => generate(shells::PowerShell, cmd, "jira", writer),
    }
}

/// A filterable field whose values can be suggested by the completion
/// layer. Dispatches to the matching API lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterField {
    Project,
    Type,
    Status,
    StatusCategory,
    Assignee,
    Component,
    Label,
    Priority,
    Resolution,
    Filter,
}

impl FilterField {
    /// Fetch completion candidates for this field.
    ///
    /// Fields with no cheap lookup endpoint (assignees need a search
    /// query, labels have no listing API) return no candidates.
    pub async fn candidates(&self, client: &JiraClient) -> jira_sdk::Result<Vec<String>> {
        let candidates = match self {
            FilterField::Project => client
                .projects()
                .await?
                .into_iter()
                .map(|p| p.key)
                .collect(),
            FilterField::Type => client
                .issue_types()
                .await?
                .into_iter()
                .map(|t| t.name)
                .collect(),
            FilterField::Status => client
                .statuses()
                .await?
                .into_iter()
                .map(|s| s.name)
                .collect(),
            FilterField::StatusCategory => client
                .status_categories()
                .await?
                .into_iter()
                .map(|c| c.name)
                .collect(),
            FilterField::Priority => client
                .priorities()
                .await?
                .into_iter()
                .map(|p| p.name)
                .collect(),
            FilterField::Resolution => client
                .resolutions()
                .await?
                .into_iter()
                .map(|r| r.name)
                .collect(),
            FilterField::Filter => client
                .favourite_filters()
                .await?
                .into_iter()
                .map(|f| format!("{}\t{}", f.id, f.name))
                .collect(),
            FilterField::Assignee | FilterField::Component | FilterField::Label => Vec::new(),
        };
        Ok(candidates)
    }
}
