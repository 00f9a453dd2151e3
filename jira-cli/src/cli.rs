// ABOUTME: CLI argument definitions for the Jira CLI application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Args, Parser, Subcommand};

use crate::completions::{FilterField, Shell};
use crate::filter::{IssueFilters, FILTER_UNSET};

#[derive(Parser, Debug)]
#[command(name = "jira")]
#[command(about = "A CLI for browsing Jira issues", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Jira host (e.g. issues.example.com); overrides JIRA_HOST and config
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List issues, or view a single issue by key
    View(ViewArgs),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print completion candidates for a filterable field
    #[command(hide = true)]
    Candidates {
        /// Field to look up candidates for
        #[arg(value_enum)]
        field: FilterField,
    },
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Issue key (e.g. DEMO-123); omit to list issues
    pub key: Option<String>,

    /// Open in the web browser instead of the terminal
    #[arg(long)]
    pub web: bool,

    /// Predefined filter id (-1 = unset)
    #[arg(short, long, default_value_t = FILTER_UNSET)]
    pub filter: i64,

    /// Limit results [default: 50]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Filter by label
    #[arg(long, value_delimiter = ',')]
    pub label: Vec<String>,

    /// Filter by priority
    #[arg(long, value_delimiter = ',')]
    pub priority: Vec<String>,

    /// Filter by assignee
    #[arg(short, long, value_delimiter = ',')]
    pub assignee: Vec<String>,

    /// Filter by component
    #[arg(short, long, value_delimiter = ',')]
    pub component: Vec<String>,

    /// Filter by project
    #[arg(short, long, value_delimiter = ',')]
    pub project: Vec<String>,

    /// Filter by resolution
    #[arg(short, long, value_delimiter = ',')]
    pub resolution: Vec<String>,

    /// Filter by status
    #[arg(short, long, value_delimiter = ',')]
    pub status: Vec<String>,

    /// Filter by status category
    #[arg(long, value_delimiter = ',')]
    pub status_category: Vec<String>,

    /// Filter by issue type
    #[arg(short = 't', long = "type", value_delimiter = ',')]
    pub issue_type: Vec<String>,

    /// Raw JQL query (takes precedence over every other filter)
    #[arg(short, long)]
    pub jql: Option<String>,

    /// Free-text search
    #[arg(short, long)]
    pub query: Option<String>,
}

impl ViewArgs {
    /// Build the filter criteria for this invocation.
    ///
    /// `default_limit` comes from the config file and applies only when
    /// --limit was not given.
    pub fn to_filters(&self, default_limit: Option<u32>) -> IssueFilters {
        IssueFilters {
            filter: self.filter,
            project: self.project.clone(),
            issue_type: self.issue_type.clone(),
            status: self.status.clone(),
            status_category: self.status_category.clone(),
            assignee: self.assignee.clone(),
            component: self.component.clone(),
            label: self.label.clone(),
            priority: self.priority.clone(),
            resolution: self.resolution.clone(),
            query: self.query.clone().unwrap_or_default(),
            jql: self.jql.clone().unwrap_or_default(),
            limit: self
                .limit
                .or(default_limit)
                .unwrap_or(crate::constants::limits::DEFAULT_RESULT_LIMIT),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "jira");

        let view_cmd = cli
            .find_subcommand("view")
            .expect("view command should exist");
        assert_eq!(view_cmd.get_name(), "view");

        let limit_arg = view_cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "limit")
            .expect("limit argument should exist");
        assert!(!limit_arg.is_required_set());
    }

    #[test]
    fn test_parse_view_defaults() {
        let cli = Cli::try_parse_from(["jira", "view"]).unwrap();
        match cli.command {
            Commands::View(args) => {
                assert_eq!(args.key, None);
                assert!(!args.web);
                assert_eq!(args.filter, FILTER_UNSET);
                assert_eq!(args.limit, None);
                assert!(args.project.is_empty());
                assert_eq!(args.jql, None);
                assert_eq!(args.query, None);
            }
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_parse_view_with_key() {
        let cli = Cli::try_parse_from(["jira", "view", "DEMO-123"]).unwrap();
        match cli.command {
            Commands::View(args) => assert_eq!(args.key.as_deref(), Some("DEMO-123")),
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_parse_comma_separated_lists() {
        let cli = Cli::try_parse_from([
            "jira", "view", "-p", "DEMO,OPS", "--status", "Open,In Progress",
        ])
        .unwrap();
        match cli.command {
            Commands::View(args) => {
                assert_eq!(args.project, vec!["DEMO", "OPS"]);
                assert_eq!(args.status, vec!["Open", "In Progress"]);
            }
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_parse_repeated_flags_accumulate() {
        let cli =
            Cli::try_parse_from(["jira", "view", "--label", "backend", "--label", "urgent"])
                .unwrap();
        match cli.command {
            Commands::View(args) => assert_eq!(args.label, vec!["backend", "urgent"]),
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "jira", "view", "-f", "1200", "-l", "10", "-a", "alice", "-t", "Bug", "-j",
            "project = DEMO", "-q", "login",
        ])
        .unwrap();
        match cli.command {
            Commands::View(args) => {
                assert_eq!(args.filter, 1200);
                assert_eq!(args.limit, Some(10));
                assert_eq!(args.assignee, vec!["alice"]);
                assert_eq!(args.issue_type, vec!["Bug"]);
                assert_eq!(args.jql.as_deref(), Some("project = DEMO"));
                assert_eq!(args.query.as_deref(), Some("login"));
            }
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["jira", "view", "--limit", "0"]).is_err());
    }

    #[test]
    fn test_to_filters_limit_resolution() {
        let parse = |argv: &[&str]| match Cli::try_parse_from(argv).unwrap().command {
            Commands::View(args) => args,
            _ => panic!("expected view command"),
        };

        let args = parse(&["jira", "view"]);
        assert_eq!(args.to_filters(None).limit, 50);
        assert_eq!(args.to_filters(Some(25)).limit, 25);

        let args = parse(&["jira", "view", "--limit", "10"]);
        assert_eq!(args.to_filters(Some(25)).limit, 10);
    }

    #[test]
    fn test_to_filters_carries_criteria() {
        let cli = Cli::try_parse_from([
            "jira", "view", "-p", "DEMO", "-s", "Open", "--status-category", "To Do",
        ])
        .unwrap();
        let args = match cli.command {
            Commands::View(args) => args,
            _ => panic!("expected view command"),
        };

        let filters = args.to_filters(None);
        assert_eq!(filters.project, vec!["DEMO"]);
        assert_eq!(filters.status, vec!["Open"]);
        assert_eq!(filters.status_category, vec!["To Do"]);
        assert_eq!(filters.filter, FILTER_UNSET);
    }
}
