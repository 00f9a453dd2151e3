// ABOUTME: Main entry point for the Jira CLI application
// ABOUTME: Wires config, filter compilation, fetching, and rendering together

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use jira_sdk::JiraClient;
use std::env;
use std::io::{self, IsTerminal};

use jira_cli::cli::{Cli, Commands, ViewArgs};
use jira_cli::cli_output::CliOutput;
use jira_cli::completions;
use jira_cli::config::Config;
use jira_cli::filter::browse_url;
use jira_cli::{output, pager};

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let stderr_color = io::stderr().is_terminal() && !cli.no_color;
    let out = CliOutput::with_color(stderr_color);

    if let Err(err) = run(cli).await {
        out.error(&format!("{:#}", err));
        if let Some(jira_err) = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<jira_sdk::JiraError>())
        {
            if let Some(help) = jira_err.help_text() {
                out.hint(help);
            }
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // Determine if color should be used
    let use_color = !cli.no_color
        && env::var("NO_COLOR").is_err()
        && env::var("TERM").unwrap_or_default() != "dumb"
        && io::stdout().is_terminal();

    match cli.command {
        Commands::View(args) => view(&args, cli.host.as_deref(), &config, use_color).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            completions::generate_completions(shell, &mut cmd, &mut io::stdout());
            Ok(())
        }
        Commands::Candidates { field } => {
            let host = resolve_host(cli.host.as_deref(), &config)?;
            let client = JiraClient::from_env(&host)?;
            for candidate in field.candidates(&client).await? {
                println!("{}", candidate);
            }
            Ok(())
        }
    }
}

async fn view(
    args: &ViewArgs,
    host_flag: Option<&str>,
    config: &Config,
    use_color: bool,
) -> Result<()> {
    let host = resolve_host(host_flag, config)?;
    let filters = args.to_filters(config.default_limit);
    let now = Utc::now();

    match &args.key {
        // List mode
        None => {
            if args.web {
                let url = filters.search_url(&host)?;
                log::debug!("opening {}", url);
                return open::that(url).context("failed to open browser");
            }

            let jql = filters.to_jql()?;
            log::debug!("compiled query: {}", jql);

            let client = JiraClient::from_env(&host)?;
            let issues = client
                .search_issues(&jql, &filters.fields, filters.limit)
                .await
                .context("failed to fetch issues")?;

            pager::with_pager(config.pager.as_deref(), |w| {
                output::render_issue_list(w, &issues, use_color, now)
            })
            .context("failed to render issue list")?;
            Ok(())
        }
        // Detail mode
        Some(key) => {
            if args.web {
                return open::that(browse_url(&host, key)).context("failed to open browser");
            }

            let client = JiraClient::from_env(&host)?;
            let issue = client
                .get_issue(key)
                .await
                .with_context(|| format!("failed to fetch issue {}", key))?;

            pager::with_pager(config.pager.as_deref(), |w| {
                output::render_issue_detail(w, &issue, use_color, now)
            })
            .context("failed to render issue")?;
            Ok(())
        }
    }
}

/// Host precedence: --host flag, then JIRA_HOST, then config default_host.
fn resolve_host(flag: Option<&str>, config: &Config) -> Result<String> {
    flag.map(|h| h.to_string())
        .or_else(|| env::var("JIRA_HOST").ok())
        .or_else(|| config.default_host.clone())
        .ok_or_else(|| {
            anyhow!("no Jira host configured; pass --host, set JIRA_HOST, or add default_host to the config file")
        })
}
