use crate::client::{JiraClient, JiraConfig};
use crate::error::Result;
use crate::query::JqlFilter;
use crate::report::{emit_issue_rows, emit_worklog_rows};
use crate::search::PagedSearch;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jt")]
#[command(about = "Export Jira issue and worklog data as CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Jira server URL; falls back to the JIRA_URL environment variable.
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the projects hosted on the server.
    Projects,

    /// Export issues matching a project or issue key.
    ///
    /// KEY must be a project key (issues of the whole project) or an issue
    /// key (that one issue). SINCE and UNTIL bound the issue creation time
    /// stamp (inclusive) and pass through to JQL verbatim, so server-side
    /// functions like now() or startofday() work. Accepted literal formats
    /// include yyyy/MM/dd, yyyy-MM-dd, each optionally followed by HH:mm.
    Issue {
        key: String,

        /// Return issues created at or after this time stamp.
        #[arg(long)]
        since: Option<String>,

        /// Return issues created at or before this time stamp.
        #[arg(long)]
        until: Option<String>,

        /// JQL ordering expression, passed through verbatim (e.g. "rank desc").
        #[arg(long)]
        order_by: Option<String>,

        /// Emit one row per work-log entry instead of one row per issue.
        #[arg(long)]
        worklog: bool,
    },
}

impl Cli {
    fn config(&self) -> Result<JiraConfig> {
        match &self.url {
            Some(url) => JiraConfig::new(url, JiraConfig::auth_from_env()),
            None => JiraConfig::from_env(),
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Projects => {
            let client = JiraClient::connect(cli.config()?).await?;
            let stdout = std::io::stdout();
            let mut writer = csv::Writer::from_writer(stdout.lock());
            writer.write_record(["key", "name"])?;
            for project in client.get_projects().await? {
                writer.write_record([project.key, project.name])?;
            }
            writer.flush()?;
            Ok(())
        }
        Commands::Issue {
            key,
            since,
            until,
            order_by,
            worklog,
        } => {
            // Classify the key before touching the network.
            let mut filter = JqlFilter::new(key);
            if let Some(since) = since {
                filter = filter.since(since);
            }
            if let Some(until) = until {
                filter = filter.until(until);
            }
            if let Some(order_by) = order_by {
                filter = filter.order_by(order_by);
            }
            let jql = filter.build()?;

            let client = JiraClient::connect(cli.config()?).await?;
            let mut search = PagedSearch::new(client.clone(), jql);
            let stdout = std::io::stdout();
            if *worklog {
                emit_worklog_rows(&client, &mut search, stdout.lock()).await
            } else {
                emit_issue_rows(&client, &mut search, stdout.lock()).await
            }
        }
    }
}
