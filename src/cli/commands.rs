//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Start tracking a session
    Start {
        /// Project the session belongs to
        project: String,
        /// Tags attached to the session (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Stop the running session
    Stop,
    /// Show the most recent session (default)
    Status,
    /// List recorded sessions
    Report {
        /// Only sessions for this project
        #[arg(short, long)]
        project: Option<String>,
        /// Only sessions started after this moment (YYYYMMDD, YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        since: Option<String>,
        /// Only sessions started before this moment (YYYYMMDD, YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        until: Option<String>,
    },
    /// List distinct projects
    Projects,
    /// List distinct tags used on one project
    Tags {
        /// Project to collect tags from
        project: String,
    },
    /// Delete a session by id
    Delete {
        /// Id of the session to delete
        id: String,
    },
}
