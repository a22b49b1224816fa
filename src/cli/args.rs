//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigInvalidEntries};
use crate::store::InvalidEntryPolicy;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "worklog")]
#[command(about = "Track time spent on projects as flat session files", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Session storage directory (default: $WORKLOG_HOME, then ~/.worklog)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Skip unrecognized files in the storage directory instead of failing
    #[arg(long, global = true)]
    pub(crate) skip_invalid: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.skip_invalid && matches!(config.invalid_entries, Some(ConfigInvalidEntries::Skip))
        {
            self.skip_invalid = true;
        }
        self
    }

    pub(crate) fn invalid_entry_policy(&self) -> InvalidEntryPolicy {
        if self.skip_invalid {
            InvalidEntryPolicy::Skip
        } else {
            InvalidEntryPolicy::Fail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn config_skip_policy_applies_when_flag_is_unset() {
        let cli = parse(&["worklog", "status"]);
        let config = Config {
            storage_dir: None,
            invalid_entries: Some(ConfigInvalidEntries::Skip),
        };
        let merged = cli.with_config(&config);
        assert_eq!(merged.invalid_entry_policy(), InvalidEntryPolicy::Skip);
    }

    #[test]
    fn flag_sets_skip_policy_without_config() {
        let cli = parse(&["worklog", "--skip-invalid", "status"]);
        assert_eq!(cli.invalid_entry_policy(), InvalidEntryPolicy::Skip);
    }

    #[test]
    fn default_policy_is_fail() {
        let cli = parse(&["worklog", "status"]);
        assert_eq!(cli.invalid_entry_policy(), InvalidEntryPolicy::Fail);
    }

    #[test]
    fn tags_are_repeatable_on_start() {
        let cli = parse(&["worklog", "start", "Flow", "--tag", "deep", "--tag", "morning"]);
        match cli.command {
            Some(Commands::Start { project, tags }) => {
                assert_eq!(project, "Flow");
                assert_eq!(tags, vec!["deep".to_string(), "morning".to_string()]);
            }
            _ => panic!("expected start command"),
        }
    }
}
