use std::env;
use std::path::PathBuf;

use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::consts::{DEFAULT_WORKLOG_DIR, WORKLOG_HOME_ENV};
use crate::core::{SessionFilters, TimeRange};
use crate::error::AppError;
use crate::output::{format_duration, format_moment, print_session_table, sessions_json};
use crate::store::SessionStore;
use crate::tracker::{StartCommand, SystemClock, Tracker, UuidGenerator};
use crate::utils::parse_moment;

/// Where session files live: `--dir` flag, then `$WORKLOG_HOME`, then the
/// config file, then `~/.worklog`.
pub(crate) fn resolve_storage_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = env::var(WORKLOG_HOME_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    if let Some(dir) = &config.storage_dir {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_WORKLOG_DIR),
        None => PathBuf::from(DEFAULT_WORKLOG_DIR),
    }
}

pub(crate) fn run(cli: &Cli, store: &dyn SessionStore) -> Result<(), AppError> {
    let clock = SystemClock;
    let ids = UuidGenerator;
    let tracker = Tracker::new(store, &clock, &ids);

    match &cli.command {
        Some(Commands::Start { project, tags }) => {
            let session = tracker.start(StartCommand {
                project: project.clone(),
                tags: tags.clone(),
            })?;
            if cli.json {
                println!("{}", sessions_json(&[session]));
            } else {
                println!(
                    "Started session {} for project \"{}\" at {}",
                    session.id,
                    session.project,
                    format_moment(session.start_time)
                );
            }
        }
        Some(Commands::Stop) => {
            let session = tracker.stop()?;
            if cli.json {
                println!("{}", sessions_json(&[session]));
            } else {
                println!(
                    "Stopped session for project \"{}\" after {}",
                    session.project,
                    format_duration(&session, Utc::now())
                );
            }
        }
        Some(Commands::Report {
            project,
            since,
            until,
        }) => {
            let filters = SessionFilters {
                project: project.clone(),
                range: TimeRange::new(
                    since.as_deref().map(parse_moment).transpose()?,
                    until.as_deref().map(parse_moment).transpose()?,
                ),
            };
            let sessions = store.find_all(&filters)?;
            if cli.json {
                println!("{}", sessions_json(&sessions));
            } else if sessions.is_empty() {
                println!("No sessions found.");
            } else {
                print_session_table(&sessions, Utc::now());
            }
        }
        Some(Commands::Projects) => {
            let projects = store.find_all_projects()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&projects).unwrap_or_else(|_| "[]".to_string())
                );
            } else if projects.is_empty() {
                println!("No projects recorded.");
            } else {
                for project in projects {
                    println!("{project}");
                }
            }
        }
        Some(Commands::Tags { project }) => {
            let tags = store.find_all_project_tags(project)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&tags).unwrap_or_else(|_| "[]".to_string())
                );
            } else if tags.is_empty() {
                println!("No tags recorded for \"{project}\".");
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }
        Some(Commands::Delete { id }) => {
            store.delete(id)?;
            println!("Deleted session {id}");
        }
        Some(Commands::Status) | None => {
            let last = tracker.status()?;
            match last {
                None => println!("No sessions recorded."),
                Some(session) if cli.json => println!("{}", sessions_json(&[session])),
                Some(session) if session.is_active() => println!(
                    "Tracking \"{}\" since {} ({})",
                    session.project,
                    format_moment(session.start_time),
                    format_duration(&session, Utc::now())
                ),
                Some(session) => println!(
                    "Last session on \"{}\" ended at {}",
                    session.project,
                    format_moment(session.end_time.unwrap_or(session.start_time))
                ),
            }
        }
    }

    Ok(())
}
