//! Session lifecycle: the start/stop business rules on top of the store.
//!
//! At most one session may be running at a time. "Running" is derived, not
//! stored: the most recently started session counts as running while it has
//! no recorded end. The check-then-write in `start` is not atomic, so two
//! racing invocations can both pass the check; acceptable for a single-user
//! tool.

use chrono::{DateTime, Utc};

use crate::core::Session;
use crate::error::TrackerError;
use crate::store::SessionStore;

/// Source of "now" for new sessions.
pub(crate) trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of unique session ids.
///
/// Ids must never contain `-`: the filename codec splits on it.
pub(crate) trait IdGenerator {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs in simple (hex-only, no hyphen) form.
pub(crate) struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Input to `start`.
#[derive(Debug, Clone)]
pub(crate) struct StartCommand {
    pub(crate) project: String,
    pub(crate) tags: Vec<String>,
}

pub(crate) struct Tracker<'a> {
    store: &'a dyn SessionStore,
    clock: &'a dyn Clock,
    ids: &'a dyn IdGenerator,
}

impl<'a> Tracker<'a> {
    pub(crate) fn new(
        store: &'a dyn SessionStore,
        clock: &'a dyn Clock,
        ids: &'a dyn IdGenerator,
    ) -> Self {
        Self { store, clock, ids }
    }

    /// Seconds-truncated "now", matching on-disk precision.
    fn now(&self) -> DateTime<Utc> {
        let now = self.clock.now();
        DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
    }

    /// Start a new session, unless one is still running.
    ///
    /// On failure nothing is written; on success exactly one new file is.
    pub(crate) fn start(&self, command: StartCommand) -> Result<Session, TrackerError> {
        if let Some(last) = self.store.find_last()?
            && last.is_active()
        {
            return Err(TrackerError::AlreadyStarted {
                project: last.project,
            });
        }

        let session = Session {
            id: self.ids.generate(),
            start_time: self.now(),
            end_time: None,
            project: command.project,
            tags: command.tags,
        };
        self.store.save(&session)?;
        Ok(session)
    }

    /// Mark the running session as ended, rewriting its file in place.
    pub(crate) fn stop(&self) -> Result<Session, TrackerError> {
        let Some(mut last) = self.store.find_last()? else {
            return Err(TrackerError::NotStarted);
        };
        if !last.is_active() {
            return Err(TrackerError::NotStarted);
        }

        last.end_time = Some(self.now());
        self.store.save(&last)?;
        Ok(last)
    }

    /// The most recent session, running or not.
    pub(crate) fn status(&self) -> Result<Option<Session>, TrackerError> {
        Ok(self.store.find_last()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionFilters;
    use crate::store::{FsSessionStore, InvalidEntryPolicy};
    use chrono::TimeZone;
    use std::cell::Cell;
    use tempfile::TempDir;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct SequentialIds(Cell<u32>);

    impl SequentialIds {
        fn new() -> Self {
            Self(Cell::new(0))
        }
    }

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            let n = self.0.get() + 1;
            self.0.set(n);
            format!("id{n}")
        }
    }

    fn start_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 13, 17, 20, 0).unwrap()
    }

    fn command() -> StartCommand {
        StartCommand {
            project: "Flow".to_string(),
            tags: vec!["start".to_string()],
        }
    }

    #[test]
    fn start_persists_a_new_session() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time());
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        let session = tracker.start(command()).unwrap();

        assert_eq!(
            session,
            Session {
                id: "id1".to_string(),
                start_time: start_time(),
                end_time: None,
                project: "Flow".to_string(),
                tags: vec!["start".to_string()],
            }
        );
        let saved = store.find_by_id("id1").unwrap().unwrap();
        assert_eq!(saved, session);
    }

    #[test]
    fn start_truncates_the_clock_to_whole_seconds() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time() + chrono::Duration::milliseconds(750));
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        let session = tracker.start(command()).unwrap();
        assert_eq!(session.start_time, start_time());
    }

    #[test]
    fn start_fails_while_a_session_is_running() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time());
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        tracker.start(command()).unwrap();
        let err = tracker.start(command()).unwrap_err();

        assert!(matches!(
            err,
            TrackerError::AlreadyStarted { project } if project == "Flow"
        ));
        // the failed start wrote nothing
        let all = store.find_all(&SessionFilters::default()).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn stop_marks_the_running_session_ended() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time());
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        tracker.start(command()).unwrap();
        let stopped = tracker.stop().unwrap();

        assert_eq!(stopped.end_time, Some(start_time()));
        // still exactly one file: stop rewrites, never adds
        let all = store.find_all(&SessionFilters::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].is_active());
    }

    #[test]
    fn stop_without_a_session_fails() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time());
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        assert!(matches!(tracker.stop().unwrap_err(), TrackerError::NotStarted));
    }

    #[test]
    fn stop_twice_fails_the_second_time() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time());
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        tracker.start(command()).unwrap();
        tracker.stop().unwrap();
        assert!(matches!(tracker.stop().unwrap_err(), TrackerError::NotStarted));
    }

    #[test]
    fn start_succeeds_again_after_stop() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let ids = SequentialIds::new();

        let t0 = FixedClock(start_time());
        Tracker::new(&store, &t0, &ids).start(command()).unwrap();
        Tracker::new(&store, &t0, &ids).stop().unwrap();

        let t1 = FixedClock(start_time() + chrono::Duration::hours(1));
        let second = Tracker::new(&store, &t1, &ids).start(command()).unwrap();

        assert_eq!(second.id, "id2");
        let all = store.find_all(&SessionFilters::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn generated_ids_are_delimiter_free() {
        let id = UuidGenerator.generate();
        assert!(!id.contains('-'));
        assert_eq!(id.len(), 32);
    }

    #[test]
    fn status_reports_the_latest_session() {
        let dir = TempDir::new().unwrap();
        let store = FsSessionStore::open(dir.path(), InvalidEntryPolicy::Fail).unwrap();
        let clock = FixedClock(start_time());
        let ids = SequentialIds::new();
        let tracker = Tracker::new(&store, &clock, &ids);

        assert!(tracker.status().unwrap().is_none());
        let started = tracker.start(command()).unwrap();
        assert_eq!(tracker.status().unwrap(), Some(started));
    }
}
