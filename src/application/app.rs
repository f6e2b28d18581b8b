use crate::application::Config;
use crate::domain::{DateRange, Entry, RangeError, RangeInput, ReportOutcome, ReportResult};
use crate::infrastructure::{AuditLogHook, DuckDbStorage, EntryRepository, HookRegistry};
use anyhow::Result;
use chrono::NaiveDateTime;

/// Composes the report core with the persistence collaborator. `now` is
/// always passed in by the caller rather than read here, so the whole flow
/// stays deterministic under test.
pub struct ReportApp {
    repository: Box<dyn EntryRepository>,
    hooks: HookRegistry,
}

impl ReportApp {
    pub fn new() -> Result<Self> {
        let config = Config::from_env();
        std::fs::create_dir_all(&config.data_dir)?;

        let repository = DuckDbStorage::new(&config.db_path)?;

        let mut hooks = HookRegistry::new();
        hooks.register(AuditLogHook);

        Ok(Self {
            repository: Box::new(repository),
            hooks,
        })
    }

    pub fn with_repository(repository: Box<dyn EntryRepository>) -> Self {
        Self {
            repository,
            hooks: HookRegistry::new(),
        }
    }

    /// Persist one signature event and run the record hooks.
    pub fn record(&self, entry: Entry) -> Result<()> {
        self.repository.save(&entry)?;
        self.hooks.execute_record_hooks(&entry);
        Ok(())
    }

    /// Resolve the requested range against `now`, load the candidate set and
    /// filter it down to one of the three terminal outcomes. An inverted
    /// range is a normal outcome and is decided before the repository is
    /// touched; only repository failures surface as errors.
    pub fn run_report(&self, input: RangeInput, now: NaiveDateTime) -> Result<ReportOutcome> {
        let range = match DateRange::resolve(input, now) {
            Ok(range) => range,
            Err(RangeError::Inverted) => return Ok(ReportOutcome::InvalidRange),
        };

        let entries = self.repository.load_all()?;
        Ok(ReportResult::build(range, entries).into())
    }
}
