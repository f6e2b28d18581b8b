use crate::domain::Entry;
use crate::infrastructure::repository::EntryRepository;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use duckdb::{Connection, params};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Schema migrations, applied in order and recorded in the `migrations`
/// table so reopening an existing database is a no-op.
const MIGRATIONS: &[(i32, &str, &str)] = &[(
    1,
    "create_signature_events",
    r#"
    CREATE SEQUENCE IF NOT EXISTS signature_events_id_seq;
    CREATE TABLE IF NOT EXISTS signature_events (
        id BIGINT PRIMARY KEY DEFAULT nextval('signature_events_id_seq'),
        date TEXT NOT NULL,
        site TEXT NOT NULL,
        volunteer TEXT NOT NULL,
        action TEXT NOT NULL,
        recorded_at TIMESTAMP DEFAULT current_timestamp
    );
    "#,
)];

pub struct DuckDbStorage {
    conn: Mutex<Connection>,
}

// Mark DuckDbStorage as Send + Sync since the connection is behind a Mutex
unsafe impl Send for DuckDbStorage {}
unsafe impl Sync for DuckDbStorage {}

impl DuckDbStorage {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path).context("Failed to open DuckDB connection")?;

        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.initialize()?;
        Ok(storage)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .context("Failed to create in-memory DuckDB connection")?;

        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.initialize()?;
        Ok(storage)
    }

    fn initialize(&self) -> Result<()> {
        self.setup_migration_table()?;
        self.run_migrations()?;
        Ok(())
    }

    fn setup_migration_table(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TIMESTAMP DEFAULT current_timestamp
            );
            "#,
        )
        .context("Failed to create migrations table")?;
        Ok(())
    }

    fn run_migrations(&self) -> Result<()> {
        let applied = self.applied_migrations()?;

        for (version, name, sql) in MIGRATIONS {
            if applied.contains(version) {
                continue;
            }
            log::debug!("applying migration {version}: {name}");
            let conn = self.conn.lock().unwrap();
            conn.execute_batch(sql)
                .with_context(|| format!("Failed to apply migration {version}: {name}"))?;
            conn.execute(
                "INSERT INTO migrations (version, name) VALUES (?, ?)",
                params![version, name],
            )
            .with_context(|| format!("Failed to record migration {name} as applied"))?;
        }

        Ok(())
    }

    fn applied_migrations(&self) -> Result<HashSet<i32>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT version FROM migrations ORDER BY version")
            .context("Failed to prepare migration query")?;

        let rows = stmt.query_map([], |row| row.get::<_, i32>(0))?;

        let mut applied = HashSet::new();
        for version in rows {
            applied.insert(version?);
        }

        Ok(applied)
    }
}

impl EntryRepository for DuckDbStorage {
    fn load_all(&self) -> Result<Vec<Entry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(
                "SELECT date, site, volunteer, action FROM signature_events ORDER BY id",
            )
            .context("Failed to prepare select statement")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (date_str, site, volunteer, action) = row?;
            let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                .context("Failed to parse date from database")?;
            entries.push(Entry {
                date,
                site,
                volunteer,
                action,
            });
        }

        Ok(entries)
    }

    fn save(&self, entry: &Entry) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO signature_events (date, site, volunteer, action) VALUES (?, ?, ?, ?)",
            params![
                entry.date.format(DATE_FORMAT).to_string(),
                entry.site,
                entry.volunteer,
                entry.action
            ],
        )
        .context("Failed to save signature event")?;

        Ok(())
    }
}
