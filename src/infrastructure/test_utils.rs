/// Test utilities for DuckDB-based tests
///
/// Each test gets a fresh database in its own temp directory, cleaned up
/// automatically on drop, so tests stay isolated without rollback logic.
#[cfg(test)]
pub mod test_harness {
    use crate::domain::Entry;
    use crate::infrastructure::repository::EntryRepository;
    use crate::infrastructure::DuckDbStorage;
    use anyhow::Result;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    pub struct TestStorage {
        pub storage: DuckDbStorage,
        _temp_dir: TempDir, // Keep temp dir alive
    }

    impl TestStorage {
        pub fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            let db_path = temp_dir.path().join("test.db");

            let storage =
                DuckDbStorage::new(&db_path).expect("Failed to initialize test DuckDB storage");

            Self {
                storage,
                _temp_dir: temp_dir,
            }
        }

        pub fn storage(&self) -> &DuckDbStorage {
            &self.storage
        }

        /// Create and persist an entry with sample passthrough fields
        pub fn create_sample_entry(&self, date: NaiveDate) -> Result<Entry> {
            let entry = Entry::new(date, "Food Bank", "ada", "signed in");
            self.storage.save(&entry)?;
            Ok(entry)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::TestStorage;
    use crate::infrastructure::repository::EntryRepository;
    use chrono::NaiveDate;

    #[test]
    fn harness_persists_sample_entries() {
        let test_storage = TestStorage::new();
        let date = NaiveDate::from_ymd_opt(1592, 3, 10).unwrap();

        assert!(test_storage.storage().load_all().unwrap().is_empty());

        let entry = test_storage.create_sample_entry(date).unwrap();
        assert_eq!(test_storage.storage().load_all().unwrap(), vec![entry]);
    }

    #[test]
    fn harness_isolates_databases() {
        let test_storage1 = TestStorage::new();
        let test_storage2 = TestStorage::new();

        let date = NaiveDate::from_ymd_opt(1592, 3, 10).unwrap();
        test_storage1.create_sample_entry(date).unwrap();

        assert!(test_storage2.storage().load_all().unwrap().is_empty());
    }
}
