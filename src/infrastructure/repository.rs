use crate::domain::Entry;
use anyhow::Result;

/// Injected persistence capability. The report core filters in memory, so
/// `load_all` returns the full candidate set in recorded order.
pub trait EntryRepository: Send + Sync {
    fn load_all(&self) -> Result<Vec<Entry>>;
    fn save(&self, entry: &Entry) -> Result<()>;
}
