use crate::domain::Entry;
use anyhow::Result;

/// Trait for plugins that respond to a newly recorded signature event
pub trait RecordHook: Send + Sync {
    /// Called after an entry has been successfully persisted
    fn on_entry_recorded(&self, entry: &Entry) -> Result<()>;

    /// Human-readable name for this hook
    fn name(&self) -> &str;
}

/// Registry for managing record hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn RecordHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register<H>(&mut self, hook: H)
    where
        H: RecordHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Run every registered hook. A failing hook is logged and skipped so
    /// one broken plugin cannot fail the record itself.
    pub fn execute_record_hooks(&self, entry: &Entry) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_entry_recorded(entry) {
                log::warn!("hook '{}' failed: {e}", hook.name());
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook that writes an audit line for every recorded signature
pub struct AuditLogHook;

impl RecordHook for AuditLogHook {
    fn on_entry_recorded(&self, entry: &Entry) -> Result<()> {
        log::info!(
            "recorded signature: {} {} at {} ({})",
            entry.date,
            entry.volunteer,
            entry.site,
            entry.action
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Audit Log"
    }
}
