use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded volunteer shift event. Only `date` carries meaning for the
/// report; the remaining fields are passed through to presentation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub site: String,
    pub volunteer: String,
    pub action: String,
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        site: impl Into<String>,
        volunteer: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            date,
            site: site.into(),
            volunteer: volunteer.into(),
            action: action.into(),
        }
    }
}
