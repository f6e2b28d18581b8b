pub mod date_range;
pub mod entry;
pub mod report;

pub use date_range::*;
pub use entry::*;
pub use report::*;
