mod aggregate;
mod group;
mod selector;

pub use aggregate::aggregate;
pub use group::{GroupFileInfo, ReportSet};
pub use selector::Selector;
