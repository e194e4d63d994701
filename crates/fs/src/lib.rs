mod config;
mod counter;
mod error;
mod pool;
mod record;
mod rules;
mod task;
mod walker;

pub use config::{MAX_QUEUE_CAPACITY, QUEUE_DEPTH_PER_WORKER, READ_BUFFER_SIZE};
pub use counter::count_lines;
pub use error::ScanError;
pub use pool::{Collected, Job, WorkerPool};
pub use record::{FileInfo, extension_of};
pub use rules::RuleSet;
pub use task::FileTask;
pub use walker::{TaskSink, WalkStats, walk};
