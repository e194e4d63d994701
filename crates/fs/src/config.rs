/// Queued tasks allowed per worker before `submit` applies backpressure.
pub const QUEUE_DEPTH_PER_WORKER: usize = 64;

/// Upper bound on the job queue, whatever the worker count. The channel
/// allocates its slots up front.
pub const MAX_QUEUE_CAPACITY: usize = 64 * 1024;

/// Chunk size used when streaming file contents through the line counter.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;
