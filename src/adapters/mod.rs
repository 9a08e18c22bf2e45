// Adapters layer: concrete sinks for rendered output.

pub mod storage;

pub use storage::{LocalStorage, StdoutSink};
