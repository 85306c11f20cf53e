// System Layer
pub mod filesystem;
pub mod worker;

pub use filesystem::FileSystem;
pub use worker::{BackgroundWorker, WorkerEvent};
