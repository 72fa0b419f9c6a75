pub mod worker;

pub use worker::{SaveStats, SaveWorker};
