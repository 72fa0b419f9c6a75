pub mod config;
pub mod error;
pub mod input;
pub mod result;

pub use config::AppConfig;
pub use error::ScoreError;
pub use input::InputBuffer;
pub use result::ScoreResult;
