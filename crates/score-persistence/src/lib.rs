pub mod envelope;
pub mod migration;
pub mod repository;
pub mod save;
pub mod store;
pub mod traits;

pub use envelope::{RowsEnvelope, CURRENT_FORMAT_VERSION};
pub use migration::Migrator;
pub use repository::RowRepository;
pub use save::{SaveStats, SaveWorker};
pub use store::*;
pub use traits::*;
