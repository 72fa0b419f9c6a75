pub mod commands;
pub mod controller;
pub mod features;
pub mod id;
pub mod operations;
pub mod reorder;
pub mod row;
pub mod row_list;
pub mod snapshot;

pub use controller::RowListController;
pub use features::Features;
pub use id::IdGenerator;
pub use operations::{absorb_missing, ScoreOperations};
pub use row::{Row, RowId, ScoreDelta};
pub use row_list::RowList;
pub use snapshot::Snapshot;
