pub mod rows;
pub mod scores;
