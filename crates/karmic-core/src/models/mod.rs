pub mod assessment;
pub mod summary;
