pub mod body_map;
pub mod health;
pub mod instruments;
pub mod scoring;
pub mod sessions;
