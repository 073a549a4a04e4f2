pub mod dashboard;
pub mod events;
pub mod summary;
pub mod venues;
