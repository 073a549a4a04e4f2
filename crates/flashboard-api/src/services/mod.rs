// Services layer for business logic
// Services own the aggregation logic over the shared catalog

pub mod event;

pub use event::EventService;
