// Schedule service module
// Loads, mutates and persists the class schedule

mod persistence;
mod service;

pub use persistence::{load_snapshot, save_snapshot};
pub use service::ScheduleService;
