mod app;
mod dialogs;
pub mod theme;
mod views;

pub use app::ScheduleApp;
