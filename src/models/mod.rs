// Module exports for models

pub mod grid;
pub mod schedule;
pub mod settings;
pub mod vocabulary;
