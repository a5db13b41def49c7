// Service module exports

pub mod contact;
pub mod database;
pub mod export;
pub mod schedule;
pub mod settings;
pub mod storage;
