pub mod schedule_grid;
