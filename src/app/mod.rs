pub mod models;
pub mod runner;
