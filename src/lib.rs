pub mod app;
pub mod config;
pub mod dates;
pub mod expenses;
pub mod login;
pub mod nutshells;
pub mod state;
