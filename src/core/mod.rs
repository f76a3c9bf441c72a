pub mod app;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod persistence;
