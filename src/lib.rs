pub mod brief;
pub mod cli;
pub mod config;
pub mod generator;
