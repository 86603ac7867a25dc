// src/lib.rs

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod frontend;
pub mod models;
pub mod system;
