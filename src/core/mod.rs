// src/core/mod.rs

pub mod generator;
pub mod locator;
pub mod p4set;
pub mod templates;
pub mod writer;
