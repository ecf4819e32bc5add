//! Flattens Scout2 AWS audit results (`aws_config.js`) into CSV reports.

pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod models;
pub mod reporting;
