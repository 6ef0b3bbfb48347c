//! dburl CLI - Command-line interface for inspecting database URLs.
//!
//! This crate provides the `dburl` tool, which decomposes JDBC-style
//! MySQL, Cassandra and Oracle URLs and prints their parts.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
