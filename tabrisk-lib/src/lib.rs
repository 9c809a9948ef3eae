#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for tabrisk
//!
//! This library holds all functionality for the tabrisk tool, which runs a set of
//! pluggable privacy-risk metrics over original and synthetic tabular datasets and
//! assembles their results into a single report.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface, configuration, and run orchestration
//! - [`data`]: Tabular datasets and the CSV loader
//! - [`metrics`]: The metric capability contract and its value model
//! - [`plugins`]: Plugin units and the built-in metrics
//! - [`engine`]: Plugin registry and the isolating execution engine
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod data;
pub mod engine;
pub mod metrics;
pub mod plugins;
pub mod reports;

pub use crate::commands::{Host, run};
