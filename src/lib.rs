//! Crop sowing suitability scoring and temperature risk assessment.
//!
//! The scoring core ([`readers::range_parser`], [`utils::calendar`],
//! [`analyzers`]) is a set of pure functions over already-resolved inputs.
//! [`processors`] applies it across a crop calendar catalog.

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{AdvisorError, Result};
