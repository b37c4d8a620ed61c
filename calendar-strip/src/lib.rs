#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod error;
pub mod events;
pub mod format;
pub mod host;
pub mod label;
pub mod strip;
pub mod widths;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{Error, Result};
pub use crate::strip::{Cell, DayStrip, StripConfig, StripState};
pub use day_range::DayRange;
