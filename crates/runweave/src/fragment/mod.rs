//! Fragments and their composition.
//!
//! This module provides:
//!
//! - [`Fragment`]: A declarative description of styled text that evaluates to runs
//! - [`Builder`]: A fluent API for assembling fragments in declaration order
//!
//! Evaluation walks a fragment tree once, depth first, concatenating each
//! node's runs in declaration order. Joining additionally merges the result
//! into a single run with a separator between consecutive pieces.

mod builder;
#[allow(clippy::module_inception)]
mod fragment;
mod join;

pub use builder::Builder;
pub use fragment::{Evaluator, Fragment};
pub use join::DEFAULT_SEPARATOR;
