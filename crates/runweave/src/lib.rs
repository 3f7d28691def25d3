//! # Runweave - Declarative composition of styled text
//!
//! Runweave composes plain strings, pre-styled text and conditional pieces
//! into styled runs, applying a caller-supplied set of style attributes to
//! every piece of plain text.
//!
//! ## Core Concepts
//!
//! - [`Fragment`]: A declarative description of styled text (literal text,
//!   pre-styled runs, conditional and nested pieces)
//! - [`Environment`]: The ambient [`Attributes`] applied to plain text
//! - [`StyledRun`]: The output, an immutable sequence of attributed [`Span`]s
//! - [`Builder`]: A fluent API for declaring fragments in order
//!
//! Plain text takes its attributes from the environment. Pre-styled text
//! keeps its own attributes no matter where it is placed, so output from a
//! markup parser or syntax highlighter is never restyled by the ambient
//! attributes.
//!
//! ## Quick Start
//!
//! ```rust
//! use runweave::{AttributeKey, Attributes, Builder, Environment, StyledRun};
//!
//! // Output of some rich-text producer, styled on its own terms
//! let markup = StyledRun::new("Hello world", Attributes::new().with(AttributeKey::ITALIC, true));
//!
//! let document = Builder::new()
//!     .text("Hello, World!")
//!     .when(2 > 1, |b| b.text("Test"))
//!     .styled(markup)
//!     .joined_by_newline();
//!
//! let env = Environment::default().with_attribute(AttributeKey::FONT, "Tiempos Text");
//! let run = document.run(&env);
//!
//! assert_eq!(run.text(), "Hello, World!\nTest\nHello world");
//! ```
//!
//! ## Joining
//!
//! [`Fragment::joined`] merges the runs a fragment produces into one run,
//! evaluating the separator for every gap between consecutive pieces.
//! [`Fragment::run`] does the same with no separator. Every span in the
//! merged run keeps the attributes it was produced with.
//!
//! ## Configuration
//!
//! Ambient attributes can be loaded from a flat JSON or YAML document with
//! [`Environment::from_json_str`] and [`Environment::from_yaml_str`].
//!
//! ## Logging
//!
//! Joining and scoped evaluation emit `tracing` events at `trace` level;
//! configuration loading emits them at `debug` level. No subscriber is
//! installed by this crate.

mod attributes;
mod environment;
mod error;
mod fragment;
mod run;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use environment::Environment;
pub use error::ConfigError;
pub use fragment::{Builder, Evaluator, Fragment, DEFAULT_SEPARATOR};
pub use run::{Span, StyledRun};
