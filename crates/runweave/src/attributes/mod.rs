//! Style attributes attached to text.
//!
//! This module provides the primitives that describe how a piece of text is styled:
//!
//! - [`AttributeKey`]: The name of an attribute (`font`, `foreground-color`, ...)
//! - [`AttributeValue`]: An opaque value understood by the host renderer
//! - [`Attributes`]: An ordered mapping from keys to values
//!
//! Nothing in this crate interprets attribute values. They are threaded through
//! composition and attached to text, and it is up to whatever displays the
//! result to decide what `font = "Tiempos Text"` means.

mod key;
mod map;
mod value;

pub use key::AttributeKey;
pub use map::Attributes;
pub use value::AttributeValue;
