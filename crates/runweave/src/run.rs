//! Styled runs: the output of evaluating a fragment.
//!
//! A [`Span`] is a piece of text paired with the attributes it is drawn with.
//! A [`StyledRun`] is an ordered list of spans laid end to end, the unit that
//! fragments produce and that joining merges. A run built from plain text has
//! exactly one span; a run produced by joining carries every span of every
//! joined piece, each with its own original attributes.
//!
//! Runs are immutable once built. Joining builds a new run rather than
//! extending an existing one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// A piece of text and the attributes applied to all of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    text: String,
    attributes: Arc<Attributes>,
}

impl Span {
    pub fn new(text: impl Into<String>, attributes: impl Into<Arc<Attributes>>) -> Self {
        Self {
            text: text.into(),
            attributes: attributes.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// An immutable sequence of attributed spans.
///
/// # Example
///
/// ```rust
/// use runweave::{AttributeKey, Attributes, Span, StyledRun};
///
/// let plain = Attributes::new();
/// let bold = Attributes::new().with(AttributeKey::WEIGHT, "bold");
///
/// let run = StyledRun::from_spans([Span::new("Hello ", plain), Span::new("world", bold)]);
///
/// assert_eq!(run.text(), "Hello world");
/// assert_eq!(run.spans().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledRun {
    spans: Vec<Span>,
}

impl StyledRun {
    /// Creates a run holding a single span.
    pub fn new(text: impl Into<String>, attributes: impl Into<Arc<Attributes>>) -> Self {
        Self {
            spans: vec![Span::new(text, attributes)],
        }
    }

    /// Creates a run from spans, kept in the given order.
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    /// A run with no text and no attributes.
    pub fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// Returns the text of every span, concatenated.
    pub fn text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }

    /// Length of the concatenated text in bytes.
    pub fn len(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    /// Returns `true` if the run holds no text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Span::is_empty)
    }
}

impl fmt::Display for StyledRun {
    /// Writes the plain text of the run, without attributes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

/// Builds a new run by laying pieces end to end.
///
/// Every span of every piece is carried over as it is, empty text included.
#[derive(Debug)]
pub(crate) struct RunAccumulator {
    spans: Vec<Span>,
}

impl RunAccumulator {
    pub(crate) fn starting_with(first: StyledRun) -> Self {
        Self { spans: first.spans }
    }

    pub(crate) fn append(&mut self, piece: StyledRun) {
        self.spans.extend(piece.spans);
    }

    pub(crate) fn finish(self) -> StyledRun {
        StyledRun { spans: self.spans }
    }
}
