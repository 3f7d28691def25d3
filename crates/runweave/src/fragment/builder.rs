//! Fluent construction of fragment trees.

use std::borrow::Cow;

use super::fragment::Fragment;
use crate::attributes::Attributes;
use crate::run::StyledRun;

/// Collects fragments in declaration order.
///
/// Each call appends one piece; [`build`](Self::build) returns them as a
/// single composite fragment. Conditional pieces are expressed with
/// [`when`](Self::when) and [`when_some`](Self::when_some) and contribute
/// nothing, not even a separator slot, when skipped.
///
/// # Example
///
/// ```rust
/// use runweave::{AttributeKey, Attributes, Builder, Environment, StyledRun};
///
/// let emphasis = StyledRun::new("world", Attributes::new().with(AttributeKey::ITALIC, true));
///
/// let text = Builder::new()
///     .text("Hello, World!")
///     .when(2 > 1, |b| b.text("Test"))
///     .styled(emphasis)
///     .joined_by_newline();
///
/// let env = Environment::default().with_attribute(AttributeKey::FONT, "Tiempos Text");
/// assert_eq!(text.run(&env).text(), "Hello, World!\nTest\nworld");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    children: Vec<Fragment>,
}

impl Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Appends plain text, styled by the environment at evaluation time.
    pub fn text(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.fragment(Fragment::literal(text))
    }

    /// Appends a run that already carries its own styling.
    pub fn styled(self, run: StyledRun) -> Self {
        self.fragment(Fragment::from(run))
    }

    /// Appends several pre-styled runs, kept as separate pieces.
    pub fn styled_runs(self, runs: impl IntoIterator<Item = StyledRun>) -> Self {
        self.fragment(Fragment::pre_styled(runs))
    }

    /// Appends the output of a fallible rich-text producer.
    ///
    /// A failed producer aborts the build: the error is returned to the
    /// caller and nothing is appended.
    ///
    /// # Errors
    ///
    /// Returns the producer's error unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runweave::{Attributes, Builder, StyledRun};
    ///
    /// fn parse(markup: &str) -> Result<StyledRun, String> {
    ///     if markup.contains('*') {
    ///         Err(format!("unsupported markup: {markup}"))
    ///     } else {
    ///         Ok(StyledRun::new(markup, Attributes::new()))
    ///     }
    /// }
    ///
    /// let ok = Builder::new().text("intro").try_styled(parse("plain"));
    /// assert!(ok.is_ok());
    ///
    /// let failed = Builder::new().text("intro").try_styled(parse("Hello *world*"));
    /// assert_eq!(failed.unwrap_err(), "unsupported markup: Hello *world*");
    /// ```
    pub fn try_styled<R, E>(self, produced: Result<R, E>) -> Result<Self, E>
    where
        R: Into<Fragment>,
    {
        Ok(self.fragment(produced?))
    }

    /// Appends any fragment.
    pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
        self.children.push(fragment.into());
        self
    }

    /// Appends the pieces added by `content` only when `condition` holds.
    ///
    /// `content` is not called when `condition` is false.
    pub fn when(self, condition: bool, content: impl FnOnce(Builder) -> Builder) -> Self {
        let inner = condition.then(|| content(Builder::new()).build());
        self.fragment(Fragment::optional(inner))
    }

    /// Appends the pieces added by `content` only when `value` is present.
    pub fn when_some<T>(self, value: Option<T>, content: impl FnOnce(Builder, T) -> Builder) -> Self {
        let inner = value.map(|value| content(Builder::new(), value).build());
        self.fragment(Fragment::optional(inner))
    }

    /// Appends the pieces added by `content` as one nested composite.
    pub fn nested(self, content: impl FnOnce(Builder) -> Builder) -> Self {
        self.fragment(content(Builder::new()).build())
    }

    /// Appends the pieces added by `content`, evaluated with `overrides`
    /// applied to the environment.
    pub fn scoped(self, overrides: Attributes, content: impl FnOnce(Builder) -> Builder) -> Self {
        self.fragment(content(Builder::new()).build().scoped(overrides))
    }

    /// Returns the collected pieces as a composite fragment.
    pub fn build(self) -> Fragment {
        Fragment::Composite(self.children)
    }

    /// Returns the collected pieces joined by `separator`.
    pub fn joined(self, separator: impl Into<Fragment>) -> Fragment {
        self.build().joined(separator)
    }

    /// Returns the collected pieces joined by newlines.
    pub fn joined_by_newline(self) -> Fragment {
        self.build().joined_by_newline()
    }
}

impl From<Builder> for Fragment {
    fn from(builder: Builder) -> Self {
        builder.build()
    }
}
