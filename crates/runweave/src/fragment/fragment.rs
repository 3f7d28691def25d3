//! The fragment tree and its evaluation.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::environment::Environment;
use crate::run::StyledRun;

/// A user supplied evaluation function, see [`Fragment::deferred`].
pub type Evaluator = Arc<dyn Fn(&Environment) -> Vec<StyledRun> + Send + Sync>;

/// A declarative piece of styled text.
///
/// Evaluating a fragment against an [`Environment`] yields an ordered,
/// possibly empty list of [`StyledRun`]s. Evaluation is pure: the same tree
/// evaluated twice against the same environment produces equal output, and
/// neither the environment nor any previously produced run is modified.
///
/// Fragments are usually built through conversions and [`Builder`](crate::Builder)
/// rather than by naming variants:
///
/// ```rust
/// use runweave::{AttributeKey, Environment, Fragment};
///
/// let env = Environment::default().with_attribute(AttributeKey::FONT, "Tiempos Text");
/// let greeting = Fragment::from(vec![Fragment::from("Hello, "), Fragment::from("World!")]);
///
/// let runs = greeting.evaluate(&env);
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].spans()[0].attributes(), env.attributes());
/// ```
#[derive(Clone)]
pub enum Fragment {
    /// Plain text, styled with the environment's attributes.
    Literal(Cow<'static, str>),
    /// Runs that already carry their own styling and ignore the environment.
    PreStyled(Vec<StyledRun>),
    /// A fragment that contributes nothing when absent.
    Conditional(Option<Box<Fragment>>),
    /// Children evaluated in order against the same environment and concatenated.
    Composite(Vec<Fragment>),
    /// Content merged into a single run with `separator` between its pieces.
    Joined {
        separator: Box<Fragment>,
        content: Box<Fragment>,
    },
    /// Content evaluated against the environment with `overrides` applied.
    Scoped {
        overrides: Attributes,
        content: Box<Fragment>,
    },
    /// An arbitrary evaluation function.
    Deferred(Evaluator),
}

impl Fragment {
    /// Plain text styled by the environment.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Fragment::Literal(text.into())
    }

    /// Runs produced elsewhere, emitted unchanged.
    pub fn pre_styled(runs: impl IntoIterator<Item = StyledRun>) -> Self {
        Fragment::PreStyled(runs.into_iter().collect())
    }

    /// A fragment that produces nothing.
    pub fn empty() -> Self {
        Fragment::Composite(Vec::new())
    }

    /// Concatenates `children` in order.
    pub fn composite(children: impl IntoIterator<Item = Fragment>) -> Self {
        Fragment::Composite(children.into_iter().collect())
    }

    /// Includes `content` if present.
    pub fn optional(content: Option<impl Into<Fragment>>) -> Self {
        Fragment::Conditional(content.map(|c| Box::new(c.into())))
    }

    /// Includes the fragment built by `content` only when `condition` holds.
    ///
    /// `content` is not called when `condition` is false.
    pub fn when<F: Into<Fragment>>(condition: bool, content: impl FnOnce() -> F) -> Self {
        Fragment::optional(condition.then(content))
    }

    /// Wraps an arbitrary evaluation function.
    ///
    /// The function must be pure for evaluation to stay deterministic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runweave::{AttributeKey, Environment, Fragment, StyledRun};
    ///
    /// let shouting = Fragment::deferred(|env| {
    ///     vec![StyledRun::new("HEY", env.attributes().clone())]
    /// });
    ///
    /// let runs = shouting.evaluate(&Environment::default());
    /// assert_eq!(runs[0].text(), "HEY");
    /// ```
    pub fn deferred(evaluate: impl Fn(&Environment) -> Vec<StyledRun> + Send + Sync + 'static) -> Self {
        Fragment::Deferred(Arc::new(evaluate))
    }

    /// Evaluates this fragment against a copy of the environment with
    /// `overrides` applied on top.
    ///
    /// Only plain text inside is affected. Pre-styled runs keep their own
    /// attributes.
    pub fn scoped(self, overrides: Attributes) -> Self {
        Fragment::Scoped {
            overrides,
            content: Box::new(self),
        }
    }

    /// Evaluates this fragment with a single attribute overridden.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runweave::{AttributeKey, AttributeValue, Environment, Fragment};
    ///
    /// let env = Environment::default().with_attribute(AttributeKey::WEIGHT, "regular");
    /// let bold = Fragment::from("important").with_attribute(AttributeKey::WEIGHT, "bold");
    ///
    /// let runs = bold.evaluate(&env);
    /// assert_eq!(
    ///     runs[0].spans()[0].attributes().get(&AttributeKey::WEIGHT),
    ///     Some(&AttributeValue::Text("bold".into()))
    /// );
    /// ```
    pub fn with_attribute(
        self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        match self {
            Fragment::Scoped {
                mut overrides,
                content,
            } => {
                overrides.insert(key, value);
                Fragment::Scoped { overrides, content }
            }
            other => other.scoped(Attributes::new().with(key, value)),
        }
    }

    /// Evaluates this fragment into an ordered list of runs.
    pub fn evaluate(&self, env: &Environment) -> Vec<StyledRun> {
        match self {
            Fragment::Literal(text) => {
                vec![StyledRun::new(&**text, env.shared_attributes())]
            }
            Fragment::PreStyled(runs) => runs.clone(),
            Fragment::Conditional(content) => content
                .as_ref()
                .map(|content| content.evaluate(env))
                .unwrap_or_default(),
            Fragment::Composite(children) => children
                .iter()
                .flat_map(|child| child.evaluate(env))
                .collect(),
            Fragment::Joined { separator, content } => vec![content.join(separator, env)],
            Fragment::Scoped { overrides, content } => {
                tracing::trace!(overrides = overrides.len(), "evaluating scoped fragment");
                content.evaluate(&env.with_attributes(overrides))
            }
            Fragment::Deferred(evaluate) => evaluate(env),
        }
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Fragment::empty()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Fragment::PreStyled(runs) => f.debug_tuple("PreStyled").field(runs).finish(),
            Fragment::Conditional(content) => {
                f.debug_tuple("Conditional").field(content).finish()
            }
            Fragment::Composite(children) => f.debug_tuple("Composite").field(children).finish(),
            Fragment::Joined { separator, content } => f
                .debug_struct("Joined")
                .field("separator", separator)
                .field("content", content)
                .finish(),
            Fragment::Scoped { overrides, content } => f
                .debug_struct("Scoped")
                .field("overrides", overrides)
                .field("content", content)
                .finish(),
            Fragment::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&'static str> for Fragment {
    fn from(text: &'static str) -> Self {
        Fragment::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(Cow::Owned(text))
    }
}

impl From<StyledRun> for Fragment {
    fn from(run: StyledRun) -> Self {
        Fragment::PreStyled(vec![run])
    }
}

impl From<Vec<StyledRun>> for Fragment {
    fn from(runs: Vec<StyledRun>) -> Self {
        Fragment::PreStyled(runs)
    }
}

impl From<Vec<Fragment>> for Fragment {
    fn from(children: Vec<Fragment>) -> Self {
        Fragment::Composite(children)
    }
}

impl<F: Into<Fragment>> From<Option<F>> for Fragment {
    fn from(content: Option<F>) -> Self {
        Fragment::optional(content)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Fragment::composite(iter)
    }
}
