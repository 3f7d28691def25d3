//! Joining a fragment's pieces into a single run.

use super::fragment::Fragment;
use crate::environment::Environment;
use crate::run::{RunAccumulator, StyledRun};

/// The separator [`Fragment::joined_by_newline`] places between pieces.
pub const DEFAULT_SEPARATOR: &str = "\n";

impl Fragment {
    /// Wraps this fragment so that it evaluates to one run, with `separator`
    /// placed between the runs it would otherwise produce.
    ///
    /// The separator is itself a fragment: plain text separators pick up the
    /// environment's attributes, and a separator producing several runs has
    /// all of them inserted at every gap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runweave::{Builder, Environment};
    ///
    /// let list = Builder::new().text("A").text("B").text("C").build().joined("-");
    ///
    /// let runs = list.evaluate(&Environment::default());
    /// assert_eq!(runs.len(), 1);
    /// assert_eq!(runs[0].text(), "A-B-C");
    /// ```
    pub fn joined(self, separator: impl Into<Fragment>) -> Fragment {
        Fragment::Joined {
            separator: Box::new(separator.into()),
            content: Box::new(self),
        }
    }

    /// Same as [`joined`](Self::joined) with a newline separator.
    pub fn joined_by_newline(self) -> Fragment {
        self.joined(DEFAULT_SEPARATOR)
    }

    /// Evaluates this fragment and merges its runs into one, with
    /// `separator` evaluated afresh for every gap.
    ///
    /// - No runs: the result is an empty run.
    /// - One run: the result is that run, with no separator.
    /// - Otherwise each later run is appended after the separator's runs.
    ///   Every span of every piece is carried over unchanged, with the
    ///   attributes it was produced with.
    pub fn join(&self, separator: &Fragment, env: &Environment) -> StyledRun {
        let pieces = self.evaluate(env);
        tracing::trace!(pieces = pieces.len(), "joining fragment output");

        let mut pieces = pieces.into_iter();
        let Some(first) = pieces.next() else {
            return StyledRun::empty();
        };

        let mut merged = RunAccumulator::starting_with(first);
        for piece in pieces {
            for separator_run in separator.evaluate(env) {
                merged.append(separator_run);
            }
            merged.append(piece);
        }
        merged.finish()
    }

    /// Evaluates this fragment and concatenates its runs into one, with
    /// nothing in between.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runweave::{AttributeKey, Builder, Environment};
    ///
    /// let env = Environment::default().with_attribute(AttributeKey::FONT, "Tiempos Text");
    /// let run = Builder::new().text("Hello, ").text("World!").build().run(&env);
    ///
    /// assert_eq!(run.text(), "Hello, World!");
    /// // The empty separator leaves an empty span between the pieces.
    /// assert_eq!(run.spans().len(), 3);
    /// ```
    pub fn run(&self, env: &Environment) -> StyledRun {
        self.join(&Fragment::literal(""), env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttributeKey, Attributes};
    use crate::run::Span;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn env() -> Environment {
        Environment::default().with_attribute(AttributeKey::FONT, "Tiempos Text")
    }

    fn abc() -> Fragment {
        Fragment::from(vec![
            Fragment::from("A"),
            Fragment::from("B"),
            Fragment::from("C"),
        ])
    }

    #[test]
    fn test_join_empty_content() {
        let run = Fragment::empty().join(&Fragment::from("-"), &env());
        assert_eq!(run, StyledRun::empty());
    }

    #[test]
    fn test_join_single_piece_has_no_separator() {
        let env = env();
        let run = Fragment::from("only").join(&Fragment::from("-"), &env);
        assert_eq!(run, StyledRun::new("only", env.attributes().clone()));
    }

    #[test]
    fn test_join_interleaves_separator() {
        let env = env();
        let run = abc().join(&Fragment::from("-"), &env);
        assert_eq!(run.text(), "A-B-C");
        let texts: Vec<_> = run.spans().iter().map(Span::text).collect();
        assert_eq!(texts, ["A", "-", "B", "-", "C"]);
        assert!(run
            .spans()
            .iter()
            .all(|span| span.attributes() == env.attributes()));
    }

    #[test]
    fn test_joined_by_newline() {
        let runs = abc().joined_by_newline().evaluate(&env());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), "A\nB\nC");
    }

    #[test]
    fn test_multi_run_separator_inserted_at_every_gap() {
        let dim = Attributes::new().with(AttributeKey::WEIGHT, "light");
        let separator = Fragment::from(vec![
            Fragment::from(" "),
            Fragment::from(StyledRun::new("|", dim.clone())),
            Fragment::from(" "),
        ]);
        let run = abc().join(&separator, &env());
        assert_eq!(run.text(), "A | B | C");
        assert_eq!(run.spans().len(), 3 + 2 * 3);
        assert_eq!(run.spans()[2].attributes(), &dim);
        assert_eq!(run.spans()[6].attributes(), &dim);
    }

    #[test]
    fn test_separator_evaluated_once_per_gap() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let separator = Fragment::deferred(move |env| {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![StyledRun::new(",", env.attributes().clone())]
        });

        let run = abc().join(&separator, &env());
        assert_eq!(run.text(), "A,B,C");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_join_keeps_pre_styled_attributes() {
        let env = env();
        let italic = Attributes::new().with(AttributeKey::ITALIC, true);
        let styled = StyledRun::from_spans([
            Span::new("Hello ", Attributes::new()),
            Span::new("world", italic.clone()),
        ]);
        let content = Fragment::from(vec![Fragment::from("Intro"), Fragment::from(styled.clone())]);

        let run = content.join(&Fragment::from("\n"), &env);
        assert_eq!(run.text(), "Intro\nHello world");
        assert_eq!(&run.spans()[2..], styled.spans());
    }

    #[test]
    fn test_nested_join_is_one_piece() {
        let inner = abc().joined(",");
        let outer = Fragment::from(vec![inner, Fragment::from("D")]).joined(" / ");
        let runs = outer.evaluate(&env());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), "A,B,C / D");
    }

    #[test]
    fn test_joined_empty_content_is_single_empty_run() {
        let runs = Fragment::empty().joined_by_newline().evaluate(&env());
        assert_eq!(runs, vec![StyledRun::empty()]);
    }

    #[test]
    fn test_run_concatenates_without_separator() {
        let env = env();
        let run = abc().run(&env);
        assert_eq!(run.text(), "ABC");
        let texts: Vec<_> = run.spans().iter().map(Span::text).collect();
        assert_eq!(texts, ["A", "", "B", "", "C"]);
    }

    #[test]
    fn test_join_keeps_empty_pre_styled_span() {
        let link = Attributes::new().with("link", "x");
        let styled = StyledRun::from_spans([
            Span::new("a", Attributes::new()),
            Span::new("", link.clone()),
        ]);
        let content = Fragment::from(vec![Fragment::from("intro"), Fragment::from(styled.clone())]);

        let run = content.join(&Fragment::from("-"), &env());
        let texts: Vec<_> = run.spans().iter().map(Span::text).collect();
        assert_eq!(texts, ["intro", "-", "a", ""]);
        assert_eq!(&run.spans()[2..], styled.spans());
        assert_eq!(run.spans()[3].attributes(), &link);
    }

    #[test]
    fn test_run_treats_empty_pieces_alike_in_any_position() {
        let env = env();
        let leading = Fragment::from(vec![Fragment::from(""), Fragment::from("B")]).run(&env);
        let trailing = Fragment::from(vec![Fragment::from("B"), Fragment::from("")]).run(&env);
        assert_eq!(leading.spans().len(), 3);
        assert_eq!(trailing.spans().len(), 3);
        assert_eq!(leading.text(), trailing.text());
    }

    #[test]
    fn test_run_of_joined_fragment() {
        let run = abc().joined_by_newline().run(&env());
        assert_eq!(run.text(), "A\nB\nC");
    }

    #[test]
    fn test_join_does_not_mutate_pre_styled_source() {
        let styled = StyledRun::new("kept", Attributes::new().with(AttributeKey::UNDERLINE, true));
        let fragment = Fragment::from(vec![
            Fragment::from(styled.clone()),
            Fragment::from("tail"),
        ]);
        let _ = fragment.join(&Fragment::from("-"), &env());
        match &fragment {
            Fragment::Composite(children) => match &children[0] {
                Fragment::PreStyled(runs) => assert_eq!(runs, &vec![styled]),
                other => panic!("expected PreStyled, got {:?}", other),
            },
            other => panic!("expected Composite, got {:?}", other),
        }
    }
}
