//! Heuristic classifiers
//!
//! Both classifiers are ordered lists of (predicate, label) rules evaluated
//! first-match-wins with a fallback label. Rules can be added and tested
//! independently. False negatives (an unrecognised platform, a product page
//! under an unusual path) are expected outcomes of substring heuristics.

mod page_type;
mod platform;

pub use page_type::{classify_page_url, classify_path, is_collection_path};
pub use platform::detect_platform;

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// A single classification rule
pub struct Rule<T> {
    label: T,
    predicate: Predicate,
}

impl<T: Copy> Rule<T> {
    pub fn new(label: T, predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    /// Returns the label when the predicate accepts `input`
    pub fn apply(&self, input: &str) -> Option<T> {
        (self.predicate)(input).then_some(self.label)
    }
}

/// Ordered rules with a fallback label
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
    fallback: T,
}

impl<T: Copy> RuleSet<T> {
    pub fn new(fallback: T) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Appends a rule; rules are checked in insertion order
    pub fn with_rule(
        mut self,
        label: T,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule::new(label, predicate));
        self
    }

    /// Appends a rule matching when `input` contains any of `needles`
    pub fn with_substrings(self, label: T, needles: &'static [&'static str]) -> Self {
        self.with_rule(label, move |input| {
            needles.iter().any(|needle| input.contains(needle))
        })
    }

    /// Label of the first matching rule, if any
    pub fn first_match(&self, input: &str) -> Option<T> {
        self.rules.iter().find_map(|rule| rule.apply(input))
    }

    /// Label of the first matching rule, or the fallback
    pub fn classify(&self, input: &str) -> T {
        self.first_match(input).unwrap_or(self.fallback)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
