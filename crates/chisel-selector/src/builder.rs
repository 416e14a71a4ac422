use crate::error::SelectorError;
use crate::expression::{CompoundExpression, Selector, combine};

/// Entry point for new selector chains.
///
/// Stateless: each method starts from a fresh empty expression, so one
/// builder can serve any number of independent chains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectorBuilder;

/// The shared builder.
pub const SELECTOR_BUILDER: SelectorBuilder = SelectorBuilder;

#[allow(clippy::unused_self)]
impl SelectorBuilder {
    /// Start a chain with an element name.
    ///
    /// # Errors
    ///
    /// Never fails on the empty root; the `Result` matches
    /// [`CompoundExpression::element`].
    pub fn element(self, name: impl Into<String>) -> Result<CompoundExpression, SelectorError> {
        CompoundExpression::new().element(name)
    }

    /// Start a chain with an id.
    ///
    /// # Errors
    ///
    /// Never fails on the empty root.
    pub fn id(self, name: impl Into<String>) -> Result<CompoundExpression, SelectorError> {
        CompoundExpression::new().id(name)
    }

    /// Start a chain with a class.
    ///
    /// # Errors
    ///
    /// Never fails on the empty root.
    pub fn class(self, name: impl Into<String>) -> Result<CompoundExpression, SelectorError> {
        CompoundExpression::new().class(name)
    }

    /// Start a chain with an attribute clause.
    ///
    /// # Errors
    ///
    /// Never fails on the empty root.
    pub fn attr(self, value: impl Into<String>) -> Result<CompoundExpression, SelectorError> {
        CompoundExpression::new().attr(value)
    }

    /// Start a chain with a pseudo-class.
    ///
    /// # Errors
    ///
    /// Never fails on the empty root.
    pub fn pseudo_class(
        self,
        name: impl Into<String>,
    ) -> Result<CompoundExpression, SelectorError> {
        CompoundExpression::new().pseudo_class(name)
    }

    /// Start a chain with a pseudo-element.
    ///
    /// # Errors
    ///
    /// Never fails on the empty root.
    pub fn pseudo_element(
        self,
        name: impl Into<String>,
    ) -> Result<CompoundExpression, SelectorError> {
        CompoundExpression::new().pseudo_element(name)
    }

    /// Same as the free function [`combine`].
    #[must_use]
    pub fn combine(
        self,
        left: impl Into<Selector>,
        combinator: impl AsRef<str>,
        right: impl Into<Selector>,
    ) -> Selector {
        combine(left, combinator, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_copy<T: Copy>(_: T) {}

    #[test]
    fn test_builder_is_copy() {
        let builder = SELECTOR_BUILDER;
        assert_copy(builder);
        let _ = builder.element("div").unwrap().id("main").unwrap();
        assert_eq!(builder, SelectorBuilder);
    }

    #[test]
    fn test_chains_from_one_builder_are_independent() {
        let builder = SelectorBuilder;
        let first = builder.class("a").unwrap().class("b").unwrap();
        let second = builder.class("c").unwrap();
        assert_eq!(first.stringify(), ".a.b");
        assert_eq!(second.stringify(), ".c");
        assert!(builder.pseudo_class("hover").unwrap().class_names().is_empty());
    }
}
