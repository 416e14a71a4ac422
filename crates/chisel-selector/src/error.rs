use thiserror::Error;

/// Why a builder step was rejected.
///
/// Both variants are usage errors raised by the call that breaks the rule;
/// the expression the call was made on stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SelectorError {
    /// A second element, id or pseudo-element in one chain.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector."
    )]
    DuplicateFragment,

    /// A fragment whose kind comes before one already present.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element."
    )]
    OutOfOrderFragment,
}
