//! CSS selector string builder for the chisel toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound expressions** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fixed grammar order, checked at every step
//!   - At most one element, id and pseudo-element per chain
//!
//! - **Combined expressions** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling glyphs
//!   - Snapshot rendering of both sides at combine time
//!
//! - **Root factory** - a shared, stateless entry point for new chains
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Identifier and attribute syntax validation
//! - Specificity and matching
//!
//! # Example
//!
//! ```
//! use chisel_selector::SELECTOR_BUILDER;
//!
//! let selector = SELECTOR_BUILDER
//!     .element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), chisel_selector::SelectorError>(())
//! ```

/// Root factory handing out fresh expression chains.
pub mod builder;
/// Combinator glyphs per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Ordering and cardinality errors.
pub mod error;
/// Compound and combined selector expressions.
pub mod expression;
/// Fragment kinds in grammar order.
pub mod fragment;

pub use builder::{SELECTOR_BUILDER, SelectorBuilder};
pub use combinator::Combinator;
pub use error::SelectorError;
pub use expression::{CombinedExpression, CompoundExpression, Selector, combine};
pub use fragment::FragmentKind;
