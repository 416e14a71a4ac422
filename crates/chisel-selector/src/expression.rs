use std::fmt;

use crate::error::SelectorError;
use crate::fragment::FragmentKind;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Built one fragment at a time. Every builder method leaves `self`
/// untouched and returns a new expression, so a prefix can be shared by
/// several chains:
///
/// ```
/// use chisel_selector::CompoundExpression;
///
/// let base = CompoundExpression::new().element("li")?;
/// let odd = base.pseudo_class("nth-child(odd)")?;
/// let even = base.pseudo_class("nth-child(even)")?;
/// assert_eq!(base.stringify(), "li");
/// assert_eq!(odd.stringify(), "li:nth-child(odd)");
/// assert_eq!(even.stringify(), "li:nth-child(even)");
/// # Ok::<(), chisel_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompoundExpression {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attribute: Option<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
}

impl CompoundExpression {
    /// An expression with no fragments; renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attribute: None,
            pseudo_classes: Vec::new(),
            pseudo_element: None,
        }
    }

    /// Set the element (type) name.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an element is already set,
    /// otherwise [`SelectorError::OutOfOrderFragment`] if any other fragment is.
    pub fn element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Element, name)
    }

    /// Set the id.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an id is already set,
    /// otherwise [`SelectorError::OutOfOrderFragment`] if a class, attribute,
    /// pseudo-class or pseudo-element is.
    pub fn id(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Id, name)
    }

    /// Append a class.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderFragment`] if an attribute, pseudo-class or
    /// pseudo-element is already set.
    pub fn class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Class, name)
    }

    /// Set the attribute clause, written between brackets as given.
    /// Calling it again replaces the previous clause.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderFragment`] if a pseudo-class or
    /// pseudo-element is already set.
    pub fn attr(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderFragment`] if the pseudo-element is set.
    pub fn pseudo_class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::PseudoClass, name)
    }

    /// Set the pseudo-element.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if a pseudo-element is already set.
    pub fn pseudo_element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_fragment(FragmentKind::PseudoElement, name)
    }

    /// Append a fragment of any kind. The named builder methods all go
    /// through here.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] when a unique kind is repeated;
    /// [`SelectorError::OutOfOrderFragment`] when `kind` comes before the
    /// latest kind present. The duplicate check wins when both apply.
    pub fn with_fragment(
        &self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        self.check(kind)?;

        let value = value.into();
        let mut next = self.clone();
        match kind {
            FragmentKind::Element => next.element = Some(value),
            FragmentKind::Id => next.id = Some(value),
            FragmentKind::Class => next.classes.push(value),
            FragmentKind::Attribute => next.attribute = Some(value),
            FragmentKind::PseudoClass => next.pseudo_classes.push(value),
            FragmentKind::PseudoElement => next.pseudo_element = Some(value),
        }
        Ok(next)
    }

    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_unique() && self.contains(kind) {
            return Err(SelectorError::DuplicateFragment);
        }
        if self.latest_kind().is_some_and(|latest| kind < latest) {
            return Err(SelectorError::OutOfOrderFragment);
        }
        Ok(())
    }

    /// All fragments in rendering order, paired with their kind.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        one(FragmentKind::Element, self.element.as_deref())
            .chain(one(FragmentKind::Id, self.id.as_deref()))
            .chain(many(FragmentKind::Class, &self.classes))
            .chain(one(FragmentKind::Attribute, self.attribute.as_deref()))
            .chain(many(FragmentKind::PseudoClass, &self.pseudo_classes))
            .chain(one(FragmentKind::PseudoElement, self.pseudo_element.as_deref()))
    }

    /// The kind furthest along the grammar that is present, if any.
    #[must_use]
    pub fn latest_kind(&self) -> Option<FragmentKind> {
        self.fragments().last().map(|(kind, _)| kind)
    }

    /// Whether at least one fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments().any(|(present, _)| present == kind)
    }

    /// True when no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }

    /// The element name, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in the order they were added.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.classes
    }

    /// The attribute clause, if set.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Pseudo-classes in the order they were added.
    #[must_use]
    pub fn pseudo_class_names(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Render as `element#id.class[attr]:pseudo-class::pseudo-element`,
    /// omitting absent parts.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

fn one(kind: FragmentKind, value: Option<&str>) -> impl Iterator<Item = (FragmentKind, &str)> {
    value.map(|value| (kind, value)).into_iter()
}

fn many(kind: FragmentKind, values: &[String]) -> impl Iterator<Item = (FragmentKind, &str)> {
    values.iter().map(move |value| (kind, value.as_str()))
}

impl fmt::Display for CompoundExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            kind.write_fragment(f, value)?;
        }
        Ok(())
    }
}

/// Two selectors joined by a combinator.
///
/// Both sides are rendered when the combination is made, so it holds text
/// rather than expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedExpression {
    left: String,
    combinator: String,
    right: String,
}

impl CombinedExpression {
    /// Rendered left-hand side.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The combinator exactly as passed to [`combine`].
    #[must_use]
    pub fn combinator(&self) -> &str {
        &self.combinator
    }

    /// Rendered right-hand side.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Render as `left + " " + combinator + " " + right`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Any selector the builder can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// A single compound selector.
    Compound(CompoundExpression),
    /// Two selectors joined by a combinator.
    Combined(CombinedExpression),
}

impl Selector {
    /// Render this selector.
    #[must_use]
    pub fn stringify(&self) -> String {
        match self {
            Self::Compound(compound) => compound.stringify(),
            Self::Combined(combined) => combined.stringify(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl From<CompoundExpression> for Selector {
    fn from(compound: CompoundExpression) -> Self {
        Self::Compound(compound)
    }
}

impl From<&CompoundExpression> for Selector {
    fn from(compound: &CompoundExpression) -> Self {
        Self::Compound(compound.clone())
    }
}

impl From<CombinedExpression> for Selector {
    fn from(combined: CombinedExpression) -> Self {
        Self::Combined(combined)
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join `left` and `right` with `combinator`, rendering both sides now.
///
/// The combinator is written as given, surrounded by single spaces. Strings
/// other than the four recognized glyphs are accepted unchanged; checking
/// them against [`Combinator::from_glyph`](crate::Combinator::from_glyph)
/// is left to the caller.
///
/// ```
/// use chisel_selector::{Combinator, SELECTOR_BUILDER, combine};
///
/// let nav = SELECTOR_BUILDER.element("nav")?;
/// let link = SELECTOR_BUILDER.element("a")?.class("active")?;
/// assert_eq!(combine(nav, Combinator::Child, link).stringify(), "nav > a.active");
/// # Ok::<(), chisel_selector::SelectorError>(())
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: impl AsRef<str>,
    right: impl Into<Selector>,
) -> Selector {
    Selector::Combined(CombinedExpression {
        left: left.into().stringify(),
        combinator: combinator.as_ref().to_string(),
        right: right.into().stringify(),
    })
}
