use std::fmt;

use strum_macros::{Display, EnumString};

/// One syntactic piece of a compound selector.
///
/// Variants are declared in grammar order, so the derived `Ord` is the order
/// fragments must be appended in: element, id, class, attribute,
/// pseudo-class, pseudo-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.editable`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The clause between the brackets is taken verbatim.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Every kind, in grammar order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Kinds that may appear at most once in a chain.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Write `value` with this kind's punctuation.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    pub fn write_fragment(self, f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
        match self {
            Self::Element => f.write_str(value),
            Self::Id => write!(f, "#{value}"),
            Self::Class => write!(f, ".{value}"),
            Self::Attribute => write!(f, "[{value}]"),
            Self::PseudoClass => write!(f, ":{value}"),
            Self::PseudoElement => write!(f, "::{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_order() {
        assert!(FragmentKind::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("element".parse::<FragmentKind>(), Ok(FragmentKind::Element));
        assert_eq!("pseudo-class".parse::<FragmentKind>(), Ok(FragmentKind::PseudoClass));
        assert_eq!("pseudo-element".parse::<FragmentKind>(), Ok(FragmentKind::PseudoElement));
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!("attribute".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert!("selector".parse::<FragmentKind>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert_eq!(FragmentKind::PseudoElement.to_string(), "pseudo-element");
    }

    #[test]
    fn test_unique_kinds() {
        let unique: Vec<_> = FragmentKind::ALL
            .into_iter()
            .filter(|kind| kind.is_unique())
            .collect();
        assert_eq!(
            unique,
            [
                FragmentKind::Element,
                FragmentKind::Id,
                FragmentKind::PseudoElement
            ]
        );
    }
}
