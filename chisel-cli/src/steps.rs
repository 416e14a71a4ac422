//! Turning command-line steps into a selector.
//!
//! A step is either `kind=value` (a fragment) or a bare token (a
//! combinator). Fragments accumulate into the current compound expression;
//! a combinator closes it. Combinations nest to the right, so
//! `a + b ~ c` becomes `combine(a, "+", combine(b, "~", c))`.

use anyhow::{Context, Result, bail};
use chisel_common::warning::warn_once;
use chisel_selector::{Combinator, CompoundExpression, FragmentKind, Selector, combine};

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Fragment(FragmentKind, String),
    Combinator(String),
}

fn parse_step(token: &str) -> Result<Step> {
    let Some((kind, value)) = token.split_once('=') else {
        return parse_combinator(token);
    };

    let kind = kind
        .parse::<FragmentKind>()
        .with_context(|| format!("unknown fragment kind {kind:?} in step {token:?}"))?;
    Ok(Step::Fragment(kind, value.to_string()))
}

fn parse_combinator(token: &str) -> Result<Step> {
    if token == "descendant" {
        return Ok(Step::Combinator(Combinator::Descendant.glyph().to_string()));
    }
    if token.chars().any(char::is_alphanumeric) {
        bail!("step {token:?} is neither `kind=value` nor a combinator");
    }
    if Combinator::from_glyph(token).is_none() {
        warn_once(
            "CLI",
            &format!("unrecognized combinator {token:?}, passing it through"),
        );
    }
    Ok(Step::Combinator(token.to_string()))
}

/// Build the selector described by `tokens`.
///
/// # Errors
///
/// Unknown fragment kinds, builder rule violations, and combinators
/// missing a selector on either side.
pub fn build_selector(tokens: &[String]) -> Result<Selector> {
    let mut closed: Vec<(CompoundExpression, String)> = Vec::new();
    let mut current = CompoundExpression::new();

    for token in tokens {
        match parse_step(token)? {
            Step::Fragment(kind, value) => {
                current = current
                    .with_fragment(kind, value)
                    .with_context(|| format!("cannot add {kind} step {token:?}"))?;
            }
            Step::Combinator(glyph) => {
                if current.is_empty() {
                    bail!("combinator {glyph:?} has no selector on its left");
                }
                closed.push((current, glyph));
                current = CompoundExpression::new();
            }
        }
    }

    if current.is_empty() {
        bail!("selector ends without a compound on the right");
    }

    Ok(closed
        .into_iter()
        .rev()
        .fold(Selector::from(current), |right, (left, glyph)| {
            combine(left, glyph, right)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chisel_common::warning::was_warned;

    fn build(tokens: &[&str]) -> Result<Selector> {
        let tokens: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        build_selector(&tokens)
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!(
            parse_step("element=div").unwrap(),
            Step::Fragment(FragmentKind::Element, "div".to_string())
        );
        assert_eq!(
            parse_step(r#"attr=href$=".png""#).unwrap(),
            Step::Fragment(FragmentKind::Attribute, r#"href$=".png""#.to_string())
        );
        assert_eq!(
            parse_step("descendant").unwrap(),
            Step::Combinator(" ".to_string())
        );
        assert_eq!(parse_step("~").unwrap(), Step::Combinator("~".to_string()));
        assert!(parse_step("colour=red").is_err());
    }

    #[test]
    fn test_parse_rejects_misspelled_steps() {
        let err = parse_step("elemnt").unwrap_err();
        assert!(err.to_string().contains(r#""elemnt""#));
        assert!(parse_step("child").is_err());
        assert!(build(&["element=div", "elemnt", "element=p"]).is_err());
    }

    #[test]
    fn test_parse_passes_unknown_glyphs_through() {
        assert_eq!(parse_step("||").unwrap(), Step::Combinator("||".to_string()));
        assert!(was_warned(
            "CLI",
            r#"unrecognized combinator "||", passing it through"#
        ));
        assert_eq!(
            build(&["element=a", "||", "element=b"]).unwrap().stringify(),
            "a || b"
        );
    }

    #[test]
    fn test_build_compound() {
        let selector = build(&["element=div", "id=main", "class=container"]).unwrap();
        assert_eq!(selector.stringify(), "div#main.container");
    }

    #[test]
    fn test_build_nests_to_the_right() {
        let selector = build(&[
            "element=table",
            "+",
            "element=tr",
            "descendant",
            "element=td",
        ])
        .unwrap();
        assert_eq!(selector.stringify(), "table + tr   td");
    }

    #[test]
    fn test_build_rejects_out_of_order() {
        let err = build(&["class=x", "id=y"]).unwrap_err();
        assert!(format!("{err:#}").contains("Selector parts should be arranged"));
    }

    #[test]
    fn test_build_rejects_dangling_combinator() {
        assert!(build(&[">", "element=a"]).is_err());
        assert!(build(&["element=a", ">"]).is_err());
        assert!(build(&["element=a", ">", "+", "element=b"]).is_err());
    }
}
