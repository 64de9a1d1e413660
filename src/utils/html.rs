// src/utils/html.rs

//! Required-element lookup over parsed documents.
//!
//! Every helper here turns "element absent" into [`AppError::TagNotFound`],
//! so callers never see an `Option` for structure they depend on.

use scraper::{ElementRef, Selector};

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures to [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// First descendant of `node` (document order, `node` itself excluded)
/// named `tag` whose attributes satisfy every `(key, value)` constraint.
///
/// `class` is matched against the element's class list; other attributes
/// must be equal.
pub fn find_tag<'a>(
    node: ElementRef<'a>,
    tag: &str,
    attrs: &[(&str, &str)],
) -> Result<ElementRef<'a>> {
    node.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| matches_tag(el, tag, attrs))
        .ok_or_else(|| AppError::tag_not_found(tag, attrs))
}

fn matches_tag(el: &ElementRef<'_>, tag: &str, attrs: &[(&str, &str)]) -> bool {
    let element = el.value();
    if !element.name().eq_ignore_ascii_case(tag) {
        return false;
    }
    attrs.iter().all(|(key, value)| {
        if key.eq_ignore_ascii_case("class") {
            element.classes().any(|class| class == *value)
        } else {
            element.attr(key) == Some(*value)
        }
    })
}

/// Value of a required attribute, reported as a missing `<tag attr>` otherwise.
pub fn require_attr<'a>(el: ElementRef<'a>, attr: &str) -> Result<&'a str> {
    el.value()
        .attr(attr)
        .ok_or_else(|| AppError::tag_not_found(el.value().name(), &[(attr, "*")]))
}

/// All text below `el`, concatenated without normalization.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
