//! Class-aware lookups over a parsed HTML tree.
//!
//! Quiz exports are queried by tag name plus a class predicate. The predicate
//! is compiled to a CSS selector to narrow the search, then checked exactly
//! against the class tokens.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Class predicate applied to an element's `class` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassPattern<'p> {
    /// One class token equals the name. A name containing spaces is compared
    /// against the whole class attribute instead.
    Named(&'p str),
    /// One class token contains the fragment.
    Containing(&'p str),
    /// No class constraint.
    Any,
}

impl ClassPattern<'_> {
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        match *self {
            ClassPattern::Any => true,
            ClassPattern::Named(name) if name.contains(char::is_whitespace) => element
                .value()
                .attr("class")
                .is_some_and(|class| normalize_whitespace(class) == normalize_whitespace(name)),
            ClassPattern::Named(name) => has_class(element, name),
            ClassPattern::Containing(fragment) => {
                element.value().classes().any(|class| class.contains(fragment))
            }
        }
    }

    /// Selector matching a superset of the elements this pattern accepts.
    fn selector(&self, tag: &str) -> Option<Selector> {
        let css = match *self {
            ClassPattern::Named(name) => {
                let classes: String = name.split_whitespace().map(|c| format!(".{c}")).collect();
                format!("{tag}{classes}")
            }
            ClassPattern::Containing(fragment) => format!("{tag}[class*=\"{fragment}\"]"),
            ClassPattern::Any => tag.to_string(),
        };
        Selector::parse(&css).ok()
    }
}

/// Collapse whitespace runs (newlines included) to one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// All descendants of `scope` with the given tag that match `class`, in
/// document order. `scope` itself is never included.
pub fn find_all<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    class: ClassPattern<'_>,
) -> Vec<ElementRef<'a>> {
    let selector = match class.selector(tag) {
        Some(s) => s,
        None => return vec![],
    };

    scope
        .select(&selector)
        .filter(|el| *el != scope && class.matches(*el))
        .collect()
}

/// First descendant of `scope` with the given tag that matches `class`.
pub fn find<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    class: ClassPattern<'_>,
) -> Option<ElementRef<'a>> {
    let selector = class.selector(tag)?;

    scope
        .select(&selector)
        .find(|el| *el != scope && class.matches(*el))
}

/// Normalized text content of an element and all of its descendants.
pub fn text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Raw attribute value, if present.
pub fn attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// The `<option>` of a `<select>` carrying the `selected` attribute.
pub fn selected_option<'a>(select: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let selector = Selector::parse("option[selected]").ok()?;
    select.select(&selector).next()
}

pub fn has_class(element: ElementRef<'_>, name: &str) -> bool {
    element.value().classes().any(|class| class == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  What is\n\t the  capital? "), "What is the capital?");
        assert_eq!(normalize_whitespace("\n \t"), "");
        let once = normalize_whitespace(" a \u{a0} b\r\nc ");
        assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn test_named_pattern_with_spaces_matches_whole_attribute() {
        let html = r#"
        <div id="q">
            <span class="name">Wrong</span>
            <span class="name  question_name">Question 1</span>
        </div>
        "#;
        let document = Html::parse_document(html);
        let root = document.root_element();

        let label = find(root, "span", ClassPattern::Named("name question_name")).unwrap();
        assert_eq!(text(label), "Question 1");
        assert_eq!(find_all(root, "span", ClassPattern::Named("name")).len(), 2);
    }

    #[test]
    fn test_containing_pattern_and_document_order() {
        let html = r#"
        <div class="answers">
            <div class="answer answer_for_a">A</div>
            <div class="answer_text">B</div>
            <div class="other">C</div>
        </div>
        "#;
        let document = Html::parse_document(html);
        let root = document.root_element();

        let found = find_all(root, "div", ClassPattern::Containing("answer"));
        let texts: Vec<String> = found.into_iter().map(text).collect();
        // "answers" itself contains the fragment
        assert_eq!(texts, vec!["A B C", "A", "B"]);
    }

    #[test]
    fn test_selector_lookup_keeps_exact_token_rules() {
        let html = r#"
        <div class="question_holder">
            <span class="question">a</span>
            <span class="Question">b</span>
            <span class="my_question_id">c</span>
        </div>
        "#;
        let document = Html::parse_document(html);
        let root = document.root_element();

        let named: Vec<String> = find_all(root, "span", ClassPattern::Named("question"))
            .into_iter()
            .map(text)
            .collect();
        assert_eq!(named, vec!["a"]);

        let containing: Vec<String> = find_all(root, "span", ClassPattern::Containing("question"))
            .into_iter()
            .map(text)
            .collect();
        assert_eq!(containing, vec!["a", "c"]);
        assert!(find(root, "div", ClassPattern::Named("question")).is_none());
    }

    #[test]
    fn test_find_excludes_scope() {
        let html = r#"<div class="outer"><div class="inner">x</div></div>"#;
        let document = Html::parse_document(html);
        let outer = find(document.root_element(), "div", ClassPattern::Named("outer")).unwrap();

        assert!(find(outer, "div", ClassPattern::Named("outer")).is_none());
        assert!(find(outer, "div", ClassPattern::Any).is_some());
    }

    #[test]
    fn test_selected_option_and_attribute() {
        let html = r#"
        <select>
            <option value="">[ Choose ]</option>
            <option value="1" selected>Mammal</option>
        </select>
        "#;
        let document = Html::parse_document(html);
        let select = find(document.root_element(), "select", ClassPattern::Any).unwrap();

        let option = selected_option(select).unwrap();
        assert_eq!(text(option), "Mammal");
        assert_eq!(attribute(option, "value"), Some("1"));
        assert_eq!(attribute(option, "missing"), None);
    }
}
