// src/extract/pattern.rs
// =============================================================================
// The anchor-tag recognition pattern.
//
// This is not an HTML parser. One regular expression scans the text for
// opening <a ...> tags that carry a quoted href attribute:
//
//   <a  [other attributes]  href = "value"  [more attributes] >
//
// Accepted:
// - any whitespace (spaces, tabs, newlines) between the parts
// - href anywhere among the attributes, in any letter case
// - single or double quotes, as long as the same quote closes the value
// - empty values, whitespace-only values, Unicode, entities (not decoded)
//
// Rejected (simply not matched):
// - unquoted values (href=http://x) and mismatched quotes
// - tags that never reach '>' before the end of input or the next '<',
//   on either side of the href value
// - anchors without an href attribute (<a name="x">, <a>, data-href="")
//
// The regex crate has no backreferences, so "same quote closes the value"
// is spelled as two alternatives, one per quote character.
// =============================================================================

use regex::Regex;
use std::sync::LazyLock;

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<a\s+(?:[^<>]*?\s)?href\s*=\s*(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)')[^<>]*>"#,
    )
    .unwrap()
});

/// Returns every href value found in opening anchor tags, in document order.
///
/// Values are trimmed of leading and trailing whitespace and otherwise
/// returned exactly as written in the markup.
pub fn href_values(html: &str) -> impl Iterator<Item = &str> + '_ {
    ANCHOR_HREF.captures_iter(html).filter_map(|caps| {
        caps.name("double")
            .or_else(|| caps.name("single"))
            .map(|m| m.as_str().trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(html: &str) -> usize {
        href_values(html).count()
    }

    fn assert_each(cases: &[&str], expected: usize) {
        for case in cases {
            assert_eq!(count(case), expected, "unexpected match count for {case:?}");
        }
    }

    #[test]
    fn test_with_newlines_and_tabs() {
        let html = "
            <a href=\"https://convertio.co/ru/\" aria-label=\"Go to index page\">
                <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"147\" height=\"30\">
                <path fill=\"#ff3333\"
                      d=\"M15.047 30C6.737 30 0 23.284 0 15z\"></path>
                </svg>
            </a>

            <a\nhref=\"https://example.ru\">
            <a href=\n\"https://example.ru\">
            <a target=\"target\"\nhref=\"https://example.ru\">
            <a href=\"https://example.ru\"\ntarget=\"target\">
            <a\t\nhref=\"https://example.ru\">
            <a href=\"https://example.ru\"\n>Link</a>
            <a href=\"https://example.ru\">D\na\nt\na</a>
            <a href=\"https://example.ru\">\nSomething\n
        ";

        assert_eq!(count(html), 9);
    }

    #[test]
    fn test_valid_quotes() {
        assert_each(
            &[
                r#"<a href="https://example.ru">"#,
                r#"<a href='https://example.ru'>"#,
                r#"<a href = "https://example.ru">"#,
            ],
            1,
        );
    }

    #[test]
    fn test_invalid_quotes() {
        assert_each(
            &[
                r#"<a href=https://example.ru>"#,
                r#"<a href='https://example.ru">"#,
                r#"<a href="https://example.ru'>"#,
                r#"<a href="x'>"#,
                r#"<a href='x">"#,
            ],
            0,
        );
    }

    #[test]
    fn test_other_quote_inside_value() {
        let values: Vec<_> = href_values(r#"<a href="it's.html"><a href='say-"hi"'>"#).collect();
        assert_eq!(values, vec!["it's.html", r#"say-"hi""#]);
    }

    #[test]
    fn test_spaces_inside_quotes_are_trimmed() {
        let cases = [
            r#"<a href="    https://example.ru">"#,
            r#"<a href="https://example.ru    ">"#,
            r#"<a href="    https://example.ru    ">"#,
            "<a href\t=\t\"https://example.ru\">",
            "<a href=\"\n https://example.ru \t\">",
        ];

        for case in cases {
            let values: Vec<_> = href_values(case).collect();
            assert_eq!(values, vec!["https://example.ru"], "for {case:?}");
        }
    }

    #[test]
    fn test_spaces_around_equals() {
        assert_each(
            &[
                r#"<a href ="https://example.ru">"#,
                r#"<a href= "https://example.ru">"#,
                r#"<a href = "https://example.ru">"#,
            ],
            1,
        );
    }

    #[test]
    fn test_empty_values_still_count() {
        let values: Vec<_> = href_values(r#"<a href="     "><a href="">"#).collect();
        assert_eq!(values, vec!["", ""]);
    }

    #[test]
    fn test_other_attributes_and_uppercase() {
        assert_each(
            &[
                r#"<a target="target" href="https://example.ru">"#,
                r#"<a class="hyperlink" href="https://example.ru">"#,
                r#"<a href="https://example.ru" target="target">"#,
                r#"<a href="https://example.ru" class="hyperlink">"#,
                r#"<a target="target" href="https://example.ru" class="hyperlink">"#,
                r#"<a HREF="https://example.ru">"#,
                r#"<A Href="https://example.ru">"#,
            ],
            1,
        );
    }

    #[test]
    fn test_unicode_and_entities_are_literal() {
        let values: Vec<_> = href_values(
            r#"<a href="https://сайт.рф"><a href="https://example.ru?a=1&amp;b=2"><a href="/with%20path/">"#,
        )
        .collect();

        assert_eq!(
            values,
            vec!["https://сайт.рф", "https://example.ru?a=1&amp;b=2", "/with%20path/"]
        );
    }

    #[test]
    fn test_any_scheme_is_extracted() {
        assert_each(
            &[
                r#"<a href="ftp://example.ru/file.txt">"#,
                r#"<a href="tel:+71234567890">"#,
                r#"<a href="javascript:void(0)">"#,
            ],
            1,
        );
    }

    #[test]
    fn test_anchors_without_href() {
        assert_each(
            &[
                r#"<a name="name">"#,
                "<a>Click</a>",
                "<a></a>",
                r#"<a data-href=""></a>"#,
                r#"<a href=>"#,
                r#"<abbr href="x">"#,
                r#"<link href="style.css">"#,
            ],
            0,
        );
    }

    #[test]
    fn test_broken_tags() {
        assert_each(
            &[
                r#"<a href="https://example.ru"#,
                r#"<a href="https://example.ru>"#,
                r#"<a href="https://example.ru" random_attribute"#,
                r#"<a href=">"#,
                r#"<a class="x" <link href="style.css">"#,
            ],
            0,
        );
    }

    #[test]
    fn test_unterminated_tag_stops_at_next_tag() {
        let values: Vec<_> = href_values(r#"<a href="first" <a href="second">"#).collect();
        assert_eq!(values, vec!["second"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let html = r#"<p><a href="/one">1</a> <a class="x" href='/two'>2</a> <a href="/three">3</a></p>"#;
        let values: Vec<_> = href_values(html).collect();
        assert_eq!(values, vec!["/one", "/two", "/three"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count(""), 0);
    }
}
