//! Value filtering: quoting and HTML escaping.
//!
//! Every element value passes through [`filtered`] (or one of its wrappers) on
//! its way into rendered markup or a sync batch. This is the single point
//! where untrusted content — span text, button labels, input values — is made
//! safe for embedding.

use crate::driver::Driver;

/// Append `value` to `out`, transformed according to the two flags.
///
/// With `quoted`, the value is wrapped in double quotes and any embedded `"`
/// or `\` is backslash-escaped, so the result is always a well-formed quoted
/// token. With `html_escape`, `<` becomes `&lt;` and `&` becomes `&amp;`, so
/// the value renders as literal text rather than markup when the client
/// interprets it as HTML. The flags combine freely.
///
/// An empty value emits nothing when unquoted and `""` when quoted (an
/// element's empty "disabled" token must still serialize as a valid quoted
/// string).
pub fn write_filtered(out: &mut String, value: &str, quoted: bool, html_escape: bool) {
    if quoted {
        out.push('"');
    }
    for ch in value.chars() {
        match ch {
            '"' if quoted => out.push_str("\\\""),
            '\\' if quoted => out.push_str("\\\\"),
            '<' if html_escape => out.push_str("&lt;"),
            '&' if html_escape => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    if quoted {
        out.push('"');
    }
}

/// Return `value` transformed according to the two flags. See [`write_filtered`].
pub fn filtered(value: &str, quoted: bool, html_escape: bool) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    write_filtered(&mut out, value, quoted, html_escape);
    out
}

/// Emit `value` through the driver, transformed according to the two flags.
pub fn print_filtered(out: &mut dyn Driver, value: &str, quoted: bool, html_escape: bool) {
    out.print_content(&filtered(value, quoted, html_escape));
}

/// Shorthand for `print_filtered(out, value, true, false)`.
pub fn print_quoted(out: &mut dyn Driver, value: &str) {
    print_filtered(out, value, true, false);
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_passthrough() {
        assert_eq!(filtered("hello", false, false), "hello");
    }

    #[test]
    fn quoted_wraps() {
        assert_eq!(filtered("hello", true, false), "\"hello\"");
    }

    #[test]
    fn quoted_escapes_embedded_quote() {
        assert_eq!(filtered("say \"hi\"", true, false), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn quoted_escapes_backslash() {
        assert_eq!(filtered("a\\b", true, false), "\"a\\\\b\"");
    }

    #[test]
    fn unquoted_leaves_quote_alone() {
        assert_eq!(filtered("say \"hi\"", false, false), "say \"hi\"");
    }

    #[test]
    fn html_escapes_lt_and_amp() {
        assert_eq!(
            filtered("<b>bold & loud</b>", false, true),
            "&lt;b>bold &amp; loud&lt;/b>"
        );
    }

    #[test]
    fn html_escape_skipped_when_off() {
        assert_eq!(filtered("<b>raw</b>", false, false), "<b>raw</b>");
    }

    #[test]
    fn both_flags_combine() {
        assert_eq!(
            filtered("a \"<\" b", true, true),
            "\"a \\\"&lt;\\\" b\""
        );
    }

    #[test]
    fn empty_unquoted_is_empty() {
        assert_eq!(filtered("", false, false), "");
        assert_eq!(filtered("", false, true), "");
    }

    #[test]
    fn empty_quoted_is_quote_pair() {
        assert_eq!(filtered("", true, false), "\"\"");
    }

    #[test]
    fn write_filtered_appends() {
        let mut out = String::from("x=");
        write_filtered(&mut out, "y", true, false);
        assert_eq!(out, "x=\"y\"");
    }

    #[test]
    fn multibyte_content_untouched() {
        assert_eq!(filtered("héllo → wörld", false, true), "héllo → wörld");
    }
}
