//! Streaming JSON re-indentation.
//!
//! Re-indents a byte buffer believed to hold JSON without building a parse
//! tree: a single left-to-right scan driven by bracket depth, an in-string
//! flag, and an escape flag. No token validation happens, so malformed
//! input yields best-effort output instead of an error, and a multi-megabyte
//! body costs one pass and one output buffer.

/// Indent unit emitted per nesting level.
const INDENT: &[u8] = b"  ";

/// Re-indents `input` with two-space indentation.
///
/// Outside strings: an opening brace or bracket raises the depth and breaks
/// the line unless the very next byte is its matching close (empty
/// containers render inline); a closing brace or bracket renders inline
/// when it directly follows its matching open, otherwise it dedents onto
/// its own line; commas break the line at the current depth; colons get a
/// single trailing space; raw whitespace is dropped. Everything inside
/// strings, including escaped characters, is copied verbatim.
///
/// This function never fails. Input that is not JSON at all comes back as a
/// possibly odd-looking but complete string; invalid UTF-8 is replaced
/// lossily at the end.
///
/// # Arguments
///
/// * `input` - Raw bytes to re-indent
///
/// # Returns
///
/// The indented rendering.
///
/// # Examples
///
/// ```
/// use reqtui::formatter::json::reindent;
///
/// assert_eq!(
///     reindent(br#"{"a":1}"#),
///     "{\n  \"a\": 1\n}"
/// );
/// assert_eq!(reindent(b"{}"), "{}");
/// ```
pub fn reindent(input: &[u8]) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(input.len() + input.len() / 2);
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escape = false;

    for i in 0..input.len() {
        let c = input[i];

        if escape {
            out.push(c);
            escape = false;
            continue;
        }

        if c == b'\\' && in_string {
            out.push(c);
            escape = true;
            continue;
        }

        if c == b'"' {
            in_string = !in_string;
            out.push(c);
            continue;
        }

        if in_string {
            out.push(c);
            continue;
        }

        match c {
            b'{' | b'[' => {
                out.push(c);
                depth += 1;
                let close = if c == b'{' { b'}' } else { b']' };
                if let Some(&next) = input.get(i + 1) {
                    if next != close {
                        break_line(&mut out, depth);
                    }
                }
            }
            b'}' | b']' => {
                let open = if c == b'}' { b'{' } else { b'[' };
                depth = depth.saturating_sub(1);
                if i > 0 && input[i - 1] != open {
                    break_line(&mut out, depth);
                }
                out.push(c);
            }
            b',' => {
                out.push(c);
                break_line(&mut out, depth);
            }
            b':' => {
                out.push(c);
                out.push(b' ');
            }
            b' ' | b'\t' | b'\n' | b'\r' => {}
            _ => out.push(c),
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Emits a newline followed by `depth` indent units.
fn break_line(out: &mut Vec<u8>, depth: usize) {
    out.push(b'\n');
    for _ in 0..depth {
        out.extend_from_slice(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_object() {
        assert_eq!(
            reindent(br#"{"a":1,"b":2}"#),
            "{\n  \"a\": 1,\n  \"b\": 2\n}"
        );
    }

    #[test]
    fn test_nested_array_expands() {
        assert_eq!(
            reindent(br#"{"a":1,"b":[1,2]}"#),
            "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}"
        );
    }

    #[test]
    fn test_empty_containers_stay_inline() {
        assert_eq!(reindent(b"{}"), "{}");
        assert_eq!(reindent(b"[]"), "[]");
        assert_eq!(
            reindent(br#"{"a":{},"b":[]}"#),
            "{\n  \"a\": {},\n  \"b\": []\n}"
        );
    }

    #[test]
    fn test_brace_inside_string_does_not_change_depth() {
        assert_eq!(reindent(br#"{"a":"x{y"}"#), "{\n  \"a\": \"x{y\"\n}");
        assert_eq!(reindent(br#"{"a":"]}["}"#), "{\n  \"a\": \"]}[\"\n}");
    }

    #[test]
    fn test_escaped_quote_keeps_string_state() {
        assert_eq!(
            reindent(br#"{"a":"he said \"{\" loudly"}"#),
            "{\n  \"a\": \"he said \\\"{\\\" loudly\"\n}"
        );
    }

    #[test]
    fn test_escaped_backslash_before_closing_quote() {
        assert_eq!(
            reindent(br#"{"path":"C:\\"}"#),
            "{\n  \"path\": \"C:\\\\\"\n}"
        );
    }

    #[test]
    fn test_whitespace_inside_strings_preserved() {
        assert_eq!(
            reindent(br#"{"a":"two  spaces"}"#),
            "{\n  \"a\": \"two  spaces\"\n}"
        );
    }

    #[test]
    fn test_existing_formatting_is_normalized() {
        let input = b"{\n    \"a\" :  1 ,\n    \"b\":2\n}";
        assert_eq!(reindent(input), "{\n  \"a\": 1,\n  \"b\": 2\n}");
    }

    #[test]
    fn test_deep_nesting() {
        assert_eq!(
            reindent(br#"{"a":{"b":{"c":1}}}"#),
            "{\n  \"a\": {\n    \"b\": {\n      \"c\": 1\n    }\n  }\n}"
        );
    }

    #[test]
    fn test_top_level_array() {
        assert_eq!(reindent(b"[1,2]"), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_malformed_input_still_produces_output() {
        // Never an error: unbalanced input comes back best-effort.
        let out = reindent(b"{\"a\":1");
        assert!(out.contains("\"a\": 1"));

        let out = reindent(b"not json at all");
        assert_eq!(out, "notjsonatall");
    }

    #[test]
    fn test_unbalanced_closers_do_not_underflow() {
        let out = reindent(b"}}]]");
        assert!(!out.is_empty());
    }

    #[test]
    fn test_non_utf8_bytes_are_replaced() {
        let out = reindent(&[b'{', b'"', b'a', b'"', b':', b'"', 0xff, b'"', b'}']);
        assert!(out.contains('\u{fffd}'));
    }

    #[test]
    fn test_unicode_passthrough() {
        let input = r#"{"msg":"héllo wörld"}"#.as_bytes();
        assert_eq!(reindent(input), "{\n  \"msg\": \"héllo wörld\"\n}");
    }
}
