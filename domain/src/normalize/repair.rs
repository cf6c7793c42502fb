//! Best-effort syntactic repair of near-JSON model output.
//!
//! The scanner copies one JSON body out of the surrounding text, fixing the
//! artifacts language models commonly produce. It never invents structure:
//! a body whose brackets do not close is rejected, not completed.

/// Why a candidate body could not be repaired
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RepairError {
    /// Input ended with open brackets or an open string. Every later
    /// candidate start lies inside this one, so scanning stops.
    Unclosed(String),
    /// The candidate is structurally wrong (mismatched closer). `end` is
    /// the offset just past the offending closer.
    Invalid { reason: String, end: usize },
}

/// A repaired body and the offset just past its balancing closer
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepairedBody {
    pub text: String,
    pub end: usize,
}

/// Character offsets of every `{` / `[` outside comments, in order.
///
/// In the prose around a body, `//` only opens a comment at the start of a
/// line or after whitespace, so URLs such as `https://...` are kept.
pub(crate) fn candidate_starts(text: &str) -> Vec<usize> {
    let chars: Vec<char> = text.chars().collect();
    let mut starts = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '/' if chars.get(i + 1) == Some(&'/')
                && (i == 0 || chars[i - 1].is_whitespace()) =>
            {
                i = skip_line_comment(&chars, i)
            }
            '/' if chars.get(i + 1) == Some(&'*') => i = skip_block_comment(&chars, i),
            '{' | '[' => {
                starts.push(i);
                i += 1;
            }
            _ => i += 1,
        }
    }
    starts
}

/// Repair the body starting at character offset `start`.
///
/// Returns the repaired JSON text. Anything after the balancing closer,
/// including stray extra closers and trailing prose, is ignored.
pub(crate) fn repair_body(text: &str, start: usize) -> Result<RepairedBody, RepairError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut stack: Vec<char> = Vec::new();
    let mut i = start;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '/' if chars.get(i + 1) == Some(&'/') => {
                i = skip_line_comment(&chars, i);
                continue;
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i = skip_block_comment(&chars, i);
                continue;
            }
            '{' | '[' => {
                stack.push(c);
                out.push(c);
            }
            '}' | ']' => {
                let expected = if c == '}' { '{' } else { '[' };
                match stack.pop() {
                    Some(open) if open == expected => {}
                    Some(open) => {
                        return Err(RepairError::Invalid {
                            reason: format!("'{}' closed by '{}'", open, c),
                            end: i + 1,
                        });
                    }
                    None => {
                        return Err(RepairError::Invalid {
                            reason: format!("unexpected '{}'", c),
                            end: i + 1,
                        });
                    }
                }
                strip_trailing_comma(&mut out);
                out.push(c);
                if stack.is_empty() {
                    return Ok(RepairedBody { text: out, end: i + 1 });
                }
            }
            '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' => {
                i = copy_string(&chars, i, &mut out)?;
                continue;
            }
            // Leftover Markdown fence characters
            '`' => {}
            _ => out.push(c),
        }
        i += 1;
    }

    let open: String = stack.iter().collect();
    Err(RepairError::Unclosed(format!("missing closer for '{}'", open)))
}

/// Copy a string literal starting at `start` into `out` as a valid JSON
/// string. Returns the offset just past the closing delimiter.
fn copy_string(chars: &[char], start: usize, out: &mut String) -> Result<usize, RepairError> {
    let opener = chars[start];
    let closes = |c: char| match opener {
        '"' => c == '"',
        '\'' => c == '\'' || c == '\u{2019}',
        '\u{201C}' | '\u{201D}' => c == '\u{201C}' || c == '\u{201D}',
        _ => c == '\u{2018}' || c == '\u{2019}',
    };

    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            match chars.get(i + 1) {
                // \' is not a JSON escape
                Some('\'') => out.push('\''),
                Some(next) => {
                    out.push('\\');
                    out.push(*next);
                }
                None => break,
            }
            i += 2;
            continue;
        }
        if closes(c) {
            out.push('"');
            return Ok(i + 1);
        }
        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
        i += 1;
    }

    Err(RepairError::Unclosed("unterminated string".to_string()))
}

fn skip_line_comment(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && chars[i] != '\n' {
        i += 1;
    }
    i
}

fn skip_block_comment(chars: &[char], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return i + 2;
        }
        i += 1;
    }
    chars.len()
}

/// Drop a `,` that directly precedes a closer (ignoring whitespace).
fn strip_trailing_comma(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    if out[..trimmed_len].ends_with(',') {
        out.truncate(trimmed_len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_starts_skip_comments() {
        let text = "// [not this]\n/* {nor this} */ [1]";
        let starts = candidate_starts(text);
        assert_eq!(starts.len(), 1);
        assert_eq!(text.chars().nth(starts[0]), Some('['));
    }

    #[test]
    fn test_repair_body_stops_at_balance() {
        let repaired = repair_body("[1, 2]] trailing", 0).unwrap();
        assert_eq!(repaired.text, "[1, 2]");
        assert_eq!(repaired.end, 6);
    }

    #[test]
    fn test_repair_body_strips_trailing_commas() {
        let repaired = repair_body("{\"a\": [1, 2, ], }", 0).unwrap().text;
        assert_eq!(repaired, "{\"a\": [1, 2]}");
    }

    #[test]
    fn test_repair_body_converts_single_quotes() {
        let repaired = repair_body("{'name': 'say \"hi\"', 'x': 'it\\'s'}", 0)
            .unwrap()
            .text;
        assert_eq!(repaired, "{\"name\": \"say \\\"hi\\\"\", \"x\": \"it's\"}");
    }

    #[test]
    fn test_repair_body_escapes_raw_newlines() {
        let repaired = repair_body("[\"line one\nline two\"]", 0).unwrap().text;
        assert_eq!(repaired, "[\"line one\\nline two\"]");
    }

    #[test]
    fn test_repair_body_reports_unclosed() {
        assert!(matches!(
            repair_body("[{\"a\": 1}", 0),
            Err(RepairError::Unclosed(_))
        ));
        assert!(matches!(
            repair_body("[\"open string", 0),
            Err(RepairError::Unclosed(_))
        ));
    }

    #[test]
    fn test_repair_body_reports_mismatch() {
        assert!(matches!(
            repair_body("[{\"a\": 1]", 0),
            Err(RepairError::Invalid { end: 9, .. })
        ));
    }

    #[test]
    fn test_candidate_starts_keep_urls_in_prose() {
        let text = "See https://example.com for context: [1] // done";
        let starts = candidate_starts(text);
        assert_eq!(starts.len(), 1);
        assert_eq!(text.chars().nth(starts[0]), Some('['));
    }
}
