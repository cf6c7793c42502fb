//! TextNormalizer: turn free-form model output into a JSON value.
//!
//! Every agent that reads model output goes through [`normalize`]. The
//! model is asked for "JSON only" but routinely returns:
//!
//! | Artifact | Example | Handling |
//! |----------|---------|----------|
//! | Surrounding prose | `Here you go: [...] Hope it helps!` | body extracted |
//! | Code fences | ` ```json [...] ``` ` | stripped |
//! | Comments | `// result` / `/* ... */` | stripped |
//! | Trailing commas | `[1, 2,]` | removed |
//! | Single quotes | `{'a': 'b'}` | converted |
//! | Smart quotes | `{“a”: “b”}` | converted |
//! | Extra closers | `[...]]` | ignored |
//! | Missing closers | `[{...}` | **rejected** |
//!
//! Strict parsing is tried first so well-formed output is never rewritten.

mod repair;

use crate::core::error::ParseError;
use repair::{RepairError, candidate_starts, repair_body};
use serde_json::Value;

/// Repair and parse possibly-malformed JSON text.
///
/// Candidate bodies are tried in order of their opening bracket. A
/// candidate that runs off the end of the input (unclosed bracket or
/// string) ends the search because every later candidate is nested in it.
/// A candidate that fails otherwise is skipped as a whole: only starts
/// after its span are tried, so a missing closer never yields a nested
/// fragment.
pub fn normalize(raw: &str) -> Result<Value, ParseError> {
    let text = raw.trim().trim_start_matches('\u{feff}');
    if text.is_empty() {
        return Err(ParseError::new("empty response", raw));
    }

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let starts = candidate_starts(text);
    if starts.is_empty() {
        return Err(ParseError::new("no JSON object or array found", raw));
    }

    let mut first_failure: Option<String> = None;
    let mut resume_at = 0;
    for start in starts {
        if start < resume_at {
            continue;
        }
        match repair_body(text, start) {
            Ok(body) => match serde_json::from_str::<Value>(&body.text) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    first_failure.get_or_insert_with(|| format!("invalid JSON after repair: {}", e));
                    resume_at = body.end;
                }
            },
            Err(RepairError::Unclosed(reason)) => {
                let reason = first_failure.unwrap_or(reason);
                return Err(ParseError::new(reason, raw));
            }
            Err(RepairError::Invalid { reason, end }) => {
                first_failure.get_or_insert(reason);
                resume_at = end;
            }
        }
    }

    Err(ParseError::new(
        first_failure.unwrap_or_else(|| "no JSON body could be repaired".to_string()),
        raw,
    ))
}
