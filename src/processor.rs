//! The rewrite engine: one pass per macro specification, left to right over
//! the document, stitching verbatim spans and transformed invocations into a
//! fresh output buffer.

use tracing::{debug, trace};

use crate::error::RewriteError;
use crate::scan::{find_arg_bounds, find_closing_brace, find_closing_bracket, find_keyword};
use crate::spec::{Action, MacroSpec};

/// Applies every specification in order, feeding each pass's output to the
/// next. The final pass's output is the transformed document.
///
/// A specification whose macro never appears in the document is a no-op for
/// that pass. The first structural failure aborts the whole run.
pub fn process(document: &str, specs: &[MacroSpec]) -> Result<String, RewriteError> {
    let mut doc = document.to_string();
    for spec in specs {
        let rewritten = rewrite(&doc, spec)?;
        debug!(
            name = %spec.name,
            before = doc.len(),
            after = rewritten.len(),
            "pass complete"
        );
        doc = rewritten;
    }
    Ok(doc)
}

/// Runs one full pass for a single macro specification.
///
/// Finds each unescaped occurrence of `\name`, classifies what follows it,
/// and emits either nothing (deleted invocation, bare keyword, false match)
/// or the inner content of the preserved argument group. Text between
/// invocations is copied through verbatim.
pub fn rewrite(document: &str, spec: &MacroSpec) -> Result<String, RewriteError> {
    let keyword = format!("\\{}", spec.name);
    let bytes = document.as_bytes();
    let mut out = String::with_capacity(document.len());
    let mut origin = 0;

    while let Some(start) = find_keyword(document, &keyword, origin) {
        out.push_str(&document[origin..start]);
        let after = start + keyword.len();

        let args_start = match bytes.get(after) {
            Some(b'{') => after,
            Some(b'[') => {
                let opt_end = find_closing_bracket(document, after)
                    .ok_or(RewriteError::UnterminatedOption { at: after })?;
                if bytes.get(opt_end + 1) == Some(&b'{') {
                    opt_end + 1
                } else {
                    // Options but no argument groups: the invocation goes
                    // away, along with the one character right after the
                    // option span.
                    origin = one_char_past(document, opt_end + 1);
                    continue;
                }
            }
            // Bare invocation: drop the keyword, keep the space.
            Some(b' ') => {
                origin = after;
                continue;
            }
            // The keyword is only a prefix of a longer name (or the text
            // ends here). The matched span is still dropped.
            _ => {
                origin = after;
                continue;
            }
        };

        trace!(name = %spec.name, at = start, "invocation");

        // Walk the chain to the closing brace of its last group
        let mut next_start = args_start;
        let chain_end = loop {
            let close = find_closing_brace(document, next_start)
                .ok_or(RewriteError::UnclosedArgument { at: next_start })?;
            if bytes.get(close + 1) == Some(&b'{') {
                next_start = close + 1;
            } else {
                break close;
            }
        };

        if spec.action == Action::Preserve {
            let (arg_start, arg_end) = find_arg_bounds(document, args_start, spec.preserved_index)
                .ok_or_else(|| RewriteError::ArgumentOutOfRange {
                    name: spec.name.clone(),
                    index: spec.preserved_index,
                })?;
            out.push_str(&document[arg_start + 1..arg_end]);
        }

        origin = chain_end + 1;
    }

    out.push_str(&document[origin..]);
    Ok(out)
}

/// Resume offset one character past `at`, clamped to the end of the text.
fn one_char_past(document: &str, at: usize) -> usize {
    match document.get(at..).and_then(|rest| rest.chars().next()) {
        Some(c) => at + c.len_utf8(),
        None => document.len(),
    }
}
