//! Low-level, escape-aware scanning over the raw document text.
//!
//! Everything here works on byte offsets. All offsets produced or consumed by
//! these routines land on ASCII delimiters (`\`, `{`, `}`, `[`, `]`), so they
//! are always valid `str` slice boundaries.

/// The marker that makes the following symbol or keyword literal text.
pub const ESCAPE: u8 = b'\\';

/// Finds the closing symbol matching the opening symbol at `open_at`.
///
/// Depth starts at 1 since `open_at` already holds an opening symbol; the
/// scan walks forward counting unescaped openings up and unescaped closings
/// down, and returns the index where the depth reaches zero. Escape detection
/// looks at exactly one byte to the left of each candidate.
///
/// Returns `None` when `open_at` does not hold `open`, or when the text ends
/// before the depth returns to zero.
pub fn find_closing(text: &str, open_at: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open_at) != Some(&open) {
        return None;
    }

    let mut depth = 1usize;
    let mut i = open_at + 1;
    while i < bytes.len() {
        // Escaped symbols stay out of the depth count
        if bytes[i - 1] != ESCAPE {
            if bytes[i] == open {
                depth += 1;
            } else if bytes[i] == close {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        i += 1;
    }
    None
}

/// Finds the `}` matching the `{` at `open_at`.
pub fn find_closing_brace(text: &str, open_at: usize) -> Option<usize> {
    find_closing(text, open_at, b'{', b'}')
}

/// Finds the `]` matching the `[` at `open_at`.
pub fn find_closing_bracket(text: &str, open_at: usize) -> Option<usize> {
    find_closing(text, open_at, b'[', b']')
}

/// Forward-searches `keyword` at or after `from`, skipping escaped matches.
///
/// A match immediately preceded by the escape marker is literal text; the
/// search resumes right after it, not at the marker. Only one byte of
/// lookback is checked, so a keyword behind two consecutive markers still
/// counts as escaped.
pub fn find_keyword(text: &str, keyword: &str, mut from: usize) -> Option<usize> {
    loop {
        let at = text.get(from..)?.find(keyword)? + from;
        if at > 0 && text.as_bytes()[at - 1] == ESCAPE {
            from = at + keyword.len();
        } else {
            return Some(at);
        }
    }
}

/// Locates the `arg_index`-th group (zero indexed) of the brace-group chain
/// whose first group opens at `first_group_start`.
///
/// Walks the chain one group at a time, each group opening one past the
/// previous group's closing brace. Returned bounds include the braces;
/// callers wanting inner content strip one byte from each end. Any failed
/// brace match along the walk fails the whole lookup.
pub fn find_arg_bounds(
    text: &str,
    first_group_start: usize,
    arg_index: usize,
) -> Option<(usize, usize)> {
    let mut start = first_group_start;
    let mut end = find_closing_brace(text, start)?;
    for _ in 0..arg_index {
        start = end + 1;
        end = find_closing_brace(text, start)?;
    }
    Some((start, end))
}
