//! Hide part of a string behind `*`.

use tracing::debug;

pub const MASK_CHAR: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("nothing to mask in an empty string")]
    Empty,

    #[error("mask range {start}..{end} does not fit a string of {len} characters")]
    OutOfRange { start: isize, end: isize, len: usize },
}

/// Masks characters `start..end` of `text`.
///
/// A negative `start` counts from the end of the string; an `end` of zero or
/// less counts back from the end, so `end = 0` masks through the last
/// character. Positions are in characters, not bytes.
pub fn try_mask(text: &str, start: isize, end: isize) -> Result<String, MaskError> {
    let len = text.chars().count();
    if len == 0 {
        return Err(MaskError::Empty);
    }

    let n = len as isize;
    let start = if start < 0 { n + start } else { start };
    let end = if end <= 0 { n + end } else { end };
    if start < 0 || start >= n || end <= 0 || end > n || start >= end {
        return Err(MaskError::OutOfRange { start, end, len });
    }

    let range = start as usize..end as usize;
    Ok(text
        .chars()
        .enumerate()
        .map(|(i, c)| if range.contains(&i) { MASK_CHAR } else { c })
        .collect())
}

/// Like [`try_mask`], but gives back `text` unchanged when the range is
/// invalid.
pub fn mask(text: &str, start: isize, end: isize) -> String {
    try_mask(text, start, end).unwrap_or_else(|err| {
        debug!(%err, "leaving text unmasked");
        text.to_owned()
    })
}

/// Masks every character of `text`.
pub fn mask_all(text: &str) -> String {
    mask(text, 0, 0)
}
