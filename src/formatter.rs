//! UTF-8 aware chunking for text components with a fixed byte budget.
//!
//! Chunks never split a code point or a surrogate pair. A single code point
//! wider than the budget is emitted on its own.

use crate::error::SplitError;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// UTF-8 byte length of a scalar (or lone surrogate) value.
fn utf8_width(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Returns `(code units, utf-8 bytes)` of the code point starting at `pos`.
/// Unpaired surrogates are one unit and are sized by their own value.
fn code_point_at(text: &[u16], pos: usize) -> (usize, usize) {
    let unit = text[pos];
    if HIGH_SURROGATES.contains(&unit) {
        if let Some(next) = text.get(pos + 1) {
            if LOW_SURROGATES.contains(next) {
                return (2, 4);
            }
        }
    }
    (1, utf8_width(u32::from(unit)))
}

/// UTF-8 byte length of UTF-16 text, counting lone surrogates as 3 bytes.
pub fn utf8_len_utf16(text: &[u16]) -> usize {
    let mut pos = 0;
    let mut total = 0;
    while pos < text.len() {
        let (units, size) = code_point_at(text, pos);
        pos += units;
        total += size;
    }
    total
}

/// Splits UTF-16 text into runs that each encode to at most `max_bytes` of
/// UTF-8 and hands them to `emit` in order.
///
/// Empty text produces exactly one empty chunk.
pub fn split_utf16<F>(text: &[u16], max_bytes: usize, mut emit: F) -> Result<(), SplitError>
where
    F: FnMut(&[u16]),
{
    if max_bytes == 0 {
        return Err(SplitError::ZeroBudget);
    }

    let mut start = 0;
    let mut pos = 0;
    let mut chunk_bytes = 0;

    while pos < text.len() {
        let (units, size) = code_point_at(text, pos);

        // Close the chunk before a code point that would overflow it. An empty
        // chunk always takes the code point, even an oversized one.
        if chunk_bytes > 0 && chunk_bytes + size > max_bytes {
            emit(&text[start..pos]);
            start = pos;
            chunk_bytes = 0;
        }

        pos += units;
        chunk_bytes += size;
    }

    emit(&text[start..]);
    Ok(())
}

/// `&str` counterpart of [`split_utf16`].
pub fn split_str<'a, F>(text: &'a str, max_bytes: usize, mut emit: F) -> Result<(), SplitError>
where
    F: FnMut(&'a str),
{
    if max_bytes == 0 {
        return Err(SplitError::ZeroBudget);
    }

    let mut start = 0;
    let mut chunk_bytes = 0;

    for (idx, ch) in text.char_indices() {
        let size = ch.len_utf8();
        if chunk_bytes > 0 && chunk_bytes + size > max_bytes {
            emit(&text[start..idx]);
            start = idx;
            chunk_bytes = 0;
        }
        chunk_bytes += size;
    }

    emit(&text[start..]);
    Ok(())
}

pub fn utf8_chunks(text: &str, max_bytes: usize) -> Result<Vec<&str>, SplitError> {
    let mut chunks = Vec::new();
    split_str(text, max_bytes, |chunk| chunks.push(chunk))?;
    Ok(chunks)
}
