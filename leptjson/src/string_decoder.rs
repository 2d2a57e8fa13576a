// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::escape::{self, HIGH_SURROGATES};
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::slice_input_buffer::SliceInputBuffer;

/// Decode the quoted string at the cursor into freshly owned bytes.
///
/// The decoded content is staged in `scratch` and copied out once the closing
/// quote is reached. On failure everything this call staged is discarded, so
/// `scratch` ends at the same length it started with either way.
///
/// The result is not necessarily valid UTF-8: raw input bytes are copied
/// verbatim and a lone low surrogate escape is encoded as-is.
///
/// # Errors
/// * `InvalidValue` - the cursor is not on a `"`
/// * `StringMissQuote` - input ended before the closing quote
/// * `InvalidStringEscape` - unknown escape, or input ended right after `\`
/// * `InvalidStringChar` - unescaped byte below 0x20
/// * `InvalidUnicodeHex` - `\u` without four hex digits, or a high surrogate
///   not followed by another `\u` escape
/// * `InvalidUnicodeSurrogate` - a high surrogate followed by a `\u` escape
///   that is not a low surrogate
pub fn decode_string(
    input: &mut SliceInputBuffer<'_>,
    scratch: &mut ScratchBuffer<u8>,
) -> Result<Vec<u8>, ParseError> {
    if input.peek() != Some(b'"') {
        return Err(ParseError::InvalidValue);
    }
    input.advance(1);

    let start = scratch.len();
    let outcome = decode_content(input, scratch);
    let staged = scratch.len().saturating_sub(start);
    let decoded = scratch.truncate(staged)?;
    match outcome {
        Ok(()) => Ok(decoded.collect()),
        Err(err) => {
            drop(decoded);
            Err(err)
        }
    }
}

fn decode_content(
    input: &mut SliceInputBuffer<'_>,
    scratch: &mut ScratchBuffer<u8>,
) -> Result<(), ParseError> {
    loop {
        let byte = input.consume_byte().ok_or(ParseError::StringMissQuote)?;
        match byte {
            b'"' => return Ok(()),
            b'\\' => match input.consume_byte() {
                Some(b'u') => decode_unicode_escape(input, scratch)?,
                Some(escape_char) => {
                    scratch.push(escape::unescape(escape_char)?);
                }
                None => return Err(ParseError::InvalidStringEscape),
            },
            0x00..=0x1F => return Err(ParseError::InvalidStringChar),
            _ => {
                scratch.push(byte);
            }
        }
    }
}

/// Handle the part of a `\uXXXX` escape after the `u`, including the second
/// half of a surrogate pair.
fn decode_unicode_escape(
    input: &mut SliceInputBuffer<'_>,
    scratch: &mut ScratchBuffer<u8>,
) -> Result<(), ParseError> {
    let high = escape::hex4(input.remaining())?;
    input.advance(4);

    let codepoint = if HIGH_SURROGATES.contains(&high) {
        if !input.remaining().starts_with(b"\\u") {
            return Err(ParseError::InvalidUnicodeHex);
        }
        input.advance(2);
        let low = escape::hex4(input.remaining())?;
        input.advance(4);
        escape::combine_surrogates(high, low)?
    } else {
        // A lone low surrogate passes through unchanged
        high
    };

    let mut utf8 = [0u8; 4];
    scratch.append(escape::utf8_bytes(codepoint, &mut utf8));
    Ok(())
}
