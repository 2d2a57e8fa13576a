// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// Length of the longest prefix of `input` that is a JSON number.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
///
/// Whatever follows the prefix is left for the caller, so `0123` scans as `0`.
/// A fraction or exponent that is started but has no digits is an error, not a
/// shorter match.
pub fn scan_number(input: &[u8]) -> Result<usize, ParseError> {
    let at = |pos: usize| input.get(pos).copied();
    let skip_digits = |mut pos: usize| {
        while at(pos).is_some_and(|b| b.is_ascii_digit()) {
            pos += 1;
        }
        pos
    };

    let mut pos = 0;
    if at(pos) == Some(b'-') {
        pos += 1;
    }

    match at(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos = skip_digits(pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if at(pos) == Some(b'.') {
        pos += 1;
        if !at(pos).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(pos);
    }

    if let Some(b'e' | b'E') = at(pos) {
        pos += 1;
        if let Some(b'+' | b'-') = at(pos) {
            pos += 1;
        }
        if !at(pos).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(pos);
    }

    Ok(pos)
}

/// Convert a literal that has already passed [`scan_number`] to `f64`.
///
/// Overflow to infinity is `NumberTooBig`. Underflow to zero is a normal result.
pub fn convert_number(literal: &[u8]) -> Result<f64, ParseError> {
    let text = core::str::from_utf8(literal).map_err(|_| ParseError::InvalidValue)?;
    let number: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
    if number.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(number)
}

/// Scan and convert the number at the cursor, advancing past it on success.
pub fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<f64, ParseError> {
    let remaining = input.remaining();
    let len = scan_number(remaining)?;
    let literal = remaining.get(..len).ok_or(ParseError::InvalidValue)?;
    let number = convert_number(literal)?;
    input.advance(len);
    Ok(number)
}
