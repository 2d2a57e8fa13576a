// SPDX-License-Identifier: Apache-2.0

//! Escape-sequence helpers shared by the string decoder.

use core::ops::RangeInclusive;

use crate::parse_error::ParseError;

/// Code units that open a surrogate pair.
pub const HIGH_SURROGATES: RangeInclusive<u32> = 0xD800..=0xDBFF;
/// Code units that close a surrogate pair.
pub const LOW_SURROGATES: RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Map the byte after a `\` to the byte it stands for.
///
/// Only `" \ / b f n r t` are simple escapes; `u` goes through [`hex4`].
pub fn unescape(escape: u8) -> Result<u8, ParseError> {
    let byte = match escape {
        b'"' | b'\\' | b'/' => escape,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        _ => return Err(ParseError::InvalidStringEscape),
    };
    Ok(byte)
}

/// Read the four hex digits of a `\u` escape from the front of `input`.
///
/// Running out of input counts as a bad digit.
pub fn hex4(input: &[u8]) -> Result<u32, ParseError> {
    let digits = input.get(..4).ok_or(ParseError::InvalidUnicodeHex)?;
    let mut unit = 0u32;
    for &digit in digits {
        let nibble = char::from(digit)
            .to_digit(16)
            .ok_or(ParseError::InvalidUnicodeHex)?;
        unit = (unit << 4) | nibble;
    }
    Ok(unit)
}

/// Join a high and a low surrogate into the code point they encode.
pub fn combine_surrogates(high: u32, low: u32) -> Result<u32, ParseError> {
    if HIGH_SURROGATES.contains(&high) && LOW_SURROGATES.contains(&low) {
        Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
    } else {
        Err(ParseError::InvalidUnicodeSurrogate)
    }
}

/// Pack `code_point` as UTF-8 into `out` and return the used prefix.
///
/// `char::encode_utf8` refuses surrogates, but a lone low surrogate escape
/// is accepted here and comes out in the three-byte form.
pub fn utf8_bytes(code_point: u32, out: &mut [u8; 4]) -> &[u8] {
    let cont = |shift: u32| 0x80 | ((code_point >> shift) & 0x3F) as u8;
    let len = match code_point {
        0..=0x7F => {
            out[0] = code_point as u8;
            1
        }
        0x80..=0x7FF => {
            out[0] = 0xC0 | (code_point >> 6) as u8;
            out[1] = cont(0);
            2
        }
        0x800..=0xFFFF => {
            out[0] = 0xE0 | (code_point >> 12) as u8;
            out[1] = cont(6);
            out[2] = cont(0);
            3
        }
        _ => {
            out[0] = 0xF0 | ((code_point >> 18) & 0x07) as u8;
            out[1] = cont(12);
            out[2] = cont(6);
            out[3] = cont(0);
            4
        }
    };
    &out[..len]
}
