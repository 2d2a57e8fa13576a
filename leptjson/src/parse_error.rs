// SPDX-License-Identifier: Apache-2.0

use crate::scratch_buffer::ScratchError;

/// Errors that can occur during JSON parsing.
///
/// A successful parse is `Ok(..)`; every other outcome is one of these statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A literal or number did not match the JSON grammar.
    InvalidValue,
    /// A complete value was followed by more non-whitespace input.
    RootNotSingular,
    /// A number literal was valid but does not fit in an `f64`.
    NumberTooBig,
    /// Input ended before the closing quote of a string.
    StringMissQuote,
    /// A backslash was followed by a character that is not a valid escape.
    InvalidStringEscape,
    /// An unescaped control character (below 0x20) appeared inside a string.
    InvalidStringChar,
    /// A `\u` escape was not followed by four hex digits.
    InvalidUnicodeHex,
    /// A high surrogate was followed by something other than a low surrogate.
    InvalidUnicodeSurrogate,
    /// Input ended inside an array.
    IncompleteArray,
    /// Input ended inside an object.
    IncompleteObject,
    /// An object key was not followed by `:`.
    ObjectMissingValue,
    /// Nesting exceeded the configured `max_depth`.
    NestingTooDeep,
    /// The parser entered an unexpected internal state.
    Unexpected(UnexpectedState),
}

/// Internal invariant breaches. None of these are reachable from well-formed
/// call sequences inside the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnexpectedState {
    /// More entries were popped from the scratch buffer than were staged.
    ScratchUnderflow,
}

impl ParseError {
    /// Numeric status code for this error.
    ///
    /// Codes follow the classic status enumeration where `0` means success,
    /// so the first error is `1`. Variants outside that enumeration map past
    /// the end of it.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::NumberTooBig => 4,
            ParseError::StringMissQuote => 5,
            ParseError::InvalidStringEscape => 6,
            ParseError::InvalidStringChar => 7,
            ParseError::InvalidUnicodeHex => 8,
            ParseError::InvalidUnicodeSurrogate => 9,
            ParseError::IncompleteArray => 10,
            ParseError::IncompleteObject => 11,
            ParseError::ObjectMissingValue => 12,
            ParseError::NestingTooDeep => 13,
            ParseError::Unexpected(_) => 255,
        }
    }
}

impl From<UnexpectedState> for ParseError {
    fn from(info: UnexpectedState) -> Self {
        ParseError::Unexpected(info)
    }
}

impl From<ScratchError> for ParseError {
    fn from(err: ScratchError) -> Self {
        match err {
            ScratchError::Underflow { .. } => UnexpectedState::ScratchUnderflow.into(),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::ExpectValue => f.write_str("expected a value"),
            ParseError::InvalidValue => f.write_str("invalid value"),
            ParseError::RootNotSingular => f.write_str("unexpected content after root value"),
            ParseError::NumberTooBig => f.write_str("number too big"),
            ParseError::StringMissQuote => f.write_str("missing closing quote"),
            ParseError::InvalidStringEscape => f.write_str("invalid string escape"),
            ParseError::InvalidStringChar => f.write_str("invalid character in string"),
            ParseError::InvalidUnicodeHex => f.write_str("invalid \\u hex digits"),
            ParseError::InvalidUnicodeSurrogate => f.write_str("invalid unicode surrogate"),
            ParseError::IncompleteArray => f.write_str("incomplete array"),
            ParseError::IncompleteObject => f.write_str("incomplete object"),
            ParseError::ObjectMissingValue => f.write_str("missing ':' after object key"),
            ParseError::NestingTooDeep => f.write_str("nesting too deep"),
            ParseError::Unexpected(info) => write!(f, "unexpected parser state: {info:?}"),
        }
    }
}

impl core::error::Error for ParseError {}
