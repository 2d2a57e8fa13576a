// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), no_std)]

//! A small recursive-descent JSON parser producing an owned value tree.
//!
//! ```
//! use leptjson::{parse, ValueType};
//!
//! let value = parse(r#"{"a": 1, "b": [true, "x"]}"#).unwrap();
//! assert_eq!(value.object_len(), Some(2));
//! assert_eq!(value.object_key(0), Some(&b"a"[..]));
//! assert_eq!(value.object_value(0).and_then(|v| v.as_number()), Some(1.0));
//!
//! let b = value.find_object_value("b").unwrap();
//! assert_eq!(b.array_element(0).map(|v| v.value_type()), Some(ValueType::True));
//! ```
//!
//! Every failure is reported as a [`ParseError`]; malformed input never panics.

extern crate alloc;

mod escape;

mod number_parser;

mod parse_error;
pub use parse_error::{ParseError, UnexpectedState};

mod scratch_buffer;
pub use scratch_buffer::{ScratchBuffer, ScratchError};

mod slice_input_buffer;

mod string_decoder;

mod value;
pub use value::{Member, Value, ValueType};

mod value_parser;
pub use value_parser::{Parser, ParserConfig};

/// Parse `input` with the default configuration.
///
/// Shorthand for `Parser::new().parse(input)`.
pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Value, ParseError> {
    Parser::new().parse(input)
}

/// Parse `input` into `value` with the default configuration.
///
/// `value` is reset to `Null` first and stays `Null` if parsing fails.
pub fn parse_into<I: AsRef<[u8]>>(value: &mut Value, input: I) -> Result<(), ParseError> {
    Parser::new().parse_into(value, input)
}
