// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use log::{debug, trace};

use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::scratch_buffer::{ScratchBuffer, DEFAULT_INITIAL_CAPACITY};
use crate::slice_input_buffer::SliceInputBuffer;
use crate::string_decoder::decode_string;
use crate::value::{Member, Value};

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum array/object nesting depth. `None` means unbounded, in which
    /// case recursion depth follows the input and deep enough input can exhaust
    /// the stack. Set a limit when parsing untrusted input.
    pub max_depth: Option<usize>,
    /// Number of entries the scratch buffers allocate on first use.
    pub initial_scratch_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            initial_scratch_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

/// A recursive-descent JSON parser producing an owned [`Value`] tree.
///
/// The parser itself only holds configuration. Every call to
/// [`parse`](Self::parse) gets its own scratch space, so one parser can be
/// shared freely.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default configuration.
    ///
    /// # Example
    /// ```
    /// use leptjson::{Parser, ValueType};
    /// let value = Parser::new().parse(" true ").unwrap();
    /// assert_eq!(value.value_type(), ValueType::True);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration.
    ///
    /// # Example
    /// ```
    /// use leptjson::{ParseError, Parser, ParserConfig};
    /// let parser = Parser::with_config(ParserConfig {
    ///     max_depth: Some(2),
    ///     ..ParserConfig::default()
    /// });
    /// assert!(parser.parse("[[1]]").is_ok());
    /// assert_eq!(parser.parse("[[[1]]]"), Err(ParseError::NestingTooDeep));
    /// ```
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses exactly one JSON value, surrounded by optional whitespace.
    ///
    /// # Arguments
    /// * `input` - The JSON text, as `&str`, `&[u8]` or anything else that is `AsRef<[u8]>`.
    ///
    /// # Errors
    /// The first error encountered, from whatever nesting level it occurred at.
    /// Nothing partially built is returned.
    pub fn parse<I: AsRef<[u8]>>(&self, input: I) -> Result<Value, ParseError> {
        let mut context = ParseContext::new(input.as_ref(), &self.config);
        let result = context.parse_root();
        if let Err(err) = &result {
            debug!(
                "parse failed at byte {}: {}",
                context.input.current_pos(),
                err
            );
        }
        result
    }

    /// Parses into an existing value.
    ///
    /// `value` is reset to `Null` first and stays `Null` if parsing fails.
    pub fn parse_into<I: AsRef<[u8]>>(&self, value: &mut Value, input: I) -> Result<(), ParseError> {
        value.reset();
        *value = self.parse(input)?;
        Ok(())
    }
}

/// Working memory for one top-level parse.
struct Scratch {
    bytes: ScratchBuffer<u8>,
    values: ScratchBuffer<Value>,
    members: ScratchBuffer<Member>,
}

impl Scratch {
    fn new(initial_capacity: usize) -> Self {
        Self {
            bytes: ScratchBuffer::with_initial_capacity(initial_capacity),
            values: ScratchBuffer::with_initial_capacity(initial_capacity),
            members: ScratchBuffer::with_initial_capacity(initial_capacity),
        }
    }
}

struct ParseContext<'a, 'c> {
    input: SliceInputBuffer<'a>,
    scratch: Scratch,
    config: &'c ParserConfig,
}

impl<'a, 'c> ParseContext<'a, 'c> {
    fn new(data: &'a [u8], config: &'c ParserConfig) -> Self {
        Self {
            input: SliceInputBuffer::new(data),
            scratch: Scratch::new(config.initial_scratch_capacity),
            config,
        }
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value(0)?;
        self.input.skip_whitespace();
        if !self.input.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    /// Dispatch on the next non-whitespace byte. `depth` is the nesting level
    /// of the collection this value sits in, 0 at the root.
    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.input.skip_whitespace();
        let next = self.input.peek();
        trace!(
            "value at byte {}: {:?}",
            self.input.current_pos(),
            next.map(char::from)
        );
        match next {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'"') => decode_string(&mut self.input, &mut self.scratch.bytes).map(Value::String),
            Some(b'[') => self.parse_array(depth + 1),
            Some(b'{') => self.parse_object(depth + 1),
            // Anything else can only be a number; the number grammar rejects the rest.
            Some(_) => parse_number(&mut self.input).map(Value::Number),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        if !self.input.remaining().starts_with(literal) {
            return Err(ParseError::InvalidValue);
        }
        self.input.advance(literal.len());
        Ok(value)
    }

    fn check_depth(&self, depth: usize) -> Result<(), ParseError> {
        match self.config.max_depth {
            Some(max) if depth > max => Err(ParseError::NestingTooDeep),
            _ => Ok(()),
        }
    }

    /// Children are staged in `scratch.values` and moved into an exactly-sized
    /// vector once `]` tells us how many there are.
    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.check_depth(depth)?;
        self.input.advance(1);
        let mut count = 0usize;
        loop {
            self.input.skip_whitespace();
            match self.input.peek() {
                None => return Err(ParseError::IncompleteArray),
                Some(b']') => {
                    self.input.advance(1);
                    let items: Vec<Value> = self.scratch.values.truncate(count)?.collect();
                    debug!("array of {} elements at depth {}", count, depth);
                    return Ok(Value::Array(items));
                }
                Some(b',') => self.input.advance(1),
                Some(_) => {
                    let item = self.parse_value(depth)?;
                    self.scratch.values.push(item);
                    count += 1;
                }
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.check_depth(depth)?;
        self.input.advance(1);
        let mut count = 0usize;
        loop {
            self.input.skip_whitespace();
            match self.input.peek() {
                None => return Err(ParseError::IncompleteObject),
                Some(b'}') => {
                    self.input.advance(1);
                    let members: Vec<Member> = self.scratch.members.truncate(count)?.collect();
                    debug!("object of {} members at depth {}", count, depth);
                    return Ok(Value::Object(members));
                }
                Some(b',') => self.input.advance(1),
                Some(_) => {
                    let member = self.parse_member(depth)?;
                    self.scratch.members.push(member);
                    count += 1;
                }
            }
        }
    }

    fn parse_member(&mut self, depth: usize) -> Result<Member, ParseError> {
        let key = decode_string(&mut self.input, &mut self.scratch.bytes)?;
        self.input.skip_whitespace();
        if self.input.consume_byte() != Some(b':') {
            return Err(ParseError::ObjectMissingValue);
        }
        let value = self.parse_value(depth)?;
        Ok(Member::new(key, value))
    }
}
