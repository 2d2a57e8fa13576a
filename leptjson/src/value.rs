// SPDX-License-Identifier: Apache-2.0

//! The owned value tree produced by the parser.

use alloc::vec::Vec;

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON value.
///
/// A value exclusively owns everything below it. Strings are raw bytes with
/// an authoritative length: they may contain NUL and are not guaranteed to be
/// valid UTF-8 (use [`Value::as_str`] when you need text).
///
/// Objects keep their members in input order and keep duplicate keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(Vec<u8>),
    Array(Vec<Value>),
    Object(Vec<Member>),
}

/// One `key: value` entry of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    key: Vec<u8>,
    value: Value,
}

impl Member {
    pub fn new(key: impl Into<Vec<u8>>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// The key as text, if it is valid UTF-8.
    pub fn key_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.key).ok()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn into_parts(self) -> (Vec<u8>, Value) {
        (self.key, self.value)
    }
}

impl Value {
    /// A fresh `Null` value.
    pub fn new() -> Self {
        Value::Null
    }

    /// Release everything this value owns and return it to `Null`.
    ///
    /// Children are released iteratively, so resetting a very deeply nested
    /// tree does not recurse. Safe to call any number of times.
    pub fn reset(&mut self) {
        let mut pending = Vec::new();
        pending.push(core::mem::take(self));
        while let Some(mut value) = pending.pop() {
            match &mut value {
                Value::Array(items) => pending.extend(items.drain(..)),
                Value::Object(members) => {
                    pending.extend(members.drain(..).map(|member| member.value))
                }
                _ => {}
            }
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(false) => ValueType::False,
            Value::Bool(true) => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn set_number(&mut self, n: f64) {
        self.replace(Value::Number(n));
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn set_bool(&mut self, b: bool) {
        self.replace(Value::Bool(b));
    }

    /// The raw bytes of a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string as text, if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    pub fn string_len(&self) -> Option<usize> {
        self.as_bytes().map(<[u8]>::len)
    }

    /// Store a copy of `s`. Embedded NUL bytes are kept.
    pub fn set_string(&mut self, s: impl AsRef<[u8]>) {
        self.replace(Value::String(s.as_ref().to_vec()));
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(<[Value]>::len)
    }

    pub fn array_element(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    pub fn array_element_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    pub fn set_array(&mut self, items: Vec<Value>) {
        self.replace(Value::Array(items));
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    pub fn object_len(&self) -> Option<usize> {
        self.as_object().map(<[Member]>::len)
    }

    pub fn object_member(&self, index: usize) -> Option<&Member> {
        self.as_object()?.get(index)
    }

    pub fn object_key(&self, index: usize) -> Option<&[u8]> {
        self.object_member(index).map(Member::key)
    }

    pub fn object_key_len(&self, index: usize) -> Option<usize> {
        self.object_member(index).map(Member::key_len)
    }

    pub fn object_value(&self, index: usize) -> Option<&Value> {
        self.object_member(index).map(Member::value)
    }

    pub fn object_value_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Object(members) => members.get_mut(index).map(Member::value_mut),
            _ => None,
        }
    }

    /// Value of the first member whose key equals `key`.
    ///
    /// Later members with the same key are kept in the object but are never
    /// returned here.
    pub fn find_object_value(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let key = key.as_ref();
        self.as_object()?
            .iter()
            .find(|member| member.key() == key)
            .map(Member::value)
    }

    pub fn set_object(&mut self, members: Vec<Member>) {
        self.replace(Value::Object(members));
    }

    fn replace(&mut self, value: Value) {
        self.reset();
        *self = value;
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
