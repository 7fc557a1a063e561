//! Typed field access over a decoded wire mapping
//!
//! Contract payloads arrive as schema-free JSON objects. This module wraps
//! one such object together with the variant type-tag being decoded and
//! exposes typed accessors, so every failure names both the variant and the
//! offending field instead of surfacing as an anonymous cast error.
//!
//! Two numeric shapes exist on the wire. Amount-like fields (token amounts,
//! precision-scaled supply) are not guaranteed to fit a signed 64-bit range
//! and decode to `BigInt`; protocol-bounded fields (counts, durations,
//! percentages, ids, timestamps) decode to `i64`.

use std::str::FromStr;

use num_bigint::BigInt;
use serde_json::{Map, Value};
use thiserror::Error;

use super::address::{Address, AddressError};

/// Errors produced while decoding a recognized contract variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required field is absent or has the wrong shape
    #[error("{contract}: missing required field `{field}`")]
    MissingField {
        contract: &'static str,
        field: &'static str,
    },

    /// A numeric field is not parseable as the expected numeric kind
    #[error("{contract}: field `{field}` is not a valid number")]
    MalformedNumber {
        contract: &'static str,
        field: &'static str,
    },

    /// An address field failed hex decoding or checksum validation
    #[error("{contract}: field `{field}`: {source}")]
    Address {
        contract: &'static str,
        field: &'static str,
        #[source]
        source: AddressError,
    },
}

/// One wire mapping plus the type-tag of the variant being decoded
pub(crate) struct Fields<'a> {
    contract: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(contract: &'static str, map: &'a Map<String, Value>) -> Self {
        Self { contract, map }
    }

    fn missing(&self, field: &'static str) -> DecodeError {
        DecodeError::MissingField {
            contract: self.contract,
            field,
        }
    }

    fn malformed_number(&self, field: &'static str) -> DecodeError {
        DecodeError::MalformedNumber {
            contract: self.contract,
            field,
        }
    }

    /// A present, non-null value; absent or null is a missing field
    fn required(&self, field: &'static str) -> Result<&'a Value, DecodeError> {
        match self.map.get(field) {
            None | Some(Value::Null) => Err(self.missing(field)),
            Some(value) => Ok(value),
        }
    }

    fn present(&self, field: &'static str) -> Option<&'a Value> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Required hex-encoded address field
    pub(crate) fn address(&self, field: &'static str) -> Result<Address, DecodeError> {
        let text = self.string_value(field, self.required(field)?)?;
        Address::from_hex(&text).map_err(|source| DecodeError::Address {
            contract: self.contract,
            field,
            source,
        })
    }

    /// Required amount field, arbitrary precision
    ///
    /// Accepts an integral JSON number of any magnitude or a decimal string;
    /// fractional and exponent forms are rejected because wire amounts are
    /// integral by protocol.
    pub(crate) fn amount(&self, field: &'static str) -> Result<BigInt, DecodeError> {
        self.amount_value(field, self.required(field)?)
    }

    /// Optional amount field; absent or null decodes to None
    pub(crate) fn opt_amount(&self, field: &'static str) -> Result<Option<BigInt>, DecodeError> {
        self.present(field)
            .map(|value| self.amount_value(field, value))
            .transpose()
    }

    fn amount_value(&self, field: &'static str, value: &Value) -> Result<BigInt, DecodeError> {
        let literal = match value {
            Value::Number(number) => number.to_string(),
            Value::String(text) => text.trim().to_string(),
            _ => return Err(self.malformed_number(field)),
        };
        BigInt::from_str(&literal).map_err(|_| self.malformed_number(field))
    }

    /// Required bounded integer field
    pub(crate) fn int(&self, field: &'static str) -> Result<i64, DecodeError> {
        self.int_value(field, self.required(field)?)
    }

    /// Optional bounded integer field; absent or null decodes to None
    pub(crate) fn opt_int(&self, field: &'static str) -> Result<Option<i64>, DecodeError> {
        self.present(field)
            .map(|value| self.int_value(field, value))
            .transpose()
    }

    fn int_value(&self, field: &'static str, value: &Value) -> Result<i64, DecodeError> {
        match value {
            Value::Number(number) => number.as_i64().ok_or_else(|| self.malformed_number(field)),
            _ => Err(self.malformed_number(field)),
        }
    }

    /// Required string field
    pub(crate) fn string(&self, field: &'static str) -> Result<String, DecodeError> {
        let value = self.required(field)?;
        self.string_value(field, value)
    }

    /// Optional string field; absent or null decodes to None
    pub(crate) fn opt_string(&self, field: &'static str) -> Result<Option<String>, DecodeError> {
        self.present(field)
            .map(|value| self.string_value(field, value))
            .transpose()
    }

    fn string_value(&self, field: &'static str, value: &Value) -> Result<String, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.missing(field))
    }

    /// Required boolean field
    pub(crate) fn boolean(&self, field: &'static str) -> Result<bool, DecodeError> {
        self.required(field)?
            .as_bool()
            .ok_or_else(|| self.missing(field))
    }

    /// Required sequence field; elements are decoded by the caller
    pub(crate) fn list(&self, field: &'static str) -> Result<&'a Vec<Value>, DecodeError> {
        self.required(field)?
            .as_array()
            .ok_or_else(|| self.missing(field))
    }

    /// Nested mapping element of a sequence field
    pub(crate) fn element(
        &self,
        field: &'static str,
        value: &'a Value,
    ) -> Result<&'a Map<String, Value>, DecodeError> {
        value.as_object().ok_or_else(|| self.missing(field))
    }

    /// Optional nested mapping field; absent or null decodes to None
    pub(crate) fn opt_nested(
        &self,
        field: &'static str,
    ) -> Result<Option<&'a Map<String, Value>>, DecodeError> {
        self.present(field)
            .map(|value| value.as_object().ok_or_else(|| self.missing(field)))
            .transpose()
    }
}
