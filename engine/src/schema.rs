//! Shipment field schema and validation.
//!
//! The schema lists the caller-supplied fields of a shipment and knows how
//! to read each of them out of a JSON object. Identifiers and timestamps are
//! not part of the schema; keys outside it are ignored.

use crate::{error::Result, Error};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field types supported in the shipment schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Non-empty string
    Text,
    /// Calendar date, given as `YYYY-MM-DD` or an RFC 3339 timestamp
    Date,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Text => write!(f, "String"),
            FieldType::Date => write!(f, "Date"),
        }
    }
}

/// Definition of a caller-supplied shipment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    /// JSON key
    pub name: &'static str,
    /// Field type
    pub field_type: FieldType,
}

pub const TRACKING_NUMBER: FieldDef = FieldDef::text("trackingNumber");
pub const DESTINATION: FieldDef = FieldDef::text("destination");
pub const STATUS: FieldDef = FieldDef::text("status");
pub const ESTIMATED_DELIVERY: FieldDef = FieldDef::date("estimatedDelivery");

/// All caller-supplied fields, in validation order.
pub const SHIPMENT_FIELDS: [FieldDef; 4] =
    [TRACKING_NUMBER, DESTINATION, STATUS, ESTIMATED_DELIVERY];

impl FieldDef {
    /// Create a text field definition.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Text,
        }
    }

    /// Create a date field definition.
    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Date,
        }
    }

    /// Read a text field that must be present.
    pub fn require_text(&self, obj: &Map<String, Value>) -> Result<String> {
        self.optional_text(obj)?
            .ok_or_else(|| Error::MissingRequiredField(self.name.to_string()))
    }

    /// Read a text field that may be absent.
    ///
    /// An explicit `null` is treated as an attempt to clear the field and
    /// rejected as missing.
    pub fn optional_text(&self, obj: &Map<String, Value>) -> Result<Option<String>> {
        match obj.get(self.name) {
            None => Ok(None),
            Some(Value::Null) => Err(Error::MissingRequiredField(self.name.to_string())),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(Error::EmptyField(self.name.to_string()))
            }
            Some(Value::String(s)) if s.contains('\0') => {
                Err(Error::NulCharacter(self.name.to_string()))
            }
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.type_mismatch(other)),
        }
    }

    /// Read a date field that must be present.
    pub fn require_date(&self, obj: &Map<String, Value>) -> Result<NaiveDate> {
        self.optional_date(obj)?
            .ok_or_else(|| Error::MissingRequiredField(self.name.to_string()))
    }

    /// Read a date field that may be absent.
    pub fn optional_date(&self, obj: &Map<String, Value>) -> Result<Option<NaiveDate>> {
        match obj.get(self.name) {
            None => Ok(None),
            Some(Value::Null) => Err(Error::MissingRequiredField(self.name.to_string())),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(Error::EmptyField(self.name.to_string()))
            }
            Some(Value::String(s)) => parse_date(s).map(Some).ok_or_else(|| Error::InvalidDate {
                field: self.name.to_string(),
                value: s.clone(),
            }),
            Some(other) => Err(self.type_mismatch(other)),
        }
    }

    fn type_mismatch(&self, value: &Value) -> Error {
        Error::TypeMismatch {
            field: self.name.to_string(),
            expected: self.field_type.to_string(),
            got: json_type_name(value).to_string(),
        }
    }
}

/// Require the payload to be a JSON object.
pub fn as_object(payload: &Value) -> Result<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| Error::InvalidPayload("payload must be an object".into()))
}

/// Earliest date a SQL `DATE` column holds (4713 BC, proleptic Gregorian).
const EARLIEST_STORABLE_YEAR: i32 = -4712;

/// Parse a delivery date.
///
/// Accepts a plain calendar date, an RFC 3339 timestamp (reduced to its UTC
/// date) or a timestamp without offset (taken as UTC). Dates before 4713 BC
/// are rejected.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_calendar_date(input.trim()).filter(|date| is_storable(*date))
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn is_storable(date: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(EARLIEST_STORABLE_YEAR, 1, 1)
        .is_some_and(|earliest| date >= earliest)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "Int",
        Value::Number(_) => "Float",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}
