//! Date/time parsing

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::config::Context;
use crate::error::{DtoError, DtoResult};
use crate::value::Value;

use super::Caster;

/// Default parse format (`2024-01-31 13:45:00`)
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats tried when the configured one does not match
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Casts text and epoch seconds to date-times
///
/// Text is parsed with the configured `chrono` format first (naive times are
/// taken as UTC), then with RFC 3339, RFC 2822 and a few common ISO shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeCaster {
    format: String,
}

impl Default for DateTimeCaster {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl DateTimeCaster {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn parse(&self, text: &str) -> DtoResult<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_str(text, &self.format) {
            return Ok(dt);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, &self.format) {
            return Ok(naive.and_utc().fixed_offset());
        }
        if let Some(midnight) = NaiveDate::parse_from_str(text, &self.format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(midnight.and_utc().fixed_offset());
        }

        tracing::trace!("'{}' does not match {}, trying general formats", text, self.format);
        parse_general(text)
            .ok_or_else(|| DtoError::cast("DateTime", format!("Cannot parse date string: {}", text)))
    }
}

fn parse_general(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt);
    }
    for format in FALLBACK_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

impl Caster for DateTimeCaster {
    fn cast(&self, value: Value, _ctx: &Context<'_>) -> DtoResult<Value> {
        match value {
            Value::DateTime(_) => Ok(value),
            Value::String(text) => self.parse(&text).map(Value::DateTime),
            Value::Int(seconds) => DateTime::<Utc>::from_timestamp(seconds, 0)
                .map(|dt| Value::DateTime(dt.fixed_offset()))
                .ok_or_else(|| {
                    DtoError::cast("DateTime", format!("timestamp {} is out of range", seconds))
                }),
            other => Err(DtoError::cast(
                "DateTime",
                format!("unsupported type {}", other.type_name()),
            )),
        }
    }

    fn target(&self) -> String {
        "DateTime".to_string()
    }
}
