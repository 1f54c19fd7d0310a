/**
 * Wire formats for the notification payload.
 *
 * Two encodings of the same record: structural tag-per-field XML via
 * `quick-xml`, and JSON via `serde_json` with snake_case keys declared on
 * the record types. Both produce UTF-8 bytes. The chosen format also
 * decides the `Content-Type` the HTTP transport sends, through `is_json`.
 *
 * The formatter is generic over `Serialize`: the record stays an opaque
 * value owned by the caller, and any well-formed record encodes without
 * error.
 */
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SerializationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl Format {
    /**
     * Encodes a record to UTF-8 bytes in this format.
     */
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        match self {
            Format::Xml => Ok(quick_xml::se::to_string(value)?.into_bytes()),
            Format::Json => Ok(serde_json::to_vec(value)?),
        }
    }

    /// Drives the HTTP transport's content-type selection.
    pub fn is_json(&self) -> bool {
        matches!(self, Format::Json)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}', expected xml or json")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Xml => "XML",
            Format::Json => "JSON",
        })
    }
}
