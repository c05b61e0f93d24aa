//! Export serialization formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use docsystem_core::error::AppError;
use docsystem_core::result::AppResult;
use docsystem_entity::object::SystemObject;

/// Column order of the CSV export.
const CSV_HEADER: [&str; 7] = [
    "id",
    "name",
    "type",
    "version",
    "status",
    "lastModified",
    "author",
];

/// Serialization format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// MIME type of the serialized document.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }

    /// Serialize objects in this format.
    pub fn serialize(&self, objects: &[SystemObject]) -> AppResult<Vec<u8>> {
        match self {
            Self::Json => Ok(serde_json::to_vec_pretty(objects)?),
            Self::Csv => Ok(to_csv(objects).into_bytes()),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(AppError::validation(format!(
                "Invalid export format: '{s}'. Expected one of: json, csv"
            ))),
        }
    }
}

fn to_csv(objects: &[SystemObject]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().copied());
    for o in objects {
        let id = o.id.to_string();
        let date = o.last_modified.format("%Y-%m-%d").to_string();
        push_row(
            &mut out,
            [
                id.as_str(),
                o.name.as_str(),
                o.kind.as_str(),
                o.version.as_str(),
                o.status.as_str(),
                date.as_str(),
                o.author.as_str(),
            ],
        );
    }
    out
}

/// Append one CRLF-terminated record with RFC 4180 quoting.
fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\r', '\n']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsystem_dataset::seed::objects::seed_objects;

    #[test]
    fn test_csv_has_header_and_one_line_per_object() {
        let objects = seed_objects().unwrap();
        let csv = String::from_utf8(ExportFormat::Csv.serialize(&objects).unwrap()).unwrap();
        let lines: Vec<&str> = csv.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "id,name,type,version,status,lastModified,author");
        assert_eq!(
            lines[1],
            "1,UserAuthModule,Модуль,3.2.0,active,2026-01-25,Иванов И.И."
        );
    }

    #[test]
    fn test_csv_quotes_special_characters() {
        let mut out = String::new();
        push_row(&mut out, ["plain", "a,b", "say \"hi\""]);
        assert_eq!(out, "plain,\"a,b\",\"say \"\"hi\"\"\"\r\n");
    }

    #[test]
    fn test_json_is_array_with_wire_names() {
        let objects = seed_objects().unwrap();
        let bytes = ExportFormat::Json.serialize(&objects[..1]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["lastModified"], "2026-01-25");
        assert_eq!(value[0]["type"], "Модуль");
    }

    #[test]
    fn test_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
