//! Quote metadata and input loading

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Quote number shown when the metadata has none
pub const DEFAULT_NUMERO: &str = "N/A";
/// Company name shown when the metadata has none
pub const DEFAULT_EMPRESA: &str = "Empresa XYZ Ltda.";
/// Client name used when the metadata has none
pub const DEFAULT_CLIENTE: &str = "Cliente";

/// Metadata record passed on the command line
///
/// Every field is optional. Strings are kept verbatim; other JSON values are
/// kept as their compact JSON text, and `null` counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteMetadata {
    /// Quote number
    #[serde(default, deserialize_with = "scalar_text")]
    pub numero: Option<String>,
    /// Quote date, already formatted by the caller
    #[serde(default, deserialize_with = "scalar_text")]
    pub data: Option<String>,
    /// Issuing company
    #[serde(default, deserialize_with = "scalar_text")]
    pub empresa: Option<String>,
    /// Client name. Accepted for compatibility; nothing renders it.
    #[serde(default, deserialize_with = "scalar_text")]
    pub cliente: Option<String>,
}

impl QuoteMetadata {
    /// Parse the metadata argument. The document must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::MetadataNotObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Metadata command-line argument as text
pub fn metadata_arg(arg: OsString) -> Result<String> {
    arg.into_string().map_err(|_| Error::MetadataEncoding)
}

/// Read the HTML document as UTF-8
pub fn load_html(path: &Path) -> Result<String> {
    let html = fs::read_to_string(path).map_err(|source| Error::ReadHtml {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {} bytes of HTML from {}", html.len(), path.display());
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;

    #[test]
    fn test_parse_full_record() {
        let meta = QuoteMetadata::from_json(
            r#"{"numero":"2025-001","data":"01/12/2025","empresa":"ACME","cliente":"João"}"#,
        )
        .unwrap();
        assert_eq!(meta.numero.as_deref(), Some("2025-001"));
        assert_eq!(meta.data.as_deref(), Some("01/12/2025"));
        assert_eq!(meta.empresa.as_deref(), Some("ACME"));
        assert_eq!(meta.cliente.as_deref(), Some("João"));
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(QuoteMetadata::from_json("{}").unwrap(), QuoteMetadata::default());
    }

    #[test]
    fn test_non_string_values_kept_as_text() {
        let meta =
            QuoteMetadata::from_json(r#"{"numero": 42, "empresa": null, "data": true, "extra": 1}"#)
                .unwrap();
        assert_eq!(meta.numero.as_deref(), Some("42"));
        assert_eq!(meta.empresa, None);
        assert_eq!(meta.data.as_deref(), Some("true"));
    }

    #[test]
    fn test_invalid_json_is_load_error() {
        let err = QuoteMetadata::from_json("{numero: 1").unwrap_err();
        assert_eq!(err.stage(), Stage::Load);
    }

    #[test]
    fn test_non_object_is_load_error() {
        let err = QuoteMetadata::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::MetadataNotObject("array")));
        assert_eq!(err.stage(), Stage::Load);
        assert!(QuoteMetadata::from_json("\"numero\"").is_err());
        assert!(QuoteMetadata::from_json("null").is_err());
    }

    #[test]
    fn test_metadata_arg_text() {
        assert_eq!(metadata_arg(OsString::from("{}")).unwrap(), "{}");
    }

    #[cfg(unix)]
    #[test]
    fn test_metadata_arg_not_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let err = metadata_arg(OsString::from_vec(vec![b'{', 0xff, b'}'])).unwrap_err();
        assert!(matches!(err, Error::MetadataEncoding));
        assert_eq!(err.stage(), Stage::Load);
    }

    #[test]
    fn test_load_html_nonexistent_file() {
        let result = load_html(Path::new("nonexistent.html"));
        assert!(matches!(result.unwrap_err(), Error::ReadHtml { .. }));
    }
}
