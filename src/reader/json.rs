use crate::core::error::Result;
use crate::reader::text::read_file;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// JSON collaborator: parses text into a structured value.
pub trait JsonDecoder: Send + Sync {
    fn decode(&self, text: &str) -> Result<Value>;
}

/// Default decoder backed by `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeJsonDecoder;

impl JsonDecoder for SerdeJsonDecoder {
    fn decode(&self, text: &str) -> Result<Value> {
        let value = serde_json::from_str(text)?;
        Ok(value)
    }
}

/// Reads a file and parses its contents as JSON. The read completes before
/// parsing begins; a read failure propagates the I/O error unchanged, a
/// parse failure propagates the JSON error.
pub async fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let text = read_file(path).await?;
    SerdeJsonDecoder.decode(&text)
}

/// Typed variant of [`read_json_file`]: deserializes directly into `T`.
pub async fn read_json_file_as<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let text = read_file(path).await?;
    let value = serde_json::from_str(&text)?;
    Ok(value)
}
