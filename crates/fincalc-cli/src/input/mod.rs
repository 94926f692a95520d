pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve a command's structured input: the `--input` file first, then piped
/// stdin unless the caller already has field flags to work from.
/// Returns `None` when neither applies so the caller can build from flags.
pub fn read_structured<T: DeserializeOwned>(
    path: Option<&str>,
    has_flags: bool,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_input(path)?));
    }
    if has_flags {
        return Ok(None);
    }
    match stdin::read_stdin()? {
        Some(text) => Ok(Some(parse_document(&text)?)),
        None => Ok(None),
    }
}

/// Piped documents may be JSON or YAML.
fn parse_document<T: DeserializeOwned>(text: &str) -> Result<T, Box<dyn std::error::Error>> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(json_err) => serde_yaml::from_str(text)
            .map_err(|_| format!("Failed to parse stdin as JSON: {json_err}").into()),
    }
}
