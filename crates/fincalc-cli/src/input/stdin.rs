use std::io::{self, Read};

/// Read piped stdin as text. Returns None for an interactive TTY or empty input.
pub fn read_stdin() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    tracing::debug!(bytes = trimmed.len(), "read input from stdin");
    Ok(Some(trimmed.to_string()))
}
