//! Escape unwrapping for free-text fields.

/// Unwraps JSON double-encoding and literal escape sequences.
///
/// Records sometimes arrive with a description that was JSON-encoded twice
/// (`"\"Line one\\nLine two\""`) or that carries literal `\n`, `\r\n` and
/// `\r` sequences instead of line breaks. Each pass strips one layer; the
/// function iterates to a fixed point, so it is idempotent and a no-op on
/// clean text. Every pass that changes the text makes it strictly shorter,
/// which bounds the loop.
pub fn unescape(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = unescape_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn unescape_once(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        return match serde_json::from_str::<String>(trimmed) {
            Ok(decoded) => decoded,
            Err(_) => trimmed[1..trimmed.len() - 1].to_string(),
        };
    }

    trimmed
        .replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\\r", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}
