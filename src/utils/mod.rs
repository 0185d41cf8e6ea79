//! Utility functions shared across the application.

/// Extracts the endpoint name from a request path.
///
/// Format: `/.netlify/functions/gemini` → `gemini`
///
/// Returns the text after the last `/`, which is empty for a path ending in
/// a slash.
#[must_use]
pub fn endpoint_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Replaces the value of the `key` query parameter so URLs can be logged.
#[must_use]
pub fn redact_api_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let redacted: Vec<&str> = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("key=") {
                "key=REDACTED"
            } else {
                pair
            }
        })
        .collect();

    format!("{base}?{}", redacted.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_name() {
        assert_eq!(endpoint_name("/.netlify/functions/gemini"), "gemini");
        assert_eq!(endpoint_name("/api/gemini"), "gemini");
        assert_eq!(endpoint_name("gemini"), "gemini");
        assert_eq!(endpoint_name("/api/"), "");
        assert_eq!(endpoint_name(""), "");
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("https://host/v1beta/models/m:generateContent?key=secret"),
            "https://host/v1beta/models/m:generateContent?key=REDACTED"
        );
        assert_eq!(
            redact_api_key("https://host/path?alt=json&key=secret"),
            "https://host/path?alt=json&key=REDACTED"
        );
        assert_eq!(redact_api_key("https://host/path"), "https://host/path");
    }
}
