//! Template Rendering Interface
//!
//! The seam between handlers and HTML production. Handlers name a
//! template and hand over a JSON data value; the concrete renderer
//! lives in the application binary. Domain crates depend only on this
//! trait.

use serde_json::Value;
use thiserror::Error;

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template registered under this name
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Template exists but could not be rendered with the given data
    #[error("Failed to render template {template}: {reason}")]
    RenderFailed { template: String, reason: String },
}

/// Template-rendering collaborator
///
/// Takes a template name and a data value, produces an HTML document.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, data: &Value) -> Result<String, RenderError>;
}

/// Escape a string for safe interpolation into HTML text content
/// or double-quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(
            escape_html("<script>alert(\"x\")</script>"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b's"), "a &amp; b&#39;s");
    }
}
