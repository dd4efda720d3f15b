//! String-templating helpers used when rendering documentation pages.
//!
//! These produce markup fragments for the page templates: a highlighted code
//! listing and a hint box. They do no parsing of their own.

/// The highlighter language class used by [`code_block`].
pub const DEFAULT_CODE_LANGUAGE: &str = "cpp";

/// Wraps escaped source text in a `<pre><code>` block tagged for C++ highlighting.
pub fn code_block(code: &str) -> String {
    code_block_in(DEFAULT_CODE_LANGUAGE, code)
}

/// Like [`code_block`] with a caller-chosen highlighter language.
pub fn code_block_in(language: &str, code: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        html_escape(language),
        html_escape(code)
    )
}

/// Wraps the producer's output in a hint box. The content is inserted as-is,
/// so the producer is expected to return markup.
pub fn hint_box<F>(content: F) -> String
where
    F: FnOnce() -> String,
{
    let body = content();
    let mut out = String::with_capacity(body.len() + 31);
    out.push_str("<div class=\"hint-box\">");
    out.push_str(&body);
    out.push_str("</div>");
    out
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text or attribute values.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
