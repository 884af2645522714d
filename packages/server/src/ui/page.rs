//! HTML pages.
//!
//! Templates are compiled into the binary. Placeholders have the form
//! `{{key}}` and are substituted in a single pass, so substituted values are
//! never scanned for further placeholders.

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");
const CHAT_TEMPLATE: &str = include_str!("../../assets/chat.html");

/// Landing page (register / login / forgot-password forms)
pub fn render_index() -> &'static str {
    INDEX_TEMPLATE
}

/// Chat page for the given user
pub fn render_chat(user_id: &str, display_name: &str) -> String {
    render(
        CHAT_TEMPLATE,
        &[
            ("name_html", escape_html(display_name)),
            ("name_js", js_string(display_name)),
            ("id_js", js_string(user_id)),
        ],
    )
}

fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                tracing::warn!("Unknown template placeholder '{}'", key);
                out.push_str(&rest[start..start + 2 + end + 2]);
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Escapes text for use in HTML element content or attribute values
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a JavaScript string literal that is safe inside a `<script>` element
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
