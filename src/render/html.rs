use super::RenderConfig;
use super::frame::RenderFrame;
use super::library::LibraryScript;

const PAGE_TEMPLATE: &str = include_str!("assets/page.html");
const BOOTSTRAP_JS: &str = include_str!("assets/bootstrap.js");

/// Complete document with the library, bootstrap and configuration inlined.
pub(crate) fn standalone_document(
    frame: &RenderFrame,
    config: &RenderConfig,
    library: &LibraryScript,
) -> String {
    let library_tag = match library {
        LibraryScript::Embedded(text) => format!("<script>{}</script>", escape_script(text)),
        LibraryScript::External(url) => {
            format!("<script src=\"{}\"></script>", escape_html(url))
        }
    };
    let padding = config.padding_px.to_string();
    let width = frame.viewport().width.to_string();
    let config_js = escape_json_for_script(frame.config_json());

    fill_template(
        PAGE_TEMPLATE,
        &[
            ("TITLE", &escape_html(&config.title)),
            ("PADDING", &padding),
            ("PAGE_BACKGROUND", &escape_html(&config.page_background)),
            ("LIBRARY", &library_tag),
            ("CONTAINER_ID", frame.container_id()),
            ("WIDTH", &width),
            ("BOOTSTRAP", BOOTSTRAP_JS),
            ("CONFIG", &config_js),
        ],
    )
}

/// Iframe whose `srcdoc` is the standalone document, sized to fit it.
pub(crate) fn iframe_fragment(frame: &RenderFrame, config: &RenderConfig, document: &str) -> String {
    let viewport = frame.viewport();
    let padding = config.padding_px.saturating_mul(2);
    format!(
        "<iframe id=\"{id}-frame\" srcdoc=\"{srcdoc}\" style=\"width: {width}px; height: {height}px; border: none;\" sandbox=\"allow-scripts\"></iframe>",
        id = frame.container_id(),
        srcdoc = escape_html(document),
        width = viewport.width.saturating_add(padding),
        height = viewport.height.saturating_add(padding),
    )
}

/// Makes script source safe inside an inline `<script>` element.
///
/// The HTML tokenizer ends a script at `</script` in any letter case.
pub(crate) fn escape_script(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("</") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let closes_script = tail
            .as_bytes()
            .get(..6)
            .is_some_and(|name| name.eq_ignore_ascii_case(b"script"));
        out.push_str(if closes_script { "<\\/" } else { "</" });
        rest = tail;
    }
    out.push_str(rest);
    escape_line_separators(&out)
}

/// JSON embedded as a script literal: every `<` becomes `\u003c`.
pub(crate) fn escape_json_for_script(json: &str) -> String {
    escape_line_separators(&json.replace('<', "\\u003c"))
}

fn escape_line_separators(text: &str) -> String {
    text.replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Substitutes `__NAME__` placeholders in one pass.
///
/// Inserted values are never rescanned, so user text that happens to look
/// like a placeholder is left alone.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;
    while let Some(start) = rest.find("__") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let replaced = after.find("__").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("__");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
