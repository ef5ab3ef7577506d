use wasm_bindgen::JsValue;
use web_sys::{Document, DomParser, SupportedType};

/// Copies `<title>` and the description meta tag from the markup of the page
/// being entered into the live document.
pub fn replace(document: &Document, next_html: &str) -> Result<(), JsValue> {
    let next = DomParser::new()?.parse_from_string(next_html, SupportedType::TextHtml)?;
    document.set_title(&next.title());

    let selector = r#"meta[name="description"]"#;
    if let (Some(current), Some(incoming)) = (
        document.query_selector(selector)?,
        next.query_selector(selector)?,
    ) {
        let content = incoming.get_attribute("content").unwrap_or_default();
        current.set_attribute("content", &content)?;
    }
    Ok(())
}
