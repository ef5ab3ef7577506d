use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, HtmlAnchorElement, Location};

/// Cancels clicks on links that point at the page already shown.
pub fn install(document: &Document, location: Location) -> Result<(), JsValue> {
    let links = document.query_selector_all("a[href]")?;
    let handler = Closure::wrap(Box::new(move |event: Event| {
        let Some(anchor) = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlAnchorElement>().ok())
        else {
            return;
        };
        if location.href().map_or(false, |here| here == anchor.href()) {
            event.prevent_default();
            event.stop_propagation();
        }
    }) as Box<dyn FnMut(Event)>);

    for i in 0..links.length() {
        if let Some(link) = links.item(i) {
            link.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        }
    }
    log::debug!("link guard on {} anchors", links.length());
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}
