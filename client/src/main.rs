mod config;
mod dom;
mod loader;

use hoops_pool_shared::{PageError, render_standings};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::dom::DomView;

fn main() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        spawn_local(load_standings());
        return;
    }

    let callback = Closure::once(move || {
        spawn_local(load_standings());
    });
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"Failed to register DOMContentLoaded listener".into());
    }
    callback.forget();
}

async fn load_standings() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let view = DomView::new(document);
    let loaded = loader::fetch_standings().await;

    match render_standings(&view, loaded, &config::render_options()) {
        Ok(()) => {}
        Err(PageError::Load(e)) => {
            web_sys::console::error_1(&format!("Error loading standings: {e}").into());
        }
        Err(PageError::Render(e)) => {
            web_sys::console::error_1(&format!("Error rendering standings: {e}").into());
        }
    }
}
