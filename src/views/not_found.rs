// ============================================================================
// NOT FOUND VIEW - Fallback para rutas sin coincidencia
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::services::ApiClient;

/// Renderizar vista 404
pub fn render_not_found(root: &Element, _api: &ApiClient) -> Result<(), JsValue> {
    let container = ElementBuilder::new("div")?.class("not-found").build();

    let title = ElementBuilder::new("h1")?.text("404").build();

    let message = ElementBuilder::new("p")?
        .text("The page you are looking for does not exist.")
        .build();

    let link = ElementBuilder::new("a")?
        .attr("href", "/")?
        .text("Back to home")
        .build();

    on_click(&link, move |e| {
        // Navegación interna, sin recargar la página
        e.prevent_default();
        crate::navigate("/");
    })?;

    append_child(&container, &title)?;
    append_child(&container, &message)?;
    append_child(&container, &link)?;
    append_child(root, &container)?;
    Ok(())
}
