// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Recibe el router y el cliente API ya construidos (inyección explícita
// desde lib.rs, sin registro global de framework) y es dueña del elemento
// raíz #app.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{get_element_by_id, set_inner_html};
use crate::router::Router;
use crate::services::ApiClient;

/// Aplicación principal
pub struct App {
    router: Router,
    api: ApiClient,
    root: Element,
}

impl App {
    pub fn new(router: Router, api: ApiClient) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self { router, api, root })
    }

    /// Resolver la ruta actual, montar su vista y programar el título.
    /// Un fallo de la vista no altera el historial del navegador.
    pub fn render(&self) -> Result<(), JsValue> {
        let path = self.router.current_path()?;
        let route = self.router.match_path(&path);

        log::info!("🧭 [ROUTER] {} → {}", path, route.name);

        set_inner_html(&self.root, "");
        (route.view)(&self.root, &self.api)?;

        // El título se actualiza después del montaje de la vista
        self.router.schedule_title(route);
        Ok(())
    }

    /// Empujar una ruta al historial y renderizarla
    pub fn navigate(&self, path: &str) -> Result<(), JsValue> {
        self.router.push(path)?;
        self.render()
    }
}
