// ============================================================================
// SYNONYMS WEB - Front-end de página única para el servicio de sinónimos
// ============================================================================
// - Views: funciones que renderizan DOM
// - Services: SOLO comunicación API
// - Router: tabla estática de rutas + título por ruta
// - Config: variables de entorno en tiempo de compilación
// ============================================================================

mod app;
mod config;
mod dom;
mod router;
mod services;
mod views;

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::router::{RouteDescriptor, Router, WILDCARD};
use crate::services::ApiClient;

// Instancia de App viva durante todo el proceso; los closures de eventos
// llegan a ella a través de rerender_app() / navigate()
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Tabla de rutas: coincidencia exacta primero, comodín como fallback
fn routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor {
            path: "/",
            name: "Home",
            view: views::render_home,
            title: "Synonyms Web",
        },
        RouteDescriptor {
            path: WILDCARD,
            name: "404",
            view: views::render_not_found,
            title: "Ooops...",
        },
    ]
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(Config::default());
    }

    log::info!("🚀 Synonyms Web - servidor: {}", CONFIG.server_uri);

    // Router y cliente construidos aquí y pasados a la App explícitamente
    let router = Router::with_base(routes(), &CONFIG.base_path)
        .map_err(|e| JsValue::from_str(&e))?;
    let api = ApiClient::new();

    let app = App::new(router, api)?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Back/forward del navegador: re-renderizar sin tocar el historial.
    // Este listener global se registra UNA sola vez en el arranque.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
            rerender_app();
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-renderizar la ruta actual
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}

/// Navegar a una ruta desde las vistas (history mode, sin recarga)
pub fn navigate(path: &str) {
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            if let Err(e) = app.navigate(path) {
                log::error!("❌ Error navegando a {}: {:?}", path, e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
