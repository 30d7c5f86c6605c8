// ============================================================================
// ROUTER - Routing cliente en modo history
// ============================================================================
// Tabla estática de rutas {path, name, view, title}. Coincidencia exacta
// primero, comodín "*" como fallback. Tras cada navegación el título del
// documento se actualiza con un tick de retraso: la vista nueva debe estar
// montada antes de tocar document.title.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom;
use crate::services::ApiClient;

/// Path comodín: captura cualquier ruta sin coincidencia exacta
pub const WILDCARD: &str = "*";

pub type ViewFn = fn(&Element, &ApiClient) -> Result<(), JsValue>;

/// Entrada estática de la tabla de rutas
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewFn,
    pub title: &'static str,
}

pub struct Router {
    routes: Vec<RouteDescriptor>,
    fallback: usize,
    base: String,
}

impl Router {
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, String> {
        Self::with_base(routes, "")
    }

    /// Crear router con un prefijo de ruta (app servida fuera de la raíz).
    /// La tabla debe incluir la entrada comodín: es lo que garantiza que
    /// toda ruta resuelve a una vista.
    pub fn with_base(routes: Vec<RouteDescriptor>, base: &str) -> Result<Self, String> {
        let fallback = routes
            .iter()
            .position(|route| route.path == WILDCARD)
            .ok_or_else(|| "Route table needs a wildcard fallback".to_string())?;

        Ok(Self {
            routes,
            fallback,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Resolver un path a su descriptor: exacto primero, comodín después
    pub fn match_path(&self, path: &str) -> &RouteDescriptor {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .unwrap_or(&self.routes[self.fallback])
    }

    /// Path actual del navegador, sin el prefijo base
    pub fn current_path(&self) -> Result<String, JsValue> {
        let window = dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let pathname = window.location().pathname()?;

        let path = pathname
            .strip_prefix(self.base.as_str())
            .unwrap_or(&pathname);

        if path.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(path.to_string())
        }
    }

    /// Empujar una entrada al historial del navegador (sin renderizar)
    pub fn push(&self, path: &str) -> Result<(), JsValue> {
        let window = dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let url = format!("{}{}", self.base, path);

        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&url))?;

        Ok(())
    }

    /// Programar la actualización de document.title para el siguiente tick.
    /// Timeout(0) encola el callback detrás del pase de render actual, así
    /// el título nunca se adelanta al montaje de la vista.
    pub fn schedule_title(&self, route: &RouteDescriptor) {
        let title = route.title;

        Timeout::new(0, move || {
            if let Some(document) = dom::document() {
                document.set_title(title);
            }
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_view(_root: &Element, _api: &ApiClient) -> Result<(), JsValue> {
        Ok(())
    }

    fn test_routes() -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor {
                path: "/",
                name: "Home",
                view: noop_view,
                title: "Synonyms Web",
            },
            RouteDescriptor {
                path: WILDCARD,
                name: "404",
                view: noop_view,
                title: "Ooops...",
            },
        ]
    }

    #[test]
    fn test_home_matches_exactly() {
        let router = Router::new(test_routes()).unwrap();
        let route = router.match_path("/");
        assert_eq!(route.name, "Home");
        assert_eq!(route.title, "Synonyms Web");
    }

    #[test]
    fn test_unknown_path_falls_back_to_wildcard() {
        let router = Router::new(test_routes()).unwrap();
        for path in ["/xyz", "/synonyms/extra", "/home", ""] {
            let route = router.match_path(path);
            assert_eq!(route.name, "404");
            assert_eq!(route.title, "Ooops...");
        }
    }

    #[test]
    fn test_exact_match_wins_over_wildcard_order() {
        // El comodín puede ir en cualquier posición de la tabla
        let routes = vec![
            RouteDescriptor {
                path: WILDCARD,
                name: "404",
                view: noop_view,
                title: "Ooops...",
            },
            RouteDescriptor {
                path: "/",
                name: "Home",
                view: noop_view,
                title: "Synonyms Web",
            },
        ];
        let router = Router::new(routes).unwrap();
        assert_eq!(router.match_path("/").name, "Home");
        assert_eq!(router.match_path("/nope").name, "404");
    }

    #[test]
    fn test_router_rejects_table_without_wildcard() {
        let routes = vec![RouteDescriptor {
            path: "/",
            name: "Home",
            view: noop_view,
            title: "Synonyms Web",
        }];
        assert!(Router::new(routes).is_err());
    }

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let router = Router::with_base(test_routes(), "/app/").unwrap();
        assert_eq!(router.base, "/app");
    }
}
