// ============================================================================
// HOME VIEW - Búsqueda y registro de sinónimos
// ============================================================================
// Tres secciones: búsqueda por palabra, registro de grupo (lista separada
// por comas) y enlace de par. Cada acción dispara exactamente una request
// vía ApiClient; los errores se muestran en la línea de estado de la
// sección, sin tocar el estado de navegación.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, set_inner_html, set_text_content, ElementBuilder};
use crate::services::ApiClient;

/// Renderizar vista home
pub fn render_home(root: &Element, api: &ApiClient) -> Result<(), JsValue> {
    log::info!("🎬 [HOME] render_home() llamado");

    let container = ElementBuilder::new("div")?.class("home").build();

    let title = ElementBuilder::new("h1")?.text("Synonyms Web").build();
    append_child(&container, &title)?;

    append_child(&container, &build_lookup_section(api)?)?;
    append_child(&container, &build_group_section(api)?)?;
    append_child(&container, &build_pair_section(api)?)?;

    append_child(root, &container)?;
    Ok(())
}

/// Sección de búsqueda: GET /synonyms?word=<palabra>
fn build_lookup_section(api: &ApiClient) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("lookup").build();

    let heading = ElementBuilder::new("h2")?.text("Look up synonyms").build();

    let input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "word")?
        .id("lookup-word")?
        .build();

    let button = ElementBuilder::new("button")?.text("Search").build();

    let results = ElementBuilder::new("ul")?
        .class("results")
        .id("lookup-results")?
        .build();

    let status = ElementBuilder::new("p")?
        .class("status")
        .id("lookup-status")?
        .build();

    {
        let api = api.clone();
        let input = input.clone();
        let results = results.clone();
        let status = status.clone();

        on_click(&button, move |_e| {
            let word = input_value(&input);
            if word.is_empty() {
                return;
            }

            let api = api.clone();
            let results = results.clone();
            let status = status.clone();

            spawn_local(async move {
                set_text_content(&status, "");

                match api.get_synonyms(&word).await {
                    Ok(response) => {
                        // El wrapper devuelve la respuesta cruda; la vista decide
                        // el formato (array JSON de palabras)
                        match response.json::<Vec<String>>().await {
                            Ok(words) => {
                                log::info!("✅ [HOME] {} sinónimos para: {}", words.len(), word);
                                if let Err(e) = fill_results(&results, &words) {
                                    log::error!("❌ [HOME] Error renderizando resultados: {:?}", e);
                                }
                            }
                            Err(e) => show_error(&status, &format!("Parse error: {}", e)),
                        }
                    }
                    Err(e) => show_error(&status, &e),
                }
            });
        })?;
    }

    append_child(&section, &heading)?;
    append_child(&section, &input)?;
    append_child(&section, &button)?;
    append_child(&section, &results)?;
    append_child(&section, &status)?;
    Ok(section)
}

/// Sección de grupo: POST /synonyms con { words }
fn build_group_section(api: &ApiClient) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("add-group").build();

    let heading = ElementBuilder::new("h2")?.text("Add a synonym group").build();

    let input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "comma-separated words")?
        .id("group-words")?
        .build();

    let button = ElementBuilder::new("button")?.text("Add group").build();

    let status = ElementBuilder::new("p")?
        .class("status")
        .id("group-status")?
        .build();

    {
        let api = api.clone();
        let input = input.clone();
        let status = status.clone();

        on_click(&button, move |_e| {
            let raw = input_value(&input);
            if raw.is_empty() {
                return;
            }

            // Sin validación: entradas vacías o duplicadas viajan tal cual
            let words: Vec<String> = raw.split(',').map(|w| w.trim().to_string()).collect();

            let api = api.clone();
            let status = status.clone();

            spawn_local(async move {
                set_text_content(&status, "");

                match api.add_synonyms(&words).await {
                    Ok(_) => set_text_content(&status, "Synonym group saved"),
                    Err(e) => show_error(&status, &e),
                }
            });
        })?;
    }

    append_child(&section, &heading)?;
    append_child(&section, &input)?;
    append_child(&section, &button)?;
    append_child(&section, &status)?;
    Ok(section)
}

/// Sección de par: POST /synonyms con { word1, word2 }
fn build_pair_section(api: &ApiClient) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("add-pair").build();

    let heading = ElementBuilder::new("h2")?.text("Link two synonyms").build();

    let word1 = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "first word")?
        .id("pair-word1")?
        .build();

    let word2 = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("placeholder", "second word")?
        .id("pair-word2")?
        .build();

    let button = ElementBuilder::new("button")?.text("Link pair").build();

    let status = ElementBuilder::new("p")?
        .class("status")
        .id("pair-status")?
        .build();

    {
        let api = api.clone();
        let word1 = word1.clone();
        let word2 = word2.clone();
        let status = status.clone();

        on_click(&button, move |_e| {
            let first = input_value(&word1);
            let second = input_value(&word2);
            if first.is_empty() || second.is_empty() {
                return;
            }

            let api = api.clone();
            let status = status.clone();

            spawn_local(async move {
                set_text_content(&status, "");

                match api.add_two_synonyms(&first, &second).await {
                    Ok(_) => set_text_content(&status, "Synonym pair linked"),
                    Err(e) => show_error(&status, &e),
                }
            });
        })?;
    }

    append_child(&section, &heading)?;
    append_child(&section, &word1)?;
    append_child(&section, &word2)?;
    append_child(&section, &button)?;
    append_child(&section, &status)?;
    Ok(section)
}

fn input_value(input: &Element) -> String {
    input
        .dyn_ref::<HtmlInputElement>()
        .map(|i| i.value().trim().to_string())
        .unwrap_or_default()
}

fn show_error(status: &Element, message: &str) {
    log::error!("❌ [HOME] {}", message);
    set_text_content(status, message);
}

fn fill_results(list: &Element, words: &[String]) -> Result<(), JsValue> {
    set_inner_html(list, "");

    if words.is_empty() {
        let item = ElementBuilder::new("li")?
            .class("empty")
            .text("No synonyms found")
            .build();
        return append_child(list, &item);
    }

    for word in words {
        let item = ElementBuilder::new("li")?.text(word).build();
        append_child(list, &item)?;
    }
    Ok(())
}
