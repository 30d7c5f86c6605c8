// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO interpreta el cuerpo de las respuestas, solo hace requests HTTP contra
// el endpoint /synonyms y devuelve la respuesta cruda al llamador.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::config::CONFIG;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.server_uri)
    }

    /// Crear cliente contra una URI base explícita
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn synonyms_url(&self) -> String {
        format!("{}/synonyms", self.base_url)
    }

    /// Consultar los sinónimos de una palabra
    pub async fn get_synonyms(&self, word: &str) -> Result<Response, String> {
        log::info!("🔍 Consultando sinónimos de: {}", word);

        let response = Request::get(&self.synonyms_url())
            .query([("word", word)])
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::check_status(response)
    }

    /// Registrar un grupo de palabras mutuamente sinónimas.
    /// La lista se envía tal cual, sin deduplicar ni filtrar entradas vacías:
    /// la validación es responsabilidad del servicio remoto.
    pub async fn add_synonyms(&self, words: &[String]) -> Result<Response, String> {
        let request = AddSynonymsRequest {
            words: words.to_vec(),
        };

        log::info!("📝 Registrando grupo de {} sinónimos", words.len());

        let response = Request::post(&self.synonyms_url())
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::check_status(response)
    }

    /// Registrar un enlace de sinonimia entre exactamente dos palabras
    pub async fn add_two_synonyms(&self, word1: &str, word2: &str) -> Result<Response, String> {
        let request = AddTwoSynonymsRequest {
            word1: word1.to_string(),
            word2: word2.to_string(),
        };

        log::info!("🔗 Enlazando sinónimos: {} ↔ {}", word1, word2);

        let response = Request::post(&self.synonyms_url())
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::check_status(response)
    }

    // Las respuestas no-2xx se propagan como error, igual que los fallos de red
    fn check_status(response: Response) -> Result<Response, String> {
        if response.ok() {
            Ok(response)
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }
}

#[derive(Serialize)]
struct AddSynonymsRequest {
    words: Vec<String>,
}

#[derive(Serialize)]
struct AddTwoSynonymsRequest {
    word1: String,
    word2: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_synonyms_url() {
        let api = ApiClient::with_base_url("http://localhost:3000");
        assert_eq!(api.synonyms_url(), "http://localhost:3000/synonyms");
    }

    #[test]
    fn test_synonyms_url_trailing_slash() {
        let api = ApiClient::with_base_url("http://localhost:3000/");
        assert_eq!(api.synonyms_url(), "http://localhost:3000/synonyms");
    }

    #[test]
    fn test_add_synonyms_body_shape() {
        let request = AddSynonymsRequest {
            words: vec!["clean".to_string(), "tidy".to_string(), "neat".to_string()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "words": ["clean", "tidy", "neat"] }));
    }

    #[test]
    fn test_add_synonyms_body_passes_empty_and_duplicates() {
        // Sin validación en cliente: entradas vacías y duplicadas viajan tal cual
        let request = AddSynonymsRequest {
            words: vec!["".to_string(), "big".to_string(), "big".to_string()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "words": ["", "big", "big"] }));
    }

    #[test]
    fn test_add_two_synonyms_body_shape() {
        let request = AddTwoSynonymsRequest {
            word1: "fast".to_string(),
            word2: "quick".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "word1": "fast", "word2": "quick" }));
    }
}
