use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const GOOGLE_TRANSLATE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Translates text ahead of synthesis via the Google Translate v2 API
pub struct TranslationService {
    http_client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_language: Option<String>,
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    source: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateApiResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
    #[serde(rename = "detectedSourceLanguage")]
    detected_source_language: Option<String>,
}

impl TranslationService {
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> AppResult<TranslationResult> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Text is required".to_string()));
        }
        if target_language.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Target language is required".to_string(),
            ));
        }

        let source = source_language.unwrap_or("auto");

        tracing::info!(
            target = target_language,
            source = source,
            text_length = text.len(),
            "Translating text"
        );

        let response = self
            .http_client
            .post(format!("{}?key={}", GOOGLE_TRANSLATE_URL, self.api_key))
            .json(&TranslateBody {
                q: text,
                target: target_language,
                source,
                format: "text",
            })
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("translation request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "Google Translate returned an error"
            );
            return Err(AppError::ExternalService(format!(
                "translation failed: {} {}",
                status, error_text
            )));
        }

        let body: TranslateApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("invalid translation response: {}", e)))?;

        let translation = body
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalService("no translation returned".to_string()))?;

        tracing::info!(
            original_length = text.len(),
            translated_length = translation.translated_text.len(),
            detected_language = ?translation.detected_source_language,
            "Translation successful"
        );

        Ok(TranslationResult {
            translated_text: translation.translated_text,
            detected_language: translation.detected_source_language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_response_parsing() {
        let json = r#"{
            "data": {
                "translations": [
                    {"translatedText": "Hola mundo", "detectedSourceLanguage": "en"}
                ]
            }
        }"#;
        let parsed: TranslateApiResponse = serde_json::from_str(json).unwrap();
        let translation = &parsed.data.translations[0];
        assert_eq!(translation.translated_text, "Hola mundo");
        assert_eq!(translation.detected_source_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_translate_response_without_detected_language() {
        let json = r#"{"data": {"translations": [{"translatedText": "Bonjour"}]}}"#;
        let parsed: TranslateApiResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.data.translations[0].detected_source_language.is_none());
    }
}
