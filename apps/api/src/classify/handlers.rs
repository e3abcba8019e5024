use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::predictor::predict_category;
use crate::errors::AppError;
use crate::extract;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    /// Echo the extracted raw text back in the response.
    #[serde(default)]
    pub include_text: bool,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub category: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

/// POST /api/v1/predict
///
/// One synchronous round trip: take the first file field of the multipart
/// body, extract its text, classify it. Stage errors propagate here and
/// become user-facing responses via `AppError::into_response`.
pub async fn handle_predict(
    State(state): State<AppState>,
    Query(params): Query<PredictQuery>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue; // not a file field
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let raw_text = extract::extract(&file_name, &data)?;
        let category = predict_category(&state.models, &raw_text)?;

        info!(
            file_name = %file_name,
            category = %category,
            bytes = data.len(),
            "Resume classified"
        );

        return Ok(Json(PredictResponse {
            category,
            file_name,
            raw_text: params.include_text.then_some(raw_text),
        }));
    }

    Err(AppError::Validation(
        "No file uploaded. Attach a PDF, DOCX, or TXT file.".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_is_omitted_from_json_when_not_requested() {
        let response = PredictResponse {
            category: "Testing".to_string(),
            file_name: "resume.txt".to_string(),
            raw_text: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("raw_text"));
    }

    #[test]
    fn test_raw_text_is_present_when_requested() {
        let response = PredictResponse {
            category: "Testing".to_string(),
            file_name: "resume.txt".to_string(),
            raw_text: Some("manual QA engineer".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("manual QA engineer"));
    }

    #[test]
    fn test_include_text_defaults_to_false() {
        let params: PredictQuery = serde_json::from_str("{}").unwrap();
        assert!(!params.include_text);
    }
}
