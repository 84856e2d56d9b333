//! HTTP handlers for the /api/soil surface.

use axum::extract::{Multipart, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::error::{Result, SoilOpsError};
use crate::models::{AnalysisResult, Location, WeatherSnapshot};
use crate::AppState;

/// Create the soil router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze-image", post(analyze_image))
        .route("/recommend", post(recommend))
        .route("/demo", get(demo))
}

/// Health probe kept compatible with the original front-end.
async fn demo() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "soilType": "Demo Soil",
        "description": "Backend is running.",
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest {
    #[serde(default)]
    soil_label: Option<String>,
    #[serde(default)]
    weather: Option<WeatherSnapshot>,
    #[serde(default)]
    location: Option<Location>,
}

/// Pure engine endpoint: classification is supplied by the caller, no
/// image involved. Total over its input domain, so no error path.
async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<AnalysisResult> {
    let result = state.engine.recommend(
        request.soil_label.as_deref().unwrap_or(""),
        request.weather.as_ref(),
        request.location.as_ref(),
    );
    Json(result)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeImageResponse {
    #[serde(flatten)]
    analysis: AnalysisResult,
    model_confidence: Option<f64>,
}

/// Fields accumulated while walking the multipart form.
#[derive(Default)]
struct UploadForm {
    image: Option<(Option<String>, Vec<u8>)>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
    country: Option<String>,
}

/// Accept a soil photo (field `image`) plus optional geolocation text
/// fields, run it through the external classifier, and return the full
/// weather-adjusted analysis with the model confidence attached.
async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeImageResponse>> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "image" => {
                let file_name = field.file_name().map(ToString::to_string);
                let bytes = field.bytes().await?;
                form.image = Some((file_name, bytes.to_vec()));
            }
            "latitude" => form.latitude = parse_coordinate(&field.text().await?),
            "longitude" => form.longitude = parse_coordinate(&field.text().await?),
            "city" => form.city = Some(field.text().await?),
            "country" => form.country = Some(field.text().await?),
            other => {
                tracing::debug!("Ignoring unexpected multipart field '{}'", other);
            }
        }
    }

    let (file_name, bytes) = form
        .image
        .ok_or_else(|| SoilOpsError::Upload("No file uploaded".to_string()))?;

    let stored_name = stored_filename(file_name.as_deref());
    let image_path = state.config.upload_dir.join(&stored_name);
    tokio::fs::write(&image_path, &bytes).await?;
    tracing::info!("Stored upload at {}", image_path.display());

    let classification = state.classifier.classify(&image_path).await?;

    let location = form.latitude.map(|lat| {
        let mut loc = Location::from_coordinates(lat, form.longitude.unwrap_or(0.0));
        if let Some(city) = form.city {
            loc.city = city;
        }
        if let Some(country) = form.country {
            loc.country = country;
        }
        loc
    });
    let weather = location
        .as_ref()
        .map(|loc| WeatherSnapshot::for_zone(loc.climate));

    let analysis = state.engine.recommend(
        &classification.label,
        weather.as_ref(),
        location.as_ref(),
    );

    Ok(Json(AnalyzeImageResponse {
        analysis,
        model_confidence: classification.confidence,
    }))
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparsable coordinate '{}'", raw);
            None
        }
    }
}

/// Collision-resistant storage name: millisecond timestamp plus a random
/// UUID, keeping the original extension so the classifier sees a familiar
/// file type.
fn stored_filename(original: Option<&str>) -> String {
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    format!(
        "{}-{}{}",
        chrono::Utc::now().timestamp_millis(),
        Uuid::new_v4(),
        extension
    )
}
