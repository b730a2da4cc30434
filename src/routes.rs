use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse, Responder};

use crate::error::PredictError;
use crate::inference::{ClassPredictor, CLASS_LABELS, FEATURE_COUNT};
use crate::models::{PredictRequest, PredictResponse};

/// Read-only application state: the model handle is written once before the
/// server starts and never mutated afterwards. `None` means the startup load
/// failed and every prediction is rejected until restart.
pub struct AppState {
    pub model: Option<Arc<dyn ClassPredictor>>,
}

const INDEX_HTML: &str = include_str!("../static/index.html");

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

#[post("/predict")]
pub async fn predict(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, PredictError> {
    // Checked before the body is even parsed, so an unset model answers 503
    // no matter what the client sent.
    let model = state.model.as_deref().ok_or(PredictError::Unavailable)?;

    let request: PredictRequest =
        serde_json::from_slice(&body).map_err(|_| PredictError::InvalidInput)?;

    let features: [f32; FEATURE_COUNT] = request
        .features
        .try_into()
        .map_err(|_| PredictError::InvalidInput)?;

    let class_index = model
        .predict_class(&features)
        .map_err(|e| PredictError::Inference(e.to_string()))?;

    let label = CLASS_LABELS
        .get(class_index)
        .ok_or_else(|| {
            PredictError::Inference(format!("class index {class_index} outside label table"))
        })?;

    Ok(HttpResponse::Ok().json(PredictResponse::new(class_index, label)))
}
