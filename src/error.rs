use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorBody;

/// Request-level failure taxonomy. Every variant terminates at the request
/// boundary; none propagate far enough to take the process down.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Model not loaded on server.")]
    Unavailable,

    #[error("Invalid input: features must be a list of 4 numerical values.")]
    InvalidInput,

    #[error("Prediction failed due to server error: {0}")]
    Inference(String),
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            PredictError::InvalidInput => StatusCode::BAD_REQUEST,
            PredictError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_statuses() {
        assert_eq!(
            PredictError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            PredictError::InvalidInput.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PredictError::Inference("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn inference_message_embeds_cause() {
        let message = PredictError::Inference("tensor shape mismatch".into()).to_string();
        assert!(message.contains("server error"));
        assert!(message.contains("tensor shape mismatch"));
    }
}
