use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction_index: usize,
    pub predicted_label: String,
    pub timestamp: i64,
}

impl PredictResponse {
    pub fn new(index: usize, label: &str) -> Self {
        PredictResponse {
            success: true,
            prediction_index: index,
            predicted_label: label.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_shape() {
        let value = serde_json::to_value(PredictResponse::new(2, "Virginica")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["prediction_index"], 2);
        assert_eq!(value["predicted_label"], "Virginica");
        assert!(value["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn error_envelope_shape() {
        let value = serde_json::to_value(ErrorBody::new("boom")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
    }
}
