mod error;
mod inference;
mod models;
mod routes;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use inference::{ClassPredictor, IrisClassifier, MODEL_FILE};
use routes::AppState;

const BIND_ADDR: (&str, u16) = ("0.0.0.0", 5000);

/// One load attempt at startup. A failure is latched until restart: the
/// process keeps serving and `/predict` answers 503.
fn load_model() -> Option<Arc<dyn ClassPredictor>> {
    match IrisClassifier::load(MODEL_FILE) {
        Ok(model) => {
            info!("Successfully loaded model from {MODEL_FILE}");
            Some(Arc::new(model))
        }
        Err(e) => {
            error!("Error loading model: {e}");
            error!("The API will not function until the model is correctly saved.");
            None
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let state = web::Data::new(AppState { model: load_model() });

    info!("Serving on http://{}:{}", BIND_ADDR.0, BIND_ADDR.1);
    info!("   GET  /         - classifier form");
    info!("   POST /predict  - prediction API");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .service(routes::index)
            .service(routes::predict)
    })
    .bind(BIND_ADDR)?
    .run()
    .await
}
