use actix_web::{get, web, Error, HttpRequest, HttpResponse, Responder};
use actix_web::error::{InternalError, QueryPayloadError};
use chrono::Local;
use log::{error, info};
use serde::{Deserialize, Serialize};
use crate::AppState;
use crate::manager_forecast::errors::ForecastError;

#[derive(Deserialize, Debug)]
struct ForecastParams {
    days: Option<usize>,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// Query extractor configuration that logs malformed query strings before rejecting them
///
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(reject_query)
}

fn reject_query(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    error!("rejected forecast request: {}", err);
    let body = format!("invalid query: {}", err);

    InternalError::from_response(err, HttpResponse::BadRequest().body(body)).into()
}

#[get("/weatherforecast")]
async fn weather_forecast(params: web::Query<ForecastParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let days = params.days.unwrap_or(data.forecaster.default_days());

    match data.forecaster.forecast(days, Local::now().date_naive(), &mut rand::thread_rng()) {
        Ok(forecast) => HttpResponse::Ok().json(forecast),
        Err(ForecastError::Days(e)) => {
            error!("rejected forecast request: {}", e);
            HttpResponse::BadRequest().body(e)
        },
        Err(e) => {
            error!("failed to generate forecast: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
