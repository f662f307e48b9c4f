mod errors;
mod logging;
mod initialization;
mod config;
mod handlers;
mod manager_forecast;
mod temperature;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::handlers::{health, query_config, weather_forecast};
use crate::initialization::config;
use crate::manager_forecast::Forecaster;

struct AppState {
    forecaster: Forecaster,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let state = web::Data::new(AppState { forecaster: Forecaster::new(config.forecast)? });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(query_config())
            .service(weather_forecast)
            .service(health)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
