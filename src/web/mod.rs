//! JSON API surface over the simulation pipeline.
//!
//! The routes mirror how a front end drives the simulator: fetch catalog
//! candidates, post impact parameters, render the returned report. All
//! simulation work is synchronous CPU inside the handler; the server holds
//! no state between requests.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::catalog;
use crate::enrich::ExternalEstimates;
use crate::geo::GeoPoint;
use crate::physics::DENSITY_ROCK;
use crate::simulation::{self, ImpactParameters, ImpactReport, SimulationOptions};

pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
}

/// Request body / query parameters for a simulation run.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulateRequest {
    pub lat: f64,
    pub lon: f64,
    pub diameter_m: f64,
    pub velocity_kms: f64,
    pub angle_deg: Option<f64>,
    pub density_kgm3: Option<f64>,
    pub ocean: Option<bool>,
    /// Optional enrichment payload from an external analysis service.
    pub external: Option<ExternalEstimates>,
}

#[derive(Serialize)]
struct SimulateResponse {
    success: bool,
    timestamp: String,
    results: ImpactReport,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

pub async fn run(config: WebServerConfig) -> Result<()> {
    let router = Router::new()
        .route("/api/health", get(health))
        .route("/api/catalog", get(catalog_entries))
        .route("/api/simulate", get(simulate_get).post(simulate_post));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("invalid address");

    println!(
        "[web] impact simulator API live at http://{}:{} (Ctrl+C to stop)",
        config.host, config.port
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("[web] shutting down");
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn catalog_entries() -> Json<Vec<catalog::Asteroid>> {
    Json(catalog::sample_catalog())
}

fn simulate(request: SimulateRequest) -> Response {
    let params = ImpactParameters {
        diameter_m: request.diameter_m,
        density_kgm3: request.density_kgm3.unwrap_or(DENSITY_ROCK),
        velocity_kms: request.velocity_kms,
        angle_deg: request.angle_deg.unwrap_or(45.0),
    };
    let location = GeoPoint::new(request.lat, request.lon);
    let options = SimulationOptions {
        ocean_impact: request.ocean.unwrap_or(true),
        ..SimulationOptions::default()
    };

    match simulation::run(params, location, options, request.external.as_ref()) {
        Ok(results) => Json(SimulateResponse {
            success: true,
            timestamp: chrono::Utc::now().to_rfc3339(),
            results,
        })
        .into_response(),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn simulate_post(Json(request): Json<SimulateRequest>) -> Response {
    simulate(request)
}

async fn simulate_get(Query(request): Query<SimulateRequest>) -> Response {
    simulate(request)
}
