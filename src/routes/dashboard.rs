use actix_web::{web, HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{DashboardState, DashboardView, HealthResponse, ScoreScale};
use crate::services::DashboardLoader;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<DashboardLoader>,
    pub score_scale: ScoreScale,
}

type QueryParams = web::Query<HashMap<String, String>>;

/// Configure all dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/dashboard", web::get().to(get_dashboard))
        .route("/dashboard/view", web::get().to(get_dashboard_view));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cached_dashboards: state.loader.entry_count(),
    })
}

/// Resolved dashboard data
///
/// GET /api/v1/dashboard?name=Jane&key_skills=Go,Rust&match1_score=90
///
/// Every parameter is optional; missing or empty ones use the built-in dashboard.
async fn get_dashboard(state: web::Data<AppState>, query: QueryParams) -> impl Responder {
    let data = state.loader.load(&*query).await;

    tracing::debug!("Resolved dashboard for {} ({} params)", data.member.name, query.len());

    HttpResponse::Ok().json(DashboardState::ready(&*data))
}

/// Card-ready dashboard for rendering clients
///
/// GET /api/v1/dashboard/view?...
async fn get_dashboard_view(state: web::Data<AppState>, query: QueryParams) -> impl Responder {
    let data = state.loader.load(&*query).await;
    let view = DashboardView::build(&data, state.score_scale);

    HttpResponse::Ok().json(DashboardState::ready(view))
}
