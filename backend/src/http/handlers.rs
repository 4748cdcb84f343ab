//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Table listings fail with an [`AppError`]; the command and rule
//! endpoints always answer with notices.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use log::warn;

use super::dto::{
    CommandReport, CommandRequest, ConflictReport, DashboardData, DroneListResponse,
    HealthResponse, MissionListResponse, PilotListResponse, ReassignmentReport,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the backing store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository,
    }))
}

// =============================================================================
// Tables
// =============================================================================

/// GET /v1/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardData> {
    let data = db_services::load_dashboard(state.repository.as_ref()).await?;
    Ok(Json(data))
}

/// GET /v1/pilots
pub async fn list_pilots(State(state): State<AppState>) -> HandlerResult<PilotListResponse> {
    let pilots = db_services::load_pilots(state.repository.as_ref()).await?;
    Ok(Json(pilots.into()))
}

/// GET /v1/drones
pub async fn list_drones(State(state): State<AppState>) -> HandlerResult<DroneListResponse> {
    let drones = db_services::load_drones(state.repository.as_ref()).await?;
    Ok(Json(drones.into()))
}

/// GET /v1/missions
pub async fn list_missions(State(state): State<AppState>) -> HandlerResult<MissionListResponse> {
    let missions = db_services::load_missions(state.repository.as_ref()).await?;
    Ok(Json(missions.into()))
}

// =============================================================================
// Commands and rules
// =============================================================================

/// POST /v1/commands
///
/// Interpret a free-text operator command.
pub async fn submit_command(
    State(state): State<AppState>,
    request: Result<Json<CommandRequest>, JsonRejection>,
) -> HandlerResult<CommandReport> {
    let Json(request) = request?;
    let report = services::interpret(state.repository.as_ref(), &request.command).await;
    Ok(Json(report))
}

/// POST /v1/conflicts/check
pub async fn check_conflicts(State(state): State<AppState>) -> HandlerResult<ConflictReport> {
    let report = match services::check_conflicts(state.repository.as_ref()).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Conflict check could not load tables: {}", e);
            ConflictReport::load_failed(&e)
        }
    };
    Ok(Json(report))
}

/// POST /v1/reassignments/urgent
pub async fn urgent_reassignment(
    State(state): State<AppState>,
) -> HandlerResult<ReassignmentReport> {
    let report = match services::suggest_reassignments(state.repository.as_ref()).await {
        Ok(report) => report,
        Err(e) => {
            warn!("Urgent reassignment could not load tables: {}", e);
            ReassignmentReport::load_failed(&e)
        }
    };
    Ok(Json(report))
}
