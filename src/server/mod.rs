//! HTTP surface: static site plus the workshop API
//!
//! Serves the prebuilt frontend from the site root and maps the page's
//! event handlers onto a thin JSON API. All business logic stays in
//! `core`; a handler takes the lock, calls one operation and shapes the
//! response. The store and mode live in a single shared `AppState`, the
//! one logical owner the engine derives everything from.

use crate::config::GardenConfig;
use crate::core::gate::{AdminGate, AdminTab, GateError, Mode, ModeController};
use crate::core::persistence::{self, ParseError};
use crate::core::radar::{self, CategoryFilter, FilterCriteria, RadarStats, ARSENAL_COLUMNS};
use crate::core::store::ItemStore;
use crate::core::{seed, Certificate, Project, SkillItem, Status};
use anyhow::Context;
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

/// Top-level application state: the item store and the display mode,
/// mutated only through the handlers below
pub struct AppState {
    store: RwLock<ItemStore>,
    controller: RwLock<ModeController>,
    projects: Vec<Project>,
    certificates: Vec<Certificate>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &GardenConfig, items: Vec<SkillItem>) -> Self {
        AppState {
            store: RwLock::new(ItemStore::new(items)),
            controller: RwLock::new(ModeController::new(AdminGate::new(
                config.admin_password.clone(),
            ))),
            projects: seed::default_projects(),
            certificates: seed::default_certificates(),
        }
    }
}

/// API-level failure, mapped onto a status code and a user notice
enum ApiError {
    Gate(GateError),
    Parse(ParseError),
    Internal(String),
}

impl From<GateError> for ApiError {
    fn from(err: GateError) -> Self {
        ApiError::Gate(err)
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::Parse(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, notice) = match self {
            ApiError::Gate(GateError::BadPassword) => {
                (StatusCode::UNAUTHORIZED, GateError::BadPassword.to_string())
            }
            ApiError::Gate(GateError::NotAdmin) => {
                (StatusCode::FORBIDDEN, GateError::NotAdmin.to_string())
            }
            ApiError::Parse(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(Notice { error: notice })).into_response()
    }
}

#[derive(Serialize)]
struct Notice {
    error: String,
}

#[derive(Deserialize)]
struct RadarQuery {
    #[serde(default)]
    q: String,

    category: Option<String>,
}

#[derive(Serialize)]
struct ArsenalGroup {
    title: String,
    items: Vec<SkillItem>,
}

#[derive(Serialize)]
struct RadarView {
    items: Vec<SkillItem>,
    stats: RadarStats,
    arsenal: Vec<ArsenalGroup>,
}

#[derive(Serialize)]
struct BoardColumn {
    status: Status,
    count: usize,
    items: Vec<SkillItem>,
}

#[derive(Serialize)]
struct PortfolioView<'a> {
    projects: &'a [Project],
    certificates: &'a [Certificate],
}

#[derive(Serialize)]
struct ModeView {
    admin: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    tab: Option<AdminTab>,
}

impl From<Mode> for ModeView {
    fn from(mode: Mode) -> Self {
        ModeView {
            admin: mode.is_admin(),
            tab: mode.tab(),
        }
    }
}

#[derive(Deserialize)]
struct LoginRequest {
    password: String,
}

#[derive(Deserialize)]
struct TabRequest {
    tab: AdminTab,
}

/// Build the criteria for the current request. An unknown category
/// selector matches nothing, mirroring the selector only ever being fed
/// from the rendered option list.
fn criteria_for(admin: bool, query: &RadarQuery) -> Option<FilterCriteria> {
    let category = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw.parse::<CategoryFilter>().ok()?,
    };

    Some(FilterCriteria {
        admin,
        query: query.q.clone(),
        category,
    })
}

fn empty_radar_view() -> RadarView {
    RadarView {
        items: Vec::new(),
        stats: RadarStats::default(),
        arsenal: Vec::new(),
    }
}

async fn radar_view(
    State(state): State<SharedState>,
    Query(query): Query<RadarQuery>,
) -> Json<RadarView> {
    let admin = state.controller.read().is_admin();

    let Some(criteria) = criteria_for(admin, &query) else {
        return Json(empty_radar_view());
    };

    let visible = radar::visible_items(state.store.read().items(), &criteria);
    let stats = radar::radar_stats(&visible);

    let arsenal = ARSENAL_COLUMNS
        .iter()
        .map(|(title, categories)| ArsenalGroup {
            title: title.to_string(),
            items: radar::active_in_categories(&visible, categories),
        })
        .filter(|group| !group.items.is_empty())
        .collect();

    Json(RadarView {
        items: visible,
        stats,
        arsenal,
    })
}

async fn board_view(
    State(state): State<SharedState>,
    Query(query): Query<RadarQuery>,
) -> Result<Json<Vec<BoardColumn>>, ApiError> {
    require_admin(&state)?;

    let Some(criteria) = criteria_for(true, &query) else {
        return Ok(Json(Vec::new()));
    };

    let visible = radar::visible_items(state.store.read().items(), &criteria);
    let counts = radar::status_counts(&visible);

    let columns = Status::COLUMNS
        .iter()
        .map(|status| BoardColumn {
            status: *status,
            count: counts.of(*status),
            items: radar::by_status(&visible, *status),
        })
        .collect();

    Ok(Json(columns))
}

async fn portfolio_view(State(state): State<SharedState>) -> Response {
    Json(PortfolioView {
        projects: &state.projects,
        certificates: &state.certificates,
    })
    .into_response()
}

async fn mode_view(State(state): State<SharedState>) -> Json<ModeView> {
    Json(state.controller.read().mode().into())
}

async fn login(
    State(state): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ModeView>, ApiError> {
    let mut controller = state.controller.write();
    controller.login(&request.password)?;
    Ok(Json(controller.mode().into()))
}

async fn logout(State(state): State<SharedState>) -> Json<ModeView> {
    let mut controller = state.controller.write();
    controller.logout();
    Json(controller.mode().into())
}

async fn switch_tab(
    State(state): State<SharedState>,
    Json(request): Json<TabRequest>,
) -> Result<Json<ModeView>, ApiError> {
    let mut controller = state.controller.write();
    controller.switch_tab(request.tab)?;
    Ok(Json(controller.mode().into()))
}

async fn toggle_visibility(
    State(state): State<SharedState>,
    UrlPath(id): UrlPath<String>,
) -> Result<StatusCode, ApiError> {
    require_admin(&state)?;

    state.store.write().toggle(&id);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
struct ReplaceResult {
    loaded: usize,
}

async fn replace_items(
    State(state): State<SharedState>,
    body: String,
) -> Result<Json<ReplaceResult>, ApiError> {
    require_admin(&state)?;

    let loaded = state.store.write().replace_from_document(&body)?;
    Ok(Json(ReplaceResult { loaded }))
}

async fn export_document(State(state): State<SharedState>) -> Result<Response, ApiError> {
    require_admin(&state)?;

    let snapshot = state.store.read().snapshot();
    let document =
        persistence::to_document(&snapshot).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"data.json\"",
            ),
        ],
        document,
    )
        .into_response())
}

fn require_admin(state: &AppState) -> Result<(), ApiError> {
    if state.controller.read().is_admin() {
        Ok(())
    } else {
        Err(GateError::NotAdmin.into())
    }
}

/// Assemble the router: the JSON API plus the static site as fallback
pub fn router(state: SharedState, site_root: &Path) -> Router {
    Router::new()
        .route("/api/radar", get(radar_view))
        .route("/api/board", get(board_view))
        .route("/api/portfolio", get(portfolio_view))
        .route("/api/mode", get(mode_view))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/mode/tab", post(switch_tab))
        .route("/api/items/{id}/visibility", post(toggle_visibility))
        .route("/api/items", put(replace_items))
        .route("/api/export", get(export_document))
        .fallback_service(ServeDir::new(site_root))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until ctrl-c / SIGTERM
pub async fn run(
    config: &GardenConfig,
    site_root: &Path,
    items: Vec<SkillItem>,
    bind: &str,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config, items));
    let app = router(state, site_root);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding to {bind}"))?;

    info!("Serving garden on http://{bind}");
    info!("Static site root: {}", site_root.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited")?;

    info!("Server stopped");
    Ok(())
}

/// Completes when the process should shut down (ctrl-c or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down...");
}
