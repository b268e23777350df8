use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::PlanConfig;
use crate::models::MenuPlan;
use crate::planner::{MAX_COMBOS_PER_DAY, MAX_NUM_DAYS, generate_seeded};
use crate::server::error::ApiError;
use crate::store::load_menu_checked;

/// Shared, read-only settings. Per-request planner state is never stored here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub menu_path: Arc<PathBuf>,
    pub config: Arc<PlanConfig>,
}

impl AppState {
    pub fn new(menu_path: impl Into<PathBuf>, config: PlanConfig) -> Self {
        Self {
            menu_path: Arc::new(menu_path.into()),
            config: Arc::new(config),
        }
    }
}

/// Optional overrides for `/generate-menu`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    pub seed: Option<u64>,
    pub days: Option<usize>,
    pub combos: Option<usize>,
}

impl GenerateParams {
    fn apply(&self, base: &PlanConfig) -> Result<PlanConfig, ApiError> {
        let mut config = base.clone();

        if let Some(days) = self.days {
            if days == 0 || days > MAX_NUM_DAYS {
                return Err(ApiError::BadRequest(format!(
                    "days must be between 1 and {}",
                    MAX_NUM_DAYS
                )));
            }
            config.num_days = days;
        }

        if let Some(combos) = self.combos {
            if combos == 0 || combos > MAX_COMBOS_PER_DAY {
                return Err(ApiError::BadRequest(format!(
                    "combos must be between 1 and {}",
                    MAX_COMBOS_PER_DAY
                )));
            }
            config.combos_per_day = combos;
        }

        Ok(config)
    }
}

/// GET|POST /generate-menu - Generate a fresh multi-day plan.
///
/// The catalog is reloaded for every request and the synchronous sampler runs
/// on the blocking pool with its own tracker and RNG.
pub async fn generate_menu(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
) -> Result<Json<MenuPlan>, ApiError> {
    let config = params.apply(&state.config)?;
    let menu_path = Arc::clone(&state.menu_path);
    let seed = params.seed;

    let plan = tokio::task::spawn_blocking(move || {
        let items = load_menu_checked(menu_path.as_path())?;
        generate_seeded(&items, &config, seed)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(plan))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Build the router: plan API, health check, and the static page as fallback.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/generate-menu", get(generate_menu).post(generate_menu))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
