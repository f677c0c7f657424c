use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::net::TcpListener;

use crate::catalog::{self, MoleculeRecord};
use crate::controller::Controller;
use crate::error::{Error, Result};
use crate::input::Action;
use crate::page::INDEX_HTML;
use crate::render::Snapshot;
use crate::viewer::ViewerCommand;

static MODEL_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+\.glb$").expect("model file pattern"));

#[derive(Clone)]
pub struct AppState {
    controller: Arc<Mutex<Controller>>,
    models_dir: Arc<PathBuf>,
    sessions: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(models_dir: PathBuf) -> Self {
        AppState {
            controller: Arc::new(Mutex::new(Controller::new())),
            models_dir: Arc::new(models_dir),
            sessions: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Page sessions started so far. Each one replaced the shared controller.
    pub fn sessions(&self) -> u64 {
        self.sessions.load(Ordering::Relaxed)
    }

    fn controller(&self) -> MutexGuard<'_, Controller> {
        self.controller.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Serialize)]
struct ActionResponse {
    snapshot: Snapshot,
    commands: Vec<ViewerCommand>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/state", get(snapshot))
        .route("/api/action", post(action))
        .route("/api/molecules", get(molecules))
        .route("/models/:file", get(model))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    *state.controller() = Controller::new();
    let session = state.sessions.fetch_add(1, Ordering::Relaxed) + 1;
    if session > 1 {
        info!("page session #{session} started, state of session #{} discarded", session - 1);
    } else {
        info!("page session #{session} started");
    }
    Html(INDEX_HTML)
}

async fn snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.controller().snapshot())
}

async fn action(
    State(state): State<AppState>,
    Json(action): Json<Action>,
) -> Result<Json<ActionResponse>> {
    let mut controller = state.controller();
    let commands = controller.dispatch(action).map_err(|e| {
        warn!("rejected action: {e}");
        e
    })?;
    Ok(Json(ActionResponse {
        snapshot: controller.snapshot(),
        commands,
    }))
}

async fn molecules() -> Json<Vec<&'static MoleculeRecord>> {
    Json(catalog::records().collect())
}

async fn model(State(state): State<AppState>, Path(file): Path<String>) -> Result<impl IntoResponse> {
    if !MODEL_FILE.is_match(&file) {
        warn!("refusing model path {file:?}");
        return Err(Error::InvalidModelName(file));
    }
    let path = state.models_dir.join(&file);
    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ModelNotFound(file.clone()),
        _ => Error::Io(e),
    })?;
    Ok(([(header::CONTENT_TYPE, "model/gltf-binary")], bytes))
}
