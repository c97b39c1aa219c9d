//! HTTP surface for the worth engine. The browser form POSTs the full
//! input record on every change and renders whatever comes back; the
//! share page GETs its narrative report from the echoed parameters.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use tower_http::cors::CorsLayer;

use crate::country::CountryTable;
use crate::engine::{self, WorthResult};
use crate::inputs::WorkInputs;
use crate::report::{self, ShareQuery, ShareReport};

#[derive(Clone)]
pub struct AppState {
    countries: Arc<RwLock<CountryTable>>,
    countries_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(countries: CountryTable, countries_path: PathBuf) -> Self {
        Self {
            countries: Arc::new(RwLock::new(countries)),
            countries_path: Arc::new(countries_path),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/evaluate", post(evaluate))
        .route("/countries", get(countries))
        .route("/report", get(share_report))
        .route("/debug/ppp", get(debug_ppp))
        .route("/admin/reload-countries", get(admin_reload_countries))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn evaluate(Json(inputs): Json<WorkInputs>) -> Json<WorthResult> {
    counter!("worth_evaluations_total").increment(1);
    let result = engine::evaluate(&inputs);
    tracing::debug!(
        score = result.score,
        tier = ?result.assessment.tier,
        "evaluated work inputs"
    );
    Json(result)
}

#[derive(serde::Serialize)]
struct CountryRow {
    code: String,
    name: String,
    ppp: f64,
}

async fn countries(State(state): State<AppState>) -> Json<Vec<CountryRow>> {
    let table = state.countries.read().expect("country table rwlock poisoned");
    let rows = table
        .countries
        .iter()
        .map(|(code, e)| CountryRow {
            code: code.clone(),
            name: e.name.clone(),
            ppp: e.ppp,
        })
        .collect();
    Json(rows)
}

async fn share_report(Query(q): Query<ShareQuery>) -> Json<ShareReport> {
    counter!("worth_reports_total").increment(1);
    Json(report::build_report(&q))
}

async fn debug_ppp(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> String {
    let code = q.get("country").cloned().unwrap_or_default();
    let ppp = {
        let table = state.countries.read().expect("country table rwlock poisoned");
        table.ppp_for(&code)
    };
    format!("country='{code}' -> ppp={ppp:.2}")
}

async fn admin_reload_countries(State(state): State<AppState>) -> String {
    let fresh = CountryTable::load_from_file(state.countries_path.as_ref());
    match state.countries.write() {
        Ok(mut t) => {
            *t = fresh;
            "reloaded".to_string()
        }
        Err(_) => "failed: lock poisoned".to_string(),
    }
}
