use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header, HeaderMap},
    Json,
};
use std::net::SocketAddr;
use std::sync::Arc;

use super::{
    CategoriesResponse, FlashcardsParams, FlashcardsResponse, HealthResponse, StatsResponse,
    TtsRequest, TtsResponse, VisitEndRequest, VisitEndResponse, VisitStartRequest,
    VisitStartResponse,
};
use crate::api::routes::AppState;
use crate::catalog::CatalogQuery;
use crate::error::AppError;
use crate::visits::now_seconds;

pub async fn list_flashcards(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<FlashcardsResponse> {
    let params = FlashcardsParams::from_pairs(pairs);
    let query = CatalogQuery {
        page: params.page(),
        page_size: params.page_size(),
        q: params.q.unwrap_or_default(),
        category: params.category.unwrap_or_default(),
    };

    Json(FlashcardsResponse {
        success: true,
        page: state.catalog.query(&query),
    })
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        success: true,
        categories: state.catalog.categories(),
    })
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    body: Option<Json<TtsRequest>>,
) -> Result<Json<TtsResponse>, AppError> {
    let text = body
        .and_then(|Json(request)| request.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::MissingField("No text provided".into()))?;

    let file = state.tts.speak(&text).await?;

    Ok(Json(TtsResponse {
        success: true,
        file,
    }))
}

pub async fn visit_start(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Option<Json<VisitStartRequest>>,
) -> Result<Json<VisitStartResponse>, AppError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    let user_agent = request
        .user_agent
        .filter(|ua| !ua.is_empty())
        .or_else(|| {
            headers
                .get(header::USER_AGENT)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_default();

    let session_id = uuid::Uuid::new_v4().to_string();
    let ip = addr.ip().to_string();

    let mut doc = state.visits.load()?;
    doc.start_session(session_id.clone(), ip.clone(), user_agent, now_seconds());
    state.visits.save(&doc)?;

    tracing::info!("Visit started: {} from {}", session_id, ip);

    Ok(Json(VisitStartResponse {
        success: true,
        session_id,
    }))
}

pub async fn visit_end(
    State(state): State<Arc<AppState>>,
    body: Option<Json<VisitEndRequest>>,
) -> Result<Json<VisitEndResponse>, AppError> {
    let session_id = body
        .and_then(|Json(request)| request.session_id)
        .ok_or(AppError::UnknownSession)?;

    let mut doc = state.visits.load()?;
    let duration = doc.end_session(&session_id, now_seconds())?;
    state.visits.save(&doc)?;

    tracing::info!("Visit ended: {} after {:.1}s", session_id, duration);

    Ok(Json(VisitEndResponse {
        success: true,
        duration,
    }))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>, AppError> {
    let doc = state.visits.load()?;

    Ok(Json(StatsResponse {
        success: true,
        stats: doc.stats(),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
