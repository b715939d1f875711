use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use crate::{
    error::AppError,
    sauce::{HotSauce, HotSauceChanges, NewHotSauce},
    search::{SauceFilter, SauceQuery},
    state::AppState,
};

pub const LIVENESS_MESSAGE: &str = "Yup, it works!";

pub async fn test_handler() -> impl IntoResponse {
    (StatusCode::OK, LIVENESS_MESSAGE)
}

pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SauceQuery>,
) -> Result<Json<Vec<HotSauce>>, AppError> {
    let filter = SauceFilter::try_from(query)?;
    let sauces = filter.apply(state.repository.find_all().await?);

    debug!("Listing {} sauces for {filter:?}", sauces.len());

    Ok(Json(sauces))
}

pub async fn count_handler(State(state): State<Arc<AppState>>) -> Result<Json<u64>, AppError> {
    Ok(Json(state.repository.count().await?))
}

pub async fn get_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<HotSauce>, AppError> {
    debug!("Fetching sauce {id}");

    state
        .repository
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewHotSauce>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(sauce) = payload.map_err(|_| AppError::MalformedPayload)?;

    let created = state.repository.save(sauce.into()).await?;
    info!("Created sauce {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<HotSauceChanges>, JsonRejection>,
) -> Result<Json<HotSauce>, AppError> {
    let Json(changes) = payload.map_err(|_| AppError::MalformedPayload)?;

    let original = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    if changes.is_empty() {
        debug!("Update for sauce {id} carries no changes, skipping write");
        return Ok(Json(original));
    }

    let updated = state.repository.save(original.merge(changes)).await?;
    info!("Updated sauce {id}");

    Ok(Json(updated))
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.repository.delete_by_id(id).await? {
        return Err(AppError::NotFound);
    }

    info!("Deleted sauce {id}");

    Ok(StatusCode::NO_CONTENT)
}
