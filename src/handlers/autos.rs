use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Automobile, UpdateOwnerRequest};
use crate::service::AutosService;

pub fn router() -> Router<AutosService> {
    Router::new()
        .route("/", get(get_autos).post(add_auto))
        .route("/:vin", get(get_auto).patch(update_auto).delete(delete_auto))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub color: Option<String>,
    pub make: Option<String>,
}

async fn get_autos(
    State(service): State<AutosService>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = query?;

    let autos = if params.color.is_none() && params.make.is_none() {
        Some(service.list_autos().await?)
    } else {
        service
            .search_autos(params.color.as_deref(), params.make.as_deref())
            .await?
    };

    match autos {
        Some(list) if !list.is_empty() => Ok(Json(list).into_response()),
        _ => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn add_auto(
    State(service): State<AutosService>,
    payload: Result<Json<Automobile>, JsonRejection>,
) -> Result<Json<Automobile>, AppError> {
    let Json(automobile) = payload?;

    tracing::info!("{} Received automobile: {}", API_NAME, automobile.vin);

    let saved = service.add_auto(automobile).await?;
    Ok(Json(saved))
}

async fn get_auto(
    State(service): State<AutosService>,
    Path(vin): Path<String>,
) -> Result<Response, AppError> {
    match service.get_auto(&vin).await? {
        Some(automobile) => Ok(Json(automobile).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

async fn update_auto(
    State(service): State<AutosService>,
    Path(vin): Path<String>,
    payload: Result<Json<UpdateOwnerRequest>, JsonRejection>,
) -> Result<Json<Automobile>, AppError> {
    let Json(update) = payload?;
    update.validate()?;

    let updated = service
        .update_auto(&vin, &update.color, &update.owner)
        .await?;
    Ok(Json(updated))
}

async fn delete_auto(
    State(service): State<AutosService>,
    Path(vin): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete_auto(&vin).await?;
    Ok(StatusCode::ACCEPTED)
}
