use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::ActivityDirectory;
use crate::error::ActivityError;
use crate::models::MessageResponse;
use crate::services::activities_service;
use crate::web::api_error::ApiError;

// Raw pairs so a repeated `email` keeps its last value instead of failing.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn require_email(query: QueryPairs) -> Result<String, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .ok_or_else(|| ApiError::InvalidQuery("Missing query parameter `email`".to_string()))
}

// A name that does not decode to UTF-8 cannot match any activity.
fn decoded_activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(name)| name)
        .map_err(|_| ApiError::Activity(ActivityError::ActivityNotFound))
}

pub async fn activity_signup_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    path: Result<Path<String>, PathRejection>,
    query: QueryPairs,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = require_email(query)?;
    let activity_name = decoded_activity_name(path)?;
    let response = activities_service::signup_for_activity(&directory, &activity_name, &email)?;
    Ok(Json(response))
}

pub async fn activity_participant_removal_handler(
    State(directory): State<Arc<ActivityDirectory>>,
    path: Result<Path<String>, PathRejection>,
    query: QueryPairs,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = require_email(query)?;
    let activity_name = decoded_activity_name(path)?;
    let response = activities_service::remove_participant(&directory, &activity_name, &email)?;
    Ok(Json(response))
}
