use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::database::ActivityStore;
use crate::models::ActivityMap;
use crate::services::activities_service::{self, ActivityError};

pub const INDEX_PATH: &str = "/static/index.html";

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn root_redirect() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> ApiResult {
    activities_service::signup(&store, &activity_name, &query.email)
        .map(message_body)
        .map_err(|e| {
            warn!(
                activity = %activity_name,
                email = %query.email,
                error = %e,
                "signup rejected"
            );
            error_body(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> ApiResult {
    activities_service::unregister(&store, &activity_name, &query.email)
        .map(message_body)
        .map_err(|e| {
            warn!(
                activity = %activity_name,
                email = %query.email,
                error = %e,
                "unregister rejected"
            );
            error_body(e)
        })
}

fn message_body(message: String) -> Json<Value> {
    Json(serde_json::json!({ "message": message }))
}

fn error_body(e: ActivityError) -> (StatusCode, Json<Value>) {
    (e.status(), Json(serde_json::json!({ "detail": e.to_string() })))
}
