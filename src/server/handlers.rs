use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, CityEntry, MapRegion};
use crate::sampling;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/cities ─────────────────────────────────────────────

pub async fn city_list() -> Json<Vec<CityEntry>> {
    Json(catalog::all_entries())
}

// ─── GET /api/cities/{id} ────────────────────────────────────────

pub async fn city_by_id(Path(id): Path<u32>) -> Result<Json<CityEntry>, ApiError> {
    catalog::entry(id)
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("No city with id {}", id)))
}

// ─── GET /api/sample ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SampleQuery {
    pub count: Option<i64>,
}

pub async fn sample(Query(params): Query<SampleQuery>) -> Result<Json<Vec<CityEntry>>, ApiError> {
    let count = params
        .count
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing 'count' parameter"))?;

    sampling::sample(count).map(Json).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Sample count must be positive, got {}", count),
        )
    })
}

// ─── GET /api/region ─────────────────────────────────────────────

pub async fn region() -> Json<MapRegion> {
    Json(catalog::map_region())
}
