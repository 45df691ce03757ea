// region:    --- Imports
use crate::bidding::model::BidRequest;
use crate::bidding::service::BidService;
use crate::catalog::model::CarCreateRequest;
use crate::catalog::service::CarService;
use crate::error::AppError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

// endregion: --- Imports

/// 핸들러 공유 상태
pub type AppState = (Arc<CarService>, Arc<BidService>);

// region:    --- Router

/// 라우터 구성
pub fn routes(car_service: Arc<CarService>, bid_service: Arc<BidService>) -> Router {
    Router::new()
        .route("/cars", get(handle_list_cars).post(handle_create_car))
        .route("/cars/:id", get(handle_get_car))
        .route("/bids", get(handle_list_bids).post(handle_create_bid))
        .route("/", get(|| async { "OK" }))
        .with_state((car_service, bid_service))
}

// endregion: --- Router

// region:    --- Query Params

#[derive(Debug, Deserialize)]
pub struct ListCarsParams {
    min_price: Option<String>,
    max_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListBidsParams {
    item_id: Option<String>,
}

/// 쿼리 파라미터의 정수 해석 (빈 값은 없는 것으로 취급)
fn parse_bound(raw: Option<&str>) -> Result<Option<i64>, std::num::ParseIntError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i64>().map(Some),
    }
}

// endregion: --- Query Params

// region:    --- Car Handlers

/// 차량 목록 조회
pub async fn handle_list_cars(
    State((car_service, _)): State<AppState>,
    Query(params): Query<ListCarsParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 차량 목록 조회: {:?}", "Handler", params);

    let min = match parse_bound(params.min_price.as_deref()) {
        Ok(v) => v,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "min_price must be integer").into_response()
        }
    };
    let max = match parse_bound(params.max_price.as_deref()) {
        Ok(v) => v,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "max_price must be integer").into_response()
        }
    };

    match car_service.list_cars(min, max).await {
        Ok(cars) => Json(cars).into_response(),
        Err(e) => {
            error!("{:<12} --> 차량 목록 조회 실패: {:?}", "Handler", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to query cars").into_response()
        }
    }
}

/// 차량 단건 조회
pub async fn handle_get_car(
    State((car_service, _)): State<AppState>,
    Path(car_id): Path<i64>,
) -> impl IntoResponse {
    info!("{:<12} --> 차량 단건 조회 id: {}", "Handler", car_id);

    match car_service.get_car(car_id).await {
        Ok(car) => Json(car).into_response(),
        Err(AppError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg).into_response(),
        Err(e) => {
            error!("{:<12} --> 차량 단건 조회 실패: {:?}", "Handler", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to query car").into_response()
        }
    }
}

/// 차량 등록
pub async fn handle_create_car(
    State((car_service, _)): State<AppState>,
    Json(req): Json<CarCreateRequest>,
) -> impl IntoResponse {
    info!("{:<12} --> 차량 등록: {:?}", "Handler", req);

    match car_service.create_car(req).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id })),
        )
            .into_response(),
        Err(AppError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg).into_response(),
        Err(e) => {
            error!("{:<12} --> 차량 등록 실패: {:?}", "Handler", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to create car").into_response()
        }
    }
}

// endregion: --- Car Handlers

// region:    --- Bid Handlers

/// 입찰 등록
///
/// 검증 실패와 대상 차량 없음은 둘 다 클라이언트 오류(400)다.
pub async fn handle_create_bid(
    State((_, bid_service)): State<AppState>,
    Json(req): Json<BidRequest>,
) -> impl IntoResponse {
    info!(
        "{:<12} --> 입찰 등록: car_id={}, request_id={}",
        "Handler", req.car_id, req.request_id
    );

    match bid_service.create_bid(req).await {
        Ok(()) => (StatusCode::CREATED, "created").into_response(),
        Err(AppError::Validation(msg)) | Err(AppError::NotFound(msg)) => {
            (StatusCode::BAD_REQUEST, msg).into_response()
        }
        Err(e) => {
            error!("{:<12} --> 입찰 등록 실패: {:?}", "Handler", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to insert bid").into_response()
        }
    }
}

/// 차량별 입찰 목록 조회
pub async fn handle_list_bids(
    State((_, bid_service)): State<AppState>,
    Query(params): Query<ListBidsParams>,
) -> impl IntoResponse {
    info!("{:<12} --> 입찰 목록 조회: {:?}", "Handler", params);

    let raw = params.item_id.as_deref().map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return (StatusCode::BAD_REQUEST, "item_id is required").into_response();
    }
    let car_id = match raw.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "item_id must be integer").into_response()
        }
    };

    match bid_service.list_bids_by_car(car_id).await {
        Ok(bids) => Json(bids).into_response(),
        Err(e) => {
            error!("{:<12} --> 입찰 목록 조회 실패: {:?}", "Handler", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to query bids").into_response()
        }
    }
}

// endregion: --- Bid Handlers
