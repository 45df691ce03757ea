// region:    --- Imports
use crate::catalog::filter::PriceFilter;
use crate::catalog::model::{Car, CarCreateRequest};
use crate::error::AppError;
use crate::store::{CarStore, STORE_TIMEOUT};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::info;

// endregion: --- Imports

// region:    --- Car Catalog Service

/// 차량 카탈로그 서비스
pub struct CarService {
    store: Arc<dyn CarStore>,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    /// 차량 등록
    pub async fn create_car(&self, mut req: CarCreateRequest) -> Result<i64, AppError> {
        info!("{:<12} --> 차량 등록 요청: {:?}", "CarService", req);

        req.model = req.model.trim().to_string();
        if req.model.is_empty() {
            return Err(AppError::Validation("model is required".into()));
        }
        if req.price <= 0 {
            return Err(AppError::Validation("price must be positive".into()));
        }
        if req.year <= 0 {
            return Err(AppError::Validation("year must be positive".into()));
        }

        timeout(STORE_TIMEOUT, self.store.create_car(&req))
            .await
            .map_err(|_| AppError::Timeout)?
    }

    /// 차량 목록 조회 (가격 범위 필터)
    ///
    /// min > max 로 들어와도 오류가 아니다. 필터 생성 시점에 교환된다.
    pub async fn list_cars(
        &self,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Result<Vec<Car>, AppError> {
        info!(
            "{:<12} --> 차량 목록 조회: min={:?}, max={:?}",
            "CarService", min, max
        );
        let filter = PriceFilter::new(min, max);
        timeout(STORE_TIMEOUT, self.store.list_cars(&filter))
            .await
            .map_err(|_| AppError::Timeout)?
    }

    /// 차량 단건 조회
    pub async fn get_car(&self, car_id: i64) -> Result<Car, AppError> {
        info!("{:<12} --> 차량 단건 조회 id: {}", "CarService", car_id);
        let car = timeout(STORE_TIMEOUT, self.store.get_car_by_id(car_id))
            .await
            .map_err(|_| AppError::Timeout)??;
        car.ok_or_else(|| AppError::NotFound("car not found".into()))
    }
}

// endregion: --- Car Catalog Service
