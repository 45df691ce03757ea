// region:    --- Imports
use crate::bidding::model::{Bid, BidRequest};
use crate::error::AppError;
use crate::store::{BidStore, CarStore, STORE_TIMEOUT};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::info;

// endregion: --- Imports

// region:    --- Bid Service

/// 입찰 서비스
pub struct BidService {
    car_store: Arc<dyn CarStore>,
    bid_store: Arc<dyn BidStore>,
}

impl BidService {
    pub fn new(car_store: Arc<dyn CarStore>, bid_store: Arc<dyn BidStore>) -> Self {
        Self {
            car_store,
            bid_store,
        }
    }

    /// 입찰 등록
    ///
    /// 검증 → 차량 존재 확인 → 트랜잭션 삽입 순서로 진행한다.
    pub async fn create_bid(&self, mut req: BidRequest) -> Result<(), AppError> {
        info!(
            "{:<12} --> 입찰 등록 요청: car_id={}, request_id={}",
            "BidService", req.car_id, req.request_id
        );

        // 저장소 호출 전에 끝내는 순수 검증
        req.bidder = req.bidder.trim().to_string();
        req.request_id = req.request_id.trim().to_string();
        if req.car_id <= 0 || req.amount <= 0 || req.bidder.is_empty() || req.request_id.is_empty()
        {
            return Err(AppError::Validation("missing fields".into()));
        }

        timeout(STORE_TIMEOUT, self.place_bid(req))
            .await
            .map_err(|_| AppError::Timeout)?
    }

    /// 존재 확인과 삽입을 하나의 제한 시간 안에서 수행
    async fn place_bid(&self, req: BidRequest) -> Result<(), AppError> {
        // FK 위반을 저장소 오류(500)로 흘리지 않기 위해 삽입 전에 존재 확인.
        // 이 조회는 삽입 트랜잭션 밖에서 실행된다. 차량 삭제 경로가 없어서
        // 확인과 삽입 사이에 차량이 사라지는 경우는 실제로 발생하지 않는다.
        let exists = self.car_store.exists_by_id(req.car_id).await?;
        if !exists {
            return Err(AppError::NotFound("car_id not found".into()));
        }

        // request_id UNIQUE 제약 전제. 중복 제출은 삽입 단계에서 거부된다.
        self.bid_store.insert_bid(&req).await
    }

    /// 차량별 입찰 목록 조회 (최신순)
    ///
    /// 차량 존재 여부는 확인하지 않는다. 없는 차량이면 빈 목록을 돌려준다.
    pub async fn list_bids_by_car(&self, car_id: i64) -> Result<Vec<Bid>, AppError> {
        info!("{:<12} --> 입찰 목록 조회 car_id: {}", "BidService", car_id);
        timeout(STORE_TIMEOUT, self.bid_store.list_bids_by_car(car_id))
            .await
            .map_err(|_| AppError::Timeout)?
    }
}

// endregion: --- Bid Service
