// region:    --- Imports
use async_trait::async_trait;
use car_auction_service::bidding::model::{Bid, BidRequest};
use car_auction_service::catalog::filter::PriceFilter;
use car_auction_service::catalog::model::{Car, CarCreateRequest};
use car_auction_service::error::AppError;
use car_auction_service::store::{BidStore, CarStore};
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// endregion: --- Imports

/// 테스트용 인메모리 저장소
///
/// Postgres 게이트웨이와 같은 계약을 지킨다. request_id 가 겹치는 삽입은
/// UNIQUE 위반과 같은 저장소 오류로 돌려주고, 목록은 최신순으로 돌려준다.
/// 호출 횟수를 세어 두므로 "저장소 호출 없음"을 검증할 수 있다.
#[derive(Default)]
pub struct MemoryStore {
    pub cars: Mutex<Vec<Car>>,
    pub bids: Mutex<Vec<Bid>>,
    car_calls: AtomicUsize,
    bid_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 테스트 준비용 차량 삽입 (호출 횟수에 포함되지 않는다)
    pub fn seed_car(&self, model: &str, price: i64, year: i32) -> i64 {
        let mut cars = self.cars.lock().unwrap();
        let id = cars.len() as i64 + 1;
        cars.push(Car {
            id,
            model: model.to_string(),
            price,
            year,
            created_at: Utc::now(),
        });
        id
    }

    pub fn car_calls(&self) -> usize {
        self.car_calls.load(Ordering::SeqCst)
    }

    pub fn bid_calls(&self) -> usize {
        self.bid_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CarStore for MemoryStore {
    async fn create_car(&self, req: &CarCreateRequest) -> Result<i64, AppError> {
        self.car_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed_car(&req.model, req.price, req.year))
    }

    async fn list_cars(&self, filter: &PriceFilter) -> Result<Vec<Car>, AppError> {
        self.car_calls.fetch_add(1, Ordering::SeqCst);
        let cars = self.cars.lock().unwrap();
        Ok(cars
            .iter()
            .filter(|c| filter.matches(c.price))
            .cloned()
            .collect())
    }

    async fn get_car_by_id(&self, car_id: i64) -> Result<Option<Car>, AppError> {
        self.car_calls.fetch_add(1, Ordering::SeqCst);
        let cars = self.cars.lock().unwrap();
        Ok(cars.iter().find(|c| c.id == car_id).cloned())
    }

    async fn exists_by_id(&self, car_id: i64) -> Result<bool, AppError> {
        self.car_calls.fetch_add(1, Ordering::SeqCst);
        let cars = self.cars.lock().unwrap();
        Ok(cars.iter().any(|c| c.id == car_id))
    }
}

#[async_trait]
impl BidStore for MemoryStore {
    async fn insert_bid(&self, req: &BidRequest) -> Result<(), AppError> {
        self.bid_calls.fetch_add(1, Ordering::SeqCst);
        let mut bids = self.bids.lock().unwrap();
        if bids.iter().any(|b| b.request_id == req.request_id) {
            return Err(AppError::Storage(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint \"bids_request_id_key\"".into(),
            )));
        }
        let id = bids.len() as i64 + 1;
        bids.push(Bid {
            id,
            car_id: req.car_id,
            amount: req.amount,
            bidder: req.bidder.clone(),
            request_id: req.request_id.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_bids_by_car(&self, car_id: i64) -> Result<Vec<Bid>, AppError> {
        self.bid_calls.fetch_add(1, Ordering::SeqCst);
        let bids = self.bids.lock().unwrap();
        let mut matched: Vec<Bid> = bids
            .iter()
            .filter(|b| b.car_id == car_id)
            .cloned()
            .collect();
        // 삽입 역순 = 최신순
        matched.reverse();
        Ok(matched)
    }
}
