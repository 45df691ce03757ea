// region:    --- Imports
use crate::bidding::model::{Bid, BidRequest};
use crate::catalog::filter::PriceFilter;
use crate::catalog::model::{Car, CarCreateRequest};
use crate::database::DatabaseManager;
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

pub mod queries;

// endregion: --- Imports

/// 저장소 호출 제한 시간
pub const STORE_TIMEOUT: Duration = Duration::from_secs(3);

// region:    --- Store Traits

/// 차량 저장소 게이트웨이
#[async_trait]
pub trait CarStore: Send + Sync {
    async fn create_car(&self, req: &CarCreateRequest) -> Result<i64, AppError>;
    async fn list_cars(&self, filter: &PriceFilter) -> Result<Vec<Car>, AppError>;
    async fn get_car_by_id(&self, car_id: i64) -> Result<Option<Car>, AppError>;
    async fn exists_by_id(&self, car_id: i64) -> Result<bool, AppError>;
}

/// 입찰 저장소 게이트웨이
#[async_trait]
pub trait BidStore: Send + Sync {
    async fn insert_bid(&self, req: &BidRequest) -> Result<(), AppError>;
    async fn list_bids_by_car(&self, car_id: i64) -> Result<Vec<Bid>, AppError>;
}

// endregion: --- Store Traits

// region:    --- Postgres Car Store

/// 차량 저장소 Postgres 구현체
pub struct PgCarStore {
    db: Arc<DatabaseManager>,
}

impl PgCarStore {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarStore for PgCarStore {
    async fn create_car(&self, req: &CarCreateRequest) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(queries::INSERT_CAR)
            .bind(&req.model)
            .bind(req.price)
            .bind(req.year)
            .fetch_one(self.db.pool())
            .await?;
        Ok(id)
    }

    async fn list_cars(&self, filter: &PriceFilter) -> Result<Vec<Car>, AppError> {
        let mut sql = queries::LIST_CARS.to_string();
        let mut binds: Vec<i64> = Vec::new();
        if let Some((clause, args)) = filter.predicate() {
            sql.push_str(" WHERE ");
            sql.push_str(clause);
            binds = args;
        }

        let mut query = sqlx::query_as::<_, Car>(&sql);
        for value in binds {
            query = query.bind(value);
        }
        Ok(query.fetch_all(self.db.pool()).await?)
    }

    async fn get_car_by_id(&self, car_id: i64) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>(queries::GET_CAR_BY_ID)
            .bind(car_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(car)
    }

    async fn exists_by_id(&self, car_id: i64) -> Result<bool, AppError> {
        let row = sqlx::query_scalar::<_, i32>(queries::CAR_EXISTS)
            .bind(car_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }
}

// endregion: --- Postgres Car Store

// region:    --- Postgres Bid Store

/// 입찰 저장소 Postgres 구현체
///
/// 삽입은 트랜잭션 안에서 수행한다. 실패하면 롤백되고 부분 상태는 남지 않는다.
pub struct PgBidStore {
    db: Arc<DatabaseManager>,
}

impl PgBidStore {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BidStore for PgBidStore {
    async fn insert_bid(&self, req: &BidRequest) -> Result<(), AppError> {
        let bid = req.clone();
        let result = self
            .db
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query(queries::INSERT_BID)
                        .bind(bid.car_id)
                        .bind(bid.amount)
                        .bind(&bid.bidder)
                        .bind(&bid.request_id)
                        .execute(&mut **tx)
                        .await?;
                    Ok::<(), AppError>(())
                })
            })
            .await;

        if let Err(AppError::Storage(ref e)) = result {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                warn!(
                    "{:<12} --> request_id 중복 삽입 거부: {}",
                    "Store", req.request_id
                );
            }
        }
        result
    }

    async fn list_bids_by_car(&self, car_id: i64) -> Result<Vec<Bid>, AppError> {
        let bids = sqlx::query_as::<_, Bid>(queries::LIST_BIDS_BY_CAR)
            .bind(car_id)
            .fetch_all(self.db.pool())
            .await?;
        Ok(bids)
    }
}

// endregion: --- Postgres Bid Store
