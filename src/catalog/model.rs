use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 차량 모델
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Car {
    pub id: i64,
    pub model: String,
    pub price: i64,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

// 차량 등록 요청
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CarCreateRequest {
    pub model: String,
    pub price: i64,
    pub year: i32,
}
