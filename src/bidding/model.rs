use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 입찰 모델
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Bid {
    pub id: i64,
    pub car_id: i64,
    pub amount: i64,
    pub bidder: String,
    pub request_id: String,
    pub created_at: DateTime<Utc>,
}

// 입찰 요청
//
// request_id 는 클라이언트가 만드는 전역 유일 토큰이다. 같은 요청을
// 다시 보내면 저장소의 UNIQUE 제약이 두 번째 삽입을 거부한다.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BidRequest {
    pub car_id: i64,
    pub amount: i64,
    pub bidder: String,
    pub request_id: String,
}
