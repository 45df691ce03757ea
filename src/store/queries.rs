/// 차량 목록 조회 (필터 조건은 호출 측이 WHERE 절로 덧붙인다)
pub const LIST_CARS: &str = "SELECT id, model, price, year, created_at FROM cars";

/// 차량 단건 조회
pub const GET_CAR_BY_ID: &str =
    "SELECT id, model, price, year, created_at FROM cars WHERE id = $1";

/// 차량 존재 확인
pub const CAR_EXISTS: &str = "SELECT 1 FROM cars WHERE id = $1 LIMIT 1";

/// 차량 등록
pub const INSERT_CAR: &str =
    "INSERT INTO cars (model, price, year) VALUES ($1, $2, $3) RETURNING id";

/// 입찰 등록 (request_id UNIQUE 제약이 중복 제출을 거부한다)
pub const INSERT_BID: &str =
    "INSERT INTO bids (car_id, amount, bidder, request_id) VALUES ($1, $2, $3, $4)";

/// 차량별 입찰 목록 조회 (최신순)
pub const LIST_BIDS_BY_CAR: &str = r#"
    SELECT id, car_id, amount, bidder, request_id, created_at
    FROM bids
    WHERE car_id = $1
    ORDER BY created_at DESC
"#;
