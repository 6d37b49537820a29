//! # Redis 캐시 클라이언트
//!
//! `ConnectionManager`로 자동 재연결되는 멀티플렉스 연결 하나를 공유합니다.
//! 캐시는 보조 저장소이므로 호출자는 실패를 무시하고 MongoDB로 폴백할 수 있습니다.

use redis::{AsyncCommands, Client, RedisError, ErrorKind};
use redis::aio::ConnectionManager;
use serde::{Serialize, de::DeserializeOwned};
use std::env;
use log::info;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("laptop_repository:list", &laptops, 600).await?;
/// let cached: Option<Vec<Laptop>> = redis.get("laptop_repository:list").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)로 연결하고 PING으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;
        let mut manager = ConnectionManager::new(client).await?;
        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// JSON으로 저장된 값을 조회합니다. 키가 없으면 `None`입니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value.map(|json| decode(&json)).transpose()
    }

    /// `seconds` 초 뒤 만료되도록 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        conn.set_ex(key, encode(value)?, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }

    /// 여러 키를 한 번에 삭제합니다. 빈 목록은 아무 것도 하지 않습니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.manager.clone();
        conn.del(keys).await
    }

    /// 패턴(`laptop_repository:*` 등)과 일치하는 키 목록
    ///
    /// KEYS 명령을 사용하므로 무효화 경로에서만 호출합니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, RedisError> {
        let mut conn = self.manager.clone();
        conn.keys(pattern).await
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, RedisError> {
    serde_json::to_string(value)
        .map_err(|e| RedisError::from((ErrorKind::TypeError, "Serialization failed", e.to_string())))
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, RedisError> {
    serde_json::from_str(json)
        .map_err(|e| RedisError::from((ErrorKind::TypeError, "Deserialization failed", e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Cached {
        brand: String,
        price: f64,
    }

    #[test]
    fn test_encode_decode_json() {
        let value = Cached { brand: "Lenovo".to_string(), price: 999.5 };
        let json = encode(&value).unwrap();
        assert_eq!(json, r#"{"brand":"Lenovo","price":999.5}"#);
        assert_eq!(decode::<Cached>(&json).unwrap(), value);
    }

    #[test]
    fn test_decode_rejects_foreign_payload() {
        let err = decode::<Cached>("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeError);
    }
}
