//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, CORS, Rate Limiting 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값 4000)
    pub fn port() -> u16 {
        parse_or(env::var("PORT").ok(), 4000)
    }

    /// 서버가 바인딩할 호스트 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본값 4)
    pub fn workers() -> usize {
        parse_or(env::var("SERVER_WORKERS").ok(), 4)
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    ///
    /// 비어 있으면 모든 Origin을 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        split_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_or(env::var("RATE_LIMIT_PER_SECOND").ok(), 100),
            burst_size: parse_or(env::var("RATE_LIMIT_BURST_SIZE").ok(), 200),
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("설정값 파싱 실패: {:?}. 기본값 사용", value);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 4000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or::<u16>(Some("8081".to_string()), 4000), 8081);
        assert_eq!(parse_or::<u16>(Some(" 8082 ".to_string()), 4000), 8082);
        assert_eq!(parse_or::<u16>(Some("not-a-port".to_string()), 4000), 4000);
        assert_eq!(parse_or::<u16>(None, 4000), 4000);
    }

    #[test]
    fn test_split_origins() {
        assert_eq!(
            split_origins("http://localhost:5173, https://shop.example.com ,"),
            vec!["http://localhost:5173", "https://shop.example.com"]
        );
        assert!(split_origins("").is_empty());
    }
}
