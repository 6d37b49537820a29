//! 캐싱 계층 모듈
//!
//! Redis 기반 읽기 캐시입니다. 값은 JSON 문자열로 저장되며,
//! 리포지토리는 `#[repository]` 매크로가 생성한 `cache_key` /
//! `invalidate_*` 헬퍼를 통해 이 클라이언트를 사용합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
