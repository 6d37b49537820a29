//! 노트북 쇼핑몰 백엔드 메인 애플리케이션
//!
//! MongoDB, Redis 연결을 준비하고 싱글톤을 초기화한 뒤 Actix-web 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_web::HttpServer;
use actix_governor::GovernorConfigBuilder;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use laptop_store_backend::app::create_app;
use laptop_store_backend::caching::redis::RedisClient;
use laptop_store_backend::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use laptop_store_backend::core::registry::ServiceLocator;
use laptop_store_backend::db::Database;
use laptop_store_backend::repositories::{
    carts::cart_repo::CartRepository,
    payments::payment_repo::PaymentRepository,
    users::user_repo::UserRepository,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Laptop store backend 시작중... ({:?})", Environment::current());

    let (database, redis_client) = initialize_data_stores().await?;

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    ensure_indexes().await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다 (workers={})", bind_address, workers);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    if allowed_origins.is_empty() && Environment::current().is_production() {
        warn!("CORS_ALLOWED_ORIGINS 미설정: 모든 Origin 허용");
    }

    HttpServer::new(move || create_app(governor_conf.clone(), allowed_origins.clone()))
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 stderr로 출력합니다.
    match loaded {
        Ok(file) => eprintln!("{} 파일 로드 됨 (profile: {:?})", file, profile),
        Err(e) => eprintln!("환경 파일 로드 실패, 프로세스 환경 변수만 사용: {}", e),
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 인덱스 생성 실패는 서버 기동을 막지 않습니다.
async fn ensure_indexes() {
    if let Err(e) = UserRepository::instance().create_indexes().await {
        error!("users 인덱스 생성 실패: {}", e);
    }
    if let Err(e) = CartRepository::instance().create_indexes().await {
        error!("carts 인덱스 생성 실패: {}", e);
    }
    if let Err(e) = PaymentRepository::instance().create_indexes().await {
        error!("payments 인덱스 생성 실패: {}", e);
    }
}
