//! # Service Registry
//!
//! `singleton_macro`의 `#[service]` / `#[repository]` 속성이 생성하는 코드가
//! 의존하는 레지스트리입니다. 매크로는 다음을 생성합니다.
//!
//! - `instance()` 싱글톤 접근자 (`OnceCell<Arc<Self>>`)
//! - `Arc<T>` 필드마다 `ServiceLocator::get::<T>()` 호출
//! - `inventory::submit!`으로 [`ServiceRegistration`] / [`RepositoryRegistration`] 등록
//! - [`Service`] / [`Repository`] trait 구현
//!
//! 매크로가 만들지 않는 인프라 객체(`Database`, `RedisClient`)는
//! 애플리케이션 시작 시 [`ServiceLocator::set`]으로 직접 등록해야 합니다.
//!
//! ## 이름 규칙
//!
//! 타입 이름에서 `Repository` / `Service` 접미사를 제거하고 소문자로 바꾼 값이
//! 등록 이름(`name = "..."` 인자)과 일치해야 합니다.
//!
//! | 타입 | 매크로 인자 | 등록 이름 |
//! |------|-------------|-----------|
//! | `LaptopRepository` | `name = "laptop"` | `laptop_repository` |
//! | `StatsService` | `name = "stats"` | `stats_service` |
//!
//! ```rust,ignore
//! #[repository(name = "cart", collection = "carts")]
//! pub struct CartRepository {
//!     db: Arc<Database>,
//! }
//!
//! #[service(name = "cart")]
//! pub struct CartService {
//!     cart_repo: Arc<CartRepository>, // ServiceLocator::get::<CartRepository>()
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use thiserror::Error;

/// `#[service]` 매크로가 구현하는 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 trait
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보 (`inventory`로 수집)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보 (`inventory`로 수집)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 레지스트리 조회 실패 원인
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("circular dependency detected while resolving {0}")]
    CircularDependency(String),

    #[error("{0} is not registered; use #[service]/#[repository] or ServiceLocator::set()")]
    NotRegistered(String),

    #[error("registered constructor for {0} produced a different type")]
    TypeMismatch(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ComponentKind {
    Repository,
    Service,
}

/// 등록 이름 → 생성자 인덱스
struct RegistrationIndex {
    repositories: HashMap<String, fn() -> Box<dyn Any + Send + Sync>>,
    services: HashMap<String, fn() -> Box<dyn Any + Send + Sync>>,
}

static INDEX: Lazy<RegistrationIndex> = Lazy::new(|| {
    let repositories: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|r| (registration_key(r.name), r.constructor))
        .collect();
    let services: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|r| (registration_key(r.name), r.constructor))
        .collect();

    debug!(
        "registry index built: {} repositories, {} services",
        repositories.len(),
        services.len()
    );

    RegistrationIndex { repositories, services }
});

/// `"laptop_repository"` → `"laptop"`, `"stats_service"` → `"stats"`
fn registration_key(name: &str) -> String {
    name.strip_suffix("_repository")
        .or_else(|| name.strip_suffix("_service"))
        .unwrap_or(name)
        .to_string()
}

/// `"crate::repositories::LaptopRepository"` → `(Repository, "laptop")`
fn lookup_key(type_name: &str) -> Option<(ComponentKind, String)> {
    let short = short_type_name(type_name);

    if let Some(base) = short.strip_suffix("Repository") {
        return Some((ComponentKind::Repository, base.to_lowercase()));
    }
    if let Some(base) = short.strip_suffix("Service") {
        return Some((ComponentKind::Service, base.to_lowercase()));
    }
    None
}

fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 기반 싱글톤 조회 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    resolving: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    resolving: RwLock::new(HashSet::new()),
});

/// 해석 중인 타입을 표시하고, 스코프를 벗어나면 표시를 제거합니다.
struct ResolutionGuard {
    type_id: TypeId,
}

impl ResolutionGuard {
    fn enter(type_id: TypeId, type_name: &str) -> Result<Self, RegistryError> {
        let mut resolving = LOCATOR.resolving.write().unwrap_or_else(|e| e.into_inner());
        if !resolving.insert(type_id) {
            return Err(RegistryError::CircularDependency(type_name.to_string()));
        }
        Ok(Self { type_id })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        let mut resolving = LOCATOR.resolving.write().unwrap_or_else(|e| e.into_inner());
        resolving.remove(&self.type_id);
    }
}

impl ServiceLocator {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 매크로가 생성한 필드 초기화 코드에서 호출됩니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 의존성이 있는 경우. 배선 오류는
    /// 시작 시점의 [`ServiceLocator::initialize_all`]에서 드러납니다.
    pub fn get<T: Send + Sync + 'static>() -> Arc<T> {
        match Self::try_get::<T>() {
            Ok(instance) => instance,
            Err(e) => panic!("ServiceLocator: {}", e),
        }
    }

    /// 패닉 없이 싱글톤 인스턴스를 가져옵니다.
    pub fn try_get<T: Send + Sync + 'static>() -> Result<Arc<T>, RegistryError> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(existing) = Self::cached::<T>(type_id) {
            return Ok(existing);
        }

        let _guard = ResolutionGuard::enter(type_id, type_name)?;

        let (kind, key) = lookup_key(type_name)
            .ok_or_else(|| RegistryError::NotRegistered(type_name.to_string()))?;

        let constructor = match kind {
            ComponentKind::Repository => INDEX.repositories.get(&key),
            ComponentKind::Service => INDEX.services.get(&key),
        }
        .ok_or_else(|| RegistryError::NotRegistered(type_name.to_string()))?;

        // 생성자는 락 없이 호출합니다 (내부에서 다른 의존성을 다시 조회함).
        let instance = constructor()
            .downcast::<Arc<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| RegistryError::TypeMismatch(type_name.to_string()))?;

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        stored
            .downcast::<T>()
            .map_err(|_| RegistryError::TypeMismatch(type_name.to_string()))
    }

    fn cached<T: Send + Sync + 'static>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&type_id)
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 매크로 밖에서 생성한 인스턴스를 등록합니다 (`Database`, `RedisClient`).
    pub fn set<T: Send + Sync + 'static>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        info!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만들고 서비스를 만듭니다. 첫 요청 시점이 아니라
    /// 시작 시점에 배선 오류가 드러나도록 `main`에서 호출합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 Initializing service registry");

        let mut repositories = 0usize;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            debug!("   ├─ {}: created", registration.name);
            repositories += 1;
        }

        let mut services = 0usize;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            debug!("   ├─ {}: created", registration.name);
            services += 1;
        }

        info!(
            "🎉 Registry ready: {} repositories, {} services",
            repositories, services
        );

        Ok(())
    }
}
