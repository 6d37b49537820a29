//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 문서 타입입니다.
//!
//! | 엔티티 | 컬렉션 |
//! |--------|--------|
//! | [`users::user::User`] | `users` |
//! | [`laptops::laptop::Laptop`] | `laptops` |
//! | [`carts::cart_item::CartItem`] | `carts` |
//! | [`payments::payment::Payment`] | `payments` |
//!
//! 필드 이름은 프런트엔드와 공유하는 camelCase를 그대로 저장합니다.

pub mod users;
pub mod laptops;
pub mod carts;
pub mod payments;
