pub mod payment_service;
pub mod stripe_service;
