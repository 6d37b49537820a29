//! Stripe 결제 연동 설정

use std::env;

/// Stripe API 설정
///
/// ```bash
/// export STRIPE_SECRET_KEY="sk_test_..."
/// export STRIPE_API_BASE="https://api.stripe.com"   # 선택
/// export PAYMENT_CURRENCY="usd"                      # 선택
/// ```
pub struct StripeConfig;

impl StripeConfig {
    /// Stripe 비밀키
    ///
    /// `STRIPE_SECRET_KEY`가 없으면 기존 배포 환경 변수명
    /// `STRIPE_TEST_SECRECT_KEY`를 확인합니다.
    pub fn secret_key() -> Option<String> {
        env::var("STRIPE_SECRET_KEY")
            .or_else(|_| env::var("STRIPE_TEST_SECRECT_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Stripe API 베이스 URL (끝의 `/` 제거)
    pub fn api_base() -> String {
        env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 결제 통화 (소문자 ISO 코드, 기본값 "usd")
    pub fn currency() -> String {
        env::var("PAYMENT_CURRENCY")
            .map(|c| c.trim().to_lowercase())
            .ok()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "usd".to_string())
    }

    /// PaymentIntent 생성 엔드포인트
    pub fn payment_intents_url() -> String {
        format!("{}/v1/payment_intents", Self::api_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        if env::var("STRIPE_API_BASE").is_err() {
            assert_eq!(
                StripeConfig::payment_intents_url(),
                "https://api.stripe.com/v1/payment_intents"
            );
        }
        if env::var("PAYMENT_CURRENCY").is_err() {
            assert_eq!(StripeConfig::currency(), "usd");
        }
    }
}
