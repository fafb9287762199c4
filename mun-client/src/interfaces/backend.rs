use kmun_core::{
    format::error::ApiError,
    messages::{CreateOrderRequest, CreateOrderResponse, VerifyPaymentRequest},
    types::{Pricing, UserProfile},
};
use serde_json::Value;

use crate::api::{AuthApi, HttpBackend, PaymentsApi, PricingApi};

use super::PaymentsBackend;

#[async_trait::async_trait]
impl PaymentsBackend for HttpBackend {
    async fn fetch_pricing(&self) -> Result<Pricing, ApiError> {
        PricingApi::get_pricing(self).await
    }
    async fn create_order(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, ApiError> {
        PaymentsApi::create_order(self, req).await
    }
    async fn verify_payment(&self, req: VerifyPaymentRequest) -> Result<Value, ApiError> {
        PaymentsApi::verify_payment(self, req).await
    }
    async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        AuthApi::get_profile(self).await
    }
}
