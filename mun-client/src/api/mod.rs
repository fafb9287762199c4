//! One async trait per backend resource. `HttpBackend` implements all of them;
//! dashboards and tests only depend on the slices they use.

#[cfg(feature = "http")]
mod http;
mod token;

#[cfg(feature = "http")]
pub use http::*;
pub use token::*;

use kmun_core::{
    format::error::ApiError,
    messages::{
        ChangePasswordRequest, CommitteeRequest, CommitteeStats, ContactSubmission,
        CreateOrderRequest, CreateOrderResponse, GalleryItemRequest, LoginRequest, LoginResponse,
        LogsPage, LogsQuery, MailRecipient, MailerStats, NewRegistration, PaymentsPage,
        PaymentsQuery, PortfolioRequest, RefundRequest, SendMailRequest, SetPasswordRequest,
        TestMailRequest, UpdateContactRequest, UpdatePopupRequest, UpdatePricingRequest,
        UpdateProfileRequest, UpdateRegistrationRequest, UserRequest, VerifyPaymentRequest,
    },
    types::{
        ActivityItem, Committee, ContactForm, DashboardStat, GalleryItem, InstitutionType,
        Payment, PaymentStats, Popup, Portfolio, Pricing, Registration, User, UserProfile,
    },
};
use serde_json::Value;

#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn get_profile(&self) -> Result<UserProfile, ApiError>;
    async fn update_profile(&self, req: UpdateProfileRequest) -> Result<UserProfile, ApiError>;
    async fn change_password(&self, req: ChangePasswordRequest) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
pub trait RegistrationsApi: Send + Sync {
    async fn list_registrations(&self) -> Result<Vec<Registration>, ApiError>;
    async fn get_registration(&self, id: &str) -> Result<Registration, ApiError>;
    async fn create_registration(&self, req: NewRegistration) -> Result<Registration, ApiError>;
    async fn update_registration(
        &self,
        id: &str,
        req: UpdateRegistrationRequest,
    ) -> Result<Registration, ApiError>;
    async fn delete_registration(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
pub trait CommitteesApi: Send + Sync {
    async fn list_committees(&self) -> Result<Vec<Committee>, ApiError>;
    async fn get_committee(&self, id: &str) -> Result<Committee, ApiError>;
    async fn featured_committees(&self) -> Result<Vec<Committee>, ApiError>;
    async fn committees_for(&self, kind: InstitutionType) -> Result<Vec<Committee>, ApiError>;
    async fn committee_stats(&self) -> Result<CommitteeStats, ApiError>;
    async fn create_committee(&self, req: CommitteeRequest) -> Result<Committee, ApiError>;
    async fn update_committee(&self, id: &str, req: CommitteeRequest) -> Result<Committee, ApiError>;
    async fn delete_committee(&self, id: &str) -> Result<(), ApiError>;

    async fn list_portfolios(&self, committee_id: &str) -> Result<Vec<Portfolio>, ApiError>;
    async fn create_portfolio(
        &self,
        committee_id: &str,
        req: PortfolioRequest,
    ) -> Result<Portfolio, ApiError>;
    async fn update_portfolio(
        &self,
        committee_id: &str,
        portfolio_id: &str,
        req: PortfolioRequest,
    ) -> Result<Portfolio, ApiError>;
    async fn delete_portfolio(&self, committee_id: &str, portfolio_id: &str) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
pub trait UsersApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn get_user(&self, id: &str) -> Result<User, ApiError>;
    async fn create_user(&self, req: UserRequest) -> Result<User, ApiError>;
    async fn update_user(&self, id: &str, req: UserRequest) -> Result<User, ApiError>;
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;
    async fn set_password(&self, id: &str, req: SetPasswordRequest) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
pub trait PricingApi: Send + Sync {
    async fn get_pricing(&self) -> Result<Pricing, ApiError>;
    async fn update_pricing(&self, req: UpdatePricingRequest) -> Result<Pricing, ApiError>;
}

#[async_trait::async_trait]
pub trait PaymentsApi: Send + Sync {
    async fn create_order(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, ApiError>;
    /// The payload is opaque to the client and handed on unchanged.
    async fn verify_payment(&self, req: VerifyPaymentRequest) -> Result<Value, ApiError>;
    async fn list_payments(&self, query: PaymentsQuery) -> Result<PaymentsPage, ApiError>;
    async fn get_payment(&self, id: &str) -> Result<Payment, ApiError>;
    async fn payment_stats(&self) -> Result<PaymentStats, ApiError>;
    async fn transaction_logs(&self, query: LogsQuery) -> Result<LogsPage, ApiError>;
    async fn refund(&self, id: &str, req: RefundRequest) -> Result<Value, ApiError>;
}

#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>, ApiError>;
    async fn recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Service {
    Database,
    Payment,
    Email,
}

impl Service {
    pub fn path(&self) -> &'static str {
        match self {
            Service::Database => "/api/health/database",
            Service::Payment => "/api/health/payment",
            Service::Email => "/api/health/email",
        }
    }
}

#[async_trait::async_trait]
pub trait HealthApi: Send + Sync {
    async fn health(&self) -> Result<Value, ApiError>;
    /// Only the status code matters; any transport failure counts as down.
    async fn service_up(&self, service: Service) -> bool;
}

#[async_trait::async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit_contact(&self, req: ContactSubmission) -> Result<(), ApiError>;
    async fn list_contacts(&self) -> Result<Vec<ContactForm>, ApiError>;
    async fn get_contact(&self, id: &str) -> Result<ContactForm, ApiError>;
    async fn update_contact(
        &self,
        id: &str,
        req: UpdateContactRequest,
    ) -> Result<ContactForm, ApiError>;
    async fn delete_contact(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
pub trait PopupApi: Send + Sync {
    async fn get_popup(&self) -> Result<Option<Popup>, ApiError>;
    async fn active_popup(&self) -> Result<Option<Popup>, ApiError>;
    async fn update_popup(&self, req: UpdatePopupRequest) -> Result<Popup, ApiError>;
    async fn toggle_popup(&self, is_active: bool) -> Result<Popup, ApiError>;
}

#[async_trait::async_trait]
pub trait MailerApi: Send + Sync {
    /// Number of recipients the backend reports, if it says.
    async fn send_mail(&self, req: SendMailRequest) -> Result<Option<u64>, ApiError>;
    async fn recipients(&self, committee: Option<&str>) -> Result<Vec<MailRecipient>, ApiError>;
    async fn mailer_stats(&self) -> Result<MailerStats, ApiError>;
    async fn send_test_mail(&self, req: TestMailRequest) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
pub trait GalleryApi: Send + Sync {
    async fn list_gallery(&self, category: Option<&str>) -> Result<Vec<GalleryItem>, ApiError>;
    async fn gallery_categories(&self) -> Result<Vec<String>, ApiError>;
    async fn create_gallery_item(&self, req: GalleryItemRequest) -> Result<GalleryItem, ApiError>;
    async fn update_gallery_item(
        &self,
        id: &str,
        req: GalleryItemRequest,
    ) -> Result<GalleryItem, ApiError>;
    async fn delete_gallery_item(&self, id: &str) -> Result<(), ApiError>;
}
