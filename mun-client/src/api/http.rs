use std::{sync::Arc, time::Duration};

use kmun_core::{
    format::{
        envelope::Envelope,
        error::{ApiError, GenericError},
        query::to_query_pairs,
    },
    messages::{
        ChangePasswordRequest, CommitteeRequest, CommitteeStats, ContactSubmission,
        CreateOrderRequest, CreateOrderResponse, GalleryItemRequest, GalleryQuery, LoginRequest,
        LoginResponse, LogsPage, LogsQuery, MailRecipient, MailerStats, NewRegistration,
        PaymentsPage, PaymentsQuery, PortfolioRequest, RecipientsQuery, RefundRequest,
        RegistrationList, SendMailRequest, SendMailResponse, SetPasswordRequest, TestMailRequest,
        TogglePopupRequest, UpdateContactRequest, UpdatePopupRequest, UpdatePricingRequest,
        UpdateProfileRequest, UpdateRegistrationRequest, UserRequest, VerifyPaymentRequest,
    },
    types::{
        ActivityItem, Committee, ContactForm, DashboardStat, GalleryItem, InstitutionType,
        Payment, PaymentStats, Popup, Portfolio, Pricing, Registration, User, UserProfile,
    },
};
use reqwest::{header::CONTENT_TYPE, multipart::Form, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{config::PortalConfig, error::ClientError};

use super::{
    AuthApi, CommitteesApi, ContactApi, DashboardApi, GalleryApi, HealthApi, MailerApi,
    PaymentsApi, PopupApi, PricingApi, RegistrationsApi, Service, TokenStore, UsersApi,
};

/// Talks to the portal backend over JSON. Every response is unwrapped from the
/// `{success, data, message}` envelope; non-2xx statuses become [`ApiError::Http`].
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Other(GenericError::TimeOut)
    } else if e.is_decode() {
        ApiError::Other(GenericError::ParsingError)
    } else {
        ApiError::Other(GenericError::Offline)
    }
}

enum Body {
    Json(Value),
    /// Sent as `multipart/form-data`, one text part per field.
    Form(Vec<(String, String)>),
}

fn to_body<B: Serialize>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(|_| ApiError::Other(GenericError::ParsingError))
}

impl HttpBackend {
    pub fn new(config: &PortalConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Body>,
    ) -> Result<Envelope<T>, ApiError> {
        log::info!("{} {}", method, path);
        let mut req = self.client.request(method.clone(), self.url(path));
        if let Some(token) = self.tokens.token() {
            req = req.bearer_auth(token);
        }
        if !query.is_empty() {
            req = req.query(&query);
        }
        req = match body {
            Some(Body::Form(fields)) => {
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, (k, v)| form.text(k, v));
                req.multipart(form)
            }
            Some(Body::Json(body)) => req.header(CONTENT_TYPE, "application/json").json(&body),
            None => req.header(CONTENT_TYPE, "application/json"),
        };

        let resp = req.send().await.map_err(transport_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;
        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &text);
            log::warn!("{} {} failed: {}", method, path, err);
            return Err(err);
        }
        Envelope::decode(&text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, Vec::new(), None).await?.into_result()
    }

    async fn get_with<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        self.send(Method::GET, path, to_query_pairs(query), None)
            .await?
            .into_result()
    }

    /// GET for singletons the backend answers with `data: null` when unset.
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.get::<T>(path).await {
            Ok(v) => Ok(Some(v)),
            Err(ApiError::Other(GenericError::MissingData)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn write<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = to_body(body)?;
        self.send(method, path, Vec::new(), Some(body))
            .await?
            .into_result()
    }

    async fn write_ack<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let body = to_body(body)?;
        self.send::<Value>(method, path, Vec::new(), Some(body))
            .await?
            .into_ack()
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send::<Value>(Method::DELETE, path, Vec::new(), None)
            .await?
            .into_ack()
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpBackend {
    async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.write(Method::POST, "/api/auth/login", &req).await
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/api/auth/profile").await
    }

    async fn update_profile(&self, req: UpdateProfileRequest) -> Result<UserProfile, ApiError> {
        self.write(Method::PUT, "/api/auth/profile", &req).await
    }

    async fn change_password(&self, req: ChangePasswordRequest) -> Result<(), ApiError> {
        self.write_ack(Method::PUT, "/api/auth/change-password", &req)
            .await
    }
}

#[async_trait::async_trait]
impl RegistrationsApi for HttpBackend {
    async fn list_registrations(&self) -> Result<Vec<Registration>, ApiError> {
        let list: RegistrationList = self.get("/api/registrations").await?;
        Ok(list.into_vec())
    }

    async fn get_registration(&self, id: &str) -> Result<Registration, ApiError> {
        self.get(&format!("/api/registrations/{id}")).await
    }

    /// The registration form goes out as form data, not JSON.
    async fn create_registration(&self, req: NewRegistration) -> Result<Registration, ApiError> {
        let body = Body::Form(to_query_pairs(&req));
        self.send(Method::POST, "/api/registrations", Vec::new(), Some(body))
            .await?
            .into_result()
    }

    async fn update_registration(
        &self,
        id: &str,
        req: UpdateRegistrationRequest,
    ) -> Result<Registration, ApiError> {
        self.write(Method::PUT, &format!("/api/registrations/{id}"), &req)
            .await
    }

    async fn delete_registration(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/registrations/{id}")).await
    }
}

#[async_trait::async_trait]
impl CommitteesApi for HttpBackend {
    async fn list_committees(&self) -> Result<Vec<Committee>, ApiError> {
        self.get("/api/committees").await
    }

    async fn get_committee(&self, id: &str) -> Result<Committee, ApiError> {
        self.get(&format!("/api/committees/{id}")).await
    }

    async fn featured_committees(&self) -> Result<Vec<Committee>, ApiError> {
        self.get("/api/committees/featured").await
    }

    async fn committees_for(&self, kind: InstitutionType) -> Result<Vec<Committee>, ApiError> {
        self.get(&format!("/api/committees/institution/{}", kind.as_str()))
            .await
    }

    async fn committee_stats(&self) -> Result<CommitteeStats, ApiError> {
        self.get("/api/committees/stats").await
    }

    async fn create_committee(&self, req: CommitteeRequest) -> Result<Committee, ApiError> {
        self.write(Method::POST, "/api/committees", &req).await
    }

    async fn update_committee(&self, id: &str, req: CommitteeRequest) -> Result<Committee, ApiError> {
        self.write(Method::PUT, &format!("/api/committees/{id}"), &req)
            .await
    }

    async fn delete_committee(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/committees/{id}")).await
    }

    async fn list_portfolios(&self, committee_id: &str) -> Result<Vec<Portfolio>, ApiError> {
        self.get(&format!("/api/committees/{committee_id}/portfolios"))
            .await
    }

    async fn create_portfolio(
        &self,
        committee_id: &str,
        req: PortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        self.write(
            Method::POST,
            &format!("/api/committees/{committee_id}/portfolios"),
            &req,
        )
        .await
    }

    async fn update_portfolio(
        &self,
        committee_id: &str,
        portfolio_id: &str,
        req: PortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        self.write(
            Method::PUT,
            &format!("/api/committees/{committee_id}/portfolios/{portfolio_id}"),
            &req,
        )
        .await
    }

    async fn delete_portfolio(&self, committee_id: &str, portfolio_id: &str) -> Result<(), ApiError> {
        self.delete(&format!(
            "/api/committees/{committee_id}/portfolios/{portfolio_id}"
        ))
        .await
    }
}

#[async_trait::async_trait]
impl UsersApi for HttpBackend {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/api/users").await
    }

    async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get(&format!("/api/users/{id}")).await
    }

    async fn create_user(&self, req: UserRequest) -> Result<User, ApiError> {
        self.write(Method::POST, "/api/users", &req).await
    }

    async fn update_user(&self, id: &str, req: UserRequest) -> Result<User, ApiError> {
        self.write(Method::PUT, &format!("/api/users/{id}"), &req).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/users/{id}")).await
    }

    async fn set_password(&self, id: &str, req: SetPasswordRequest) -> Result<(), ApiError> {
        self.write_ack(Method::PUT, &format!("/api/users/{id}/password"), &req)
            .await
    }
}

#[async_trait::async_trait]
impl PricingApi for HttpBackend {
    async fn get_pricing(&self) -> Result<Pricing, ApiError> {
        self.get("/api/pricing").await
    }

    async fn update_pricing(&self, req: UpdatePricingRequest) -> Result<Pricing, ApiError> {
        self.write(Method::PUT, "/api/pricing", &req).await
    }
}

#[async_trait::async_trait]
impl PaymentsApi for HttpBackend {
    async fn create_order(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, ApiError> {
        self.write(Method::POST, "/api/payments/create-order", &req)
            .await
    }

    async fn verify_payment(&self, req: VerifyPaymentRequest) -> Result<Value, ApiError> {
        // A verified payment may come back without a body; that is still a success.
        let body = to_body(&req)?;
        let env: Envelope<Value> = self
            .send(Method::POST, "/api/payments/verify", Vec::new(), Some(body))
            .await?;
        if !env.success {
            return Err(ApiError::Rejected(env.message));
        }
        Ok(env.data.unwrap_or(Value::Null))
    }

    async fn list_payments(&self, query: PaymentsQuery) -> Result<PaymentsPage, ApiError> {
        self.get_with("/api/payments", &query).await
    }

    async fn get_payment(&self, id: &str) -> Result<Payment, ApiError> {
        self.get(&format!("/api/payments/{id}")).await
    }

    async fn payment_stats(&self) -> Result<PaymentStats, ApiError> {
        self.get("/api/payments/stats").await
    }

    async fn transaction_logs(&self, query: LogsQuery) -> Result<LogsPage, ApiError> {
        self.get_with("/api/payments/logs", &query).await
    }

    async fn refund(&self, id: &str, req: RefundRequest) -> Result<Value, ApiError> {
        self.write(Method::POST, &format!("/api/payments/{id}/refund"), &req)
            .await
    }
}

#[async_trait::async_trait]
impl DashboardApi for HttpBackend {
    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>, ApiError> {
        self.get("/api/dashboard/stats").await
    }

    async fn recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError> {
        self.get("/api/dashboard/activity").await
    }
}

#[async_trait::async_trait]
impl HealthApi for HttpBackend {
    async fn health(&self) -> Result<Value, ApiError> {
        let resp = self
            .client
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        serde_json::from_str(&text).map_err(|_| ApiError::Other(GenericError::ParsingError))
    }

    async fn service_up(&self, service: Service) -> bool {
        match self.client.get(self.url(service.path())).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                log::warn!("{:?} health check failed: {}", service, e);
                false
            }
        }
    }
}

#[async_trait::async_trait]
impl ContactApi for HttpBackend {
    async fn submit_contact(&self, req: ContactSubmission) -> Result<(), ApiError> {
        self.write_ack(Method::POST, "/api/contact", &req).await
    }

    async fn list_contacts(&self) -> Result<Vec<ContactForm>, ApiError> {
        self.get("/api/contact").await
    }

    async fn get_contact(&self, id: &str) -> Result<ContactForm, ApiError> {
        self.get(&format!("/api/contact/{id}")).await
    }

    async fn update_contact(
        &self,
        id: &str,
        req: UpdateContactRequest,
    ) -> Result<ContactForm, ApiError> {
        self.write(Method::PUT, &format!("/api/contact/{id}"), &req).await
    }

    async fn delete_contact(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/contact/{id}")).await
    }
}

#[async_trait::async_trait]
impl PopupApi for HttpBackend {
    async fn get_popup(&self) -> Result<Option<Popup>, ApiError> {
        self.get_optional("/api/popups").await
    }

    async fn active_popup(&self) -> Result<Option<Popup>, ApiError> {
        self.get_optional("/api/popups/active").await
    }

    async fn update_popup(&self, req: UpdatePopupRequest) -> Result<Popup, ApiError> {
        self.write(Method::PUT, "/api/popups", &req).await
    }

    async fn toggle_popup(&self, is_active: bool) -> Result<Popup, ApiError> {
        self.write(
            Method::PATCH,
            "/api/popups/toggle",
            &TogglePopupRequest { is_active },
        )
        .await
    }
}

#[async_trait::async_trait]
impl MailerApi for HttpBackend {
    async fn send_mail(&self, req: SendMailRequest) -> Result<Option<u64>, ApiError> {
        let body = to_body(&req)?;
        let env: Envelope<SendMailResponse> = self
            .send(Method::POST, "/api/mailer/send", Vec::new(), Some(body))
            .await?;
        if !env.success {
            return Err(ApiError::Rejected(env.message));
        }
        Ok(env.data.and_then(|d| d.total_sent))
    }

    async fn recipients(&self, committee: Option<&str>) -> Result<Vec<MailRecipient>, ApiError> {
        let query = RecipientsQuery {
            committee: committee.map(str::to_string),
        };
        self.get_with("/api/mailer/recipients", &query).await
    }

    async fn mailer_stats(&self) -> Result<MailerStats, ApiError> {
        self.get("/api/mailer/stats").await
    }

    async fn send_test_mail(&self, req: TestMailRequest) -> Result<(), ApiError> {
        self.write_ack(Method::POST, "/api/mailer/test", &req).await
    }
}

#[async_trait::async_trait]
impl GalleryApi for HttpBackend {
    async fn list_gallery(&self, category: Option<&str>) -> Result<Vec<GalleryItem>, ApiError> {
        let query = GalleryQuery {
            category: category.map(str::to_string),
        };
        self.get_with("/api/gallery", &query).await
    }

    async fn gallery_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get("/api/gallery/categories").await
    }

    async fn create_gallery_item(&self, req: GalleryItemRequest) -> Result<GalleryItem, ApiError> {
        self.write(Method::POST, "/api/gallery", &req).await
    }

    async fn update_gallery_item(
        &self,
        id: &str,
        req: GalleryItemRequest,
    ) -> Result<GalleryItem, ApiError> {
        self.write(Method::PUT, &format!("/api/gallery/{id}"), &req).await
    }

    async fn delete_gallery_item(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/gallery/{id}")).await
    }
}
