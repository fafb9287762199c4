use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

use chrono::Utc;
use kmun_client::api::{
    AuthApi, CommitteesApi, ContactApi, DashboardApi, GalleryApi, HealthApi, MailerApi, PaymentsApi,
    PopupApi, PricingApi, RegistrationsApi, Service,
};
use kmun_core::{
    format::error::{ApiError, GenericError},
    messages::{
        ChangePasswordRequest, CommitteeRequest, CommitteeStats, ContactSubmission,
        CreateOrderRequest, CreateOrderResponse, GalleryItemRequest, LoginRequest, LoginResponse,
        LogsPage, LogsQuery, MailRecipient, MailerStats, NewRegistration, PaymentsPage,
        PaymentsQuery, PortfolioRequest, RefundRequest, SendMailRequest, TestMailRequest,
        UpdateContactRequest, UpdatePopupRequest, UpdatePricingRequest, UpdateProfileRequest,
        UpdateRegistrationRequest, VerifyPaymentRequest,
    },
    types::{
        ActivityItem, Committee, ContactForm, DashboardStat, GalleryItem, InstitutionType,
        Pagination, Payment, PaymentStats, Popup, Portfolio, Pricing, Registration,
        TransactionLog, User, UserProfile,
    },
};
use serde_json::{json, Value};

/// Backend state the in-memory API serves from.
#[derive(Default)]
pub struct State {
    pub committees: Vec<Committee>,
    pub contacts: Vec<ContactForm>,
    pub gallery: Vec<GalleryItem>,
    pub categories: Vec<String>,
    pub pricing: Option<Pricing>,
    pub popup: Option<Popup>,
    pub registrations: Vec<Registration>,
    pub payments: Vec<Payment>,
    pub logs: Vec<TransactionLog>,
    pub profile: Option<UserProfile>,
    pub stats: Vec<DashboardStat>,
    pub activity: Vec<ActivityItem>,
    pub services_up: HashSet<Service>,
    pub mail_total: Option<u64>,
    pub sent_mail: Vec<SendMailRequest>,
    pub last_payments_query: Option<PaymentsQuery>,
    pub last_logs_query: Option<LogsQuery>,
    pub refunds: Vec<(String, RefundRequest)>,
    /// (email, password, user) triples that may sign in.
    pub accounts: Vec<(String, String, User)>,
    pub seq: u64,
}

impl State {
    fn next_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{prefix}_{}", self.seq)
    }
}

#[derive(Default)]
pub struct MemoryApi {
    state: Mutex<State>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
}

pub fn unsupported() -> ApiError {
    ApiError::Other(GenericError::MissingData)
}

impl MemoryApi {
    pub fn new(state: State) -> Self {
        Self {
            state: Mutex::new(state),
            ..Default::default()
        }
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Every call made so far, by method name.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| *c == name).count()
    }

    /// Makes `name` answer with a bare HTTP 500 from now on.
    pub fn fail(&self, name: &'static str) {
        self.failing.lock().unwrap().insert(name);
    }

    fn call(&self, name: &str) -> Result<MutexGuard<'_, State>, ApiError> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.failing.lock().unwrap().contains(name) {
            return Err(ApiError::Http {
                status: 500,
                message: None,
            });
        }
        Ok(self.state())
    }
}

#[async_trait::async_trait]
impl AuthApi for MemoryApi {
    async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        let state = self.call("login")?;
        state
            .accounts
            .iter()
            .find(|(email, password, _)| *email == req.email && *password == req.password)
            .map(|(_, _, user)| LoginResponse {
                token: format!("token-{}", user.id),
                user: user.clone(),
            })
            .ok_or_else(|| ApiError::Http {
                status: 401,
                message: Some("Invalid credentials".into()),
            })
    }
    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.call("get_profile")?.profile.clone().ok_or_else(unsupported)
    }
    async fn update_profile(&self, _req: UpdateProfileRequest) -> Result<UserProfile, ApiError> {
        Err(unsupported())
    }
    async fn change_password(&self, _req: ChangePasswordRequest) -> Result<(), ApiError> {
        Err(unsupported())
    }
}

#[async_trait::async_trait]
impl CommitteesApi for MemoryApi {
    async fn list_committees(&self) -> Result<Vec<Committee>, ApiError> {
        Ok(self.call("list_committees")?.committees.clone())
    }
    async fn get_committee(&self, id: &str) -> Result<Committee, ApiError> {
        let state = self.call("get_committee")?;
        state
            .committees
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(unsupported)
    }
    async fn featured_committees(&self) -> Result<Vec<Committee>, ApiError> {
        Err(unsupported())
    }
    async fn committees_for(&self, _kind: InstitutionType) -> Result<Vec<Committee>, ApiError> {
        Err(unsupported())
    }
    async fn committee_stats(&self) -> Result<CommitteeStats, ApiError> {
        Err(unsupported())
    }
    async fn create_committee(&self, req: CommitteeRequest) -> Result<Committee, ApiError> {
        let mut state = self.call("create_committee")?;
        let committee = Committee {
            id: state.next_id("c"),
            name: req.name,
            institution_type: req.institution_type,
            description: req.description,
            capacity: req.capacity,
            logo: None,
            is_featured: None,
            portfolios: Vec::new(),
            created_at: Some(Utc::now()),
        };
        state.committees.push(committee.clone());
        Ok(committee)
    }
    async fn update_committee(&self, id: &str, req: CommitteeRequest) -> Result<Committee, ApiError> {
        let mut state = self.call("update_committee")?;
        let committee = state
            .committees
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(unsupported)?;
        committee.name = req.name;
        committee.institution_type = req.institution_type;
        committee.description = req.description;
        committee.capacity = req.capacity;
        Ok(committee.clone())
    }
    async fn delete_committee(&self, id: &str) -> Result<(), ApiError> {
        self.call("delete_committee")?.committees.retain(|c| c.id != id);
        Ok(())
    }
    async fn list_portfolios(&self, committee_id: &str) -> Result<Vec<Portfolio>, ApiError> {
        let state = self.call("list_portfolios")?;
        Ok(state
            .committees
            .iter()
            .find(|c| c.id == committee_id)
            .map(|c| c.portfolios.clone())
            .unwrap_or_default())
    }
    async fn create_portfolio(
        &self,
        committee_id: &str,
        req: PortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        let mut state = self.call("create_portfolio")?;
        let id = state.next_id("p");
        let committee = state
            .committees
            .iter_mut()
            .find(|c| c.id == committee_id)
            .ok_or_else(unsupported)?;
        let portfolio = Portfolio {
            id,
            name: req.name,
            description: req.description,
            capacity: req.capacity,
            registered: 0,
        };
        committee.portfolios.push(portfolio.clone());
        Ok(portfolio)
    }
    async fn update_portfolio(
        &self,
        committee_id: &str,
        portfolio_id: &str,
        req: PortfolioRequest,
    ) -> Result<Portfolio, ApiError> {
        let mut state = self.call("update_portfolio")?;
        let portfolio = state
            .committees
            .iter_mut()
            .find(|c| c.id == committee_id)
            .and_then(|c| c.portfolios.iter_mut().find(|p| p.id == portfolio_id))
            .ok_or_else(unsupported)?;
        portfolio.name = req.name;
        portfolio.description = req.description;
        portfolio.capacity = req.capacity;
        Ok(portfolio.clone())
    }
    async fn delete_portfolio(&self, committee_id: &str, portfolio_id: &str) -> Result<(), ApiError> {
        let mut state = self.call("delete_portfolio")?;
        if let Some(c) = state.committees.iter_mut().find(|c| c.id == committee_id) {
            c.portfolios.retain(|p| p.id != portfolio_id);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ContactApi for MemoryApi {
    async fn submit_contact(&self, _req: ContactSubmission) -> Result<(), ApiError> {
        Err(unsupported())
    }
    async fn list_contacts(&self) -> Result<Vec<ContactForm>, ApiError> {
        Ok(self.call("list_contacts")?.contacts.clone())
    }
    async fn get_contact(&self, _id: &str) -> Result<ContactForm, ApiError> {
        Err(unsupported())
    }
    async fn update_contact(
        &self,
        id: &str,
        req: UpdateContactRequest,
    ) -> Result<ContactForm, ApiError> {
        let mut state = self.call("update_contact")?;
        let contact = state
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(unsupported)?;
        contact.status = req.status;
        contact.notes = req.notes;
        Ok(contact.clone())
    }
    async fn delete_contact(&self, id: &str) -> Result<(), ApiError> {
        self.call("delete_contact")?.contacts.retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl GalleryApi for MemoryApi {
    async fn list_gallery(&self, category: Option<&str>) -> Result<Vec<GalleryItem>, ApiError> {
        let state = self.call("list_gallery")?;
        Ok(state
            .gallery
            .iter()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .cloned()
            .collect())
    }
    async fn gallery_categories(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.call("gallery_categories")?.categories.clone())
    }
    async fn create_gallery_item(&self, req: GalleryItemRequest) -> Result<GalleryItem, ApiError> {
        let mut state = self.call("create_gallery_item")?;
        let item = GalleryItem {
            id: state.next_id("g"),
            title: req.title,
            kind: req.kind,
            image_url: req.image_url,
            video_url: req.video_url,
            category: req.category,
        };
        state.gallery.push(item.clone());
        Ok(item)
    }
    async fn update_gallery_item(
        &self,
        _id: &str,
        _req: GalleryItemRequest,
    ) -> Result<GalleryItem, ApiError> {
        Err(unsupported())
    }
    async fn delete_gallery_item(&self, id: &str) -> Result<(), ApiError> {
        self.call("delete_gallery_item")?.gallery.retain(|i| i.id != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl PricingApi for MemoryApi {
    async fn get_pricing(&self) -> Result<Pricing, ApiError> {
        self.call("get_pricing")?.pricing.clone().ok_or_else(unsupported)
    }
    async fn update_pricing(&self, req: UpdatePricingRequest) -> Result<Pricing, ApiError> {
        let mut state = self.call("update_pricing")?;
        let pricing = Pricing {
            id: Some("pricing".into()),
            internal_delegate: req.internal_delegate,
            external_delegate: req.external_delegate,
            updated_at: Some(Utc::now()),
        };
        state.pricing = Some(pricing.clone());
        Ok(pricing)
    }
}

#[async_trait::async_trait]
impl PopupApi for MemoryApi {
    async fn get_popup(&self) -> Result<Option<Popup>, ApiError> {
        Ok(self.call("get_popup")?.popup.clone())
    }
    async fn active_popup(&self) -> Result<Option<Popup>, ApiError> {
        Ok(self.call("active_popup")?.popup.clone())
    }
    async fn update_popup(&self, req: UpdatePopupRequest) -> Result<Popup, ApiError> {
        let mut state = self.call("update_popup")?;
        let popup = Popup {
            id: "popup".into(),
            heading: req.heading,
            text: req.text,
            is_active: req.is_active,
            created_at: None,
            updated_at: Some(Utc::now()),
        };
        state.popup = Some(popup.clone());
        Ok(popup)
    }
    async fn toggle_popup(&self, is_active: bool) -> Result<Popup, ApiError> {
        let mut state = self.call("toggle_popup")?;
        let popup = state.popup.as_mut().ok_or_else(unsupported)?;
        popup.is_active = is_active;
        Ok(popup.clone())
    }
}

#[async_trait::async_trait]
impl MailerApi for MemoryApi {
    async fn send_mail(&self, req: SendMailRequest) -> Result<Option<u64>, ApiError> {
        let mut state = self.call("send_mail")?;
        state.sent_mail.push(req);
        Ok(state.mail_total)
    }
    async fn recipients(&self, _committee: Option<&str>) -> Result<Vec<MailRecipient>, ApiError> {
        Err(unsupported())
    }
    async fn mailer_stats(&self) -> Result<MailerStats, ApiError> {
        Err(unsupported())
    }
    async fn send_test_mail(&self, _req: TestMailRequest) -> Result<(), ApiError> {
        Err(unsupported())
    }
}

#[async_trait::async_trait]
impl RegistrationsApi for MemoryApi {
    async fn list_registrations(&self) -> Result<Vec<Registration>, ApiError> {
        Ok(self.call("list_registrations")?.registrations.clone())
    }
    async fn get_registration(&self, _id: &str) -> Result<Registration, ApiError> {
        Err(unsupported())
    }
    async fn create_registration(&self, _req: NewRegistration) -> Result<Registration, ApiError> {
        Err(unsupported())
    }
    async fn update_registration(
        &self,
        id: &str,
        req: UpdateRegistrationRequest,
    ) -> Result<Registration, ApiError> {
        let state = self.call("update_registration")?;
        // the server copy is left alone so local patching is observable
        let mut r = state
            .registrations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(unsupported)?;
        if let Some(status) = req.status {
            r.status = status;
        }
        Ok(r)
    }
    async fn delete_registration(&self, _id: &str) -> Result<(), ApiError> {
        Err(unsupported())
    }
}

#[async_trait::async_trait]
impl PaymentsApi for MemoryApi {
    async fn create_order(&self, _req: CreateOrderRequest) -> Result<CreateOrderResponse, ApiError> {
        Err(unsupported())
    }
    async fn verify_payment(&self, _req: VerifyPaymentRequest) -> Result<Value, ApiError> {
        Err(unsupported())
    }
    async fn list_payments(&self, query: PaymentsQuery) -> Result<PaymentsPage, ApiError> {
        let mut state = self.call("list_payments")?;
        let payments: Vec<Payment> = state
            .payments
            .iter()
            .filter(|p| query.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        state.last_payments_query = Some(query);
        Ok(PaymentsPage {
            pagination: Pagination {
                page: 1,
                limit: 10,
                total: payments.len() as u64,
                pages: 3,
            },
            payments,
        })
    }
    async fn get_payment(&self, _id: &str) -> Result<Payment, ApiError> {
        Err(unsupported())
    }
    async fn payment_stats(&self) -> Result<PaymentStats, ApiError> {
        let state = self.call("payment_stats")?;
        Ok(PaymentStats {
            total_payments: state.payments.len() as u64,
            success_rate: "100.00".into(),
            ..Default::default()
        })
    }
    async fn transaction_logs(&self, query: LogsQuery) -> Result<LogsPage, ApiError> {
        let mut state = self.call("transaction_logs")?;
        state.last_logs_query = Some(query);
        Ok(LogsPage {
            logs: state.logs.clone(),
            pagination: Pagination::default(),
        })
    }
    async fn refund(&self, id: &str, req: RefundRequest) -> Result<Value, ApiError> {
        let mut state = self.call("refund")?;
        state.refunds.push((id.to_string(), req));
        Ok(json!({ "id": id, "status": "REFUNDED" }))
    }
}

#[async_trait::async_trait]
impl DashboardApi for MemoryApi {
    async fn dashboard_stats(&self) -> Result<Vec<DashboardStat>, ApiError> {
        Ok(self.call("dashboard_stats")?.stats.clone())
    }
    async fn recent_activity(&self) -> Result<Vec<ActivityItem>, ApiError> {
        Ok(self.call("recent_activity")?.activity.clone())
    }
}

#[async_trait::async_trait]
impl HealthApi for MemoryApi {
    async fn health(&self) -> Result<Value, ApiError> {
        self.call("health")?;
        Ok(json!({ "status": "ok" }))
    }
    async fn service_up(&self, service: Service) -> bool {
        self.calls.lock().unwrap().push(format!("service_up:{service:?}"));
        self.state().services_up.contains(&service)
    }
}

pub fn dev_admin() -> User {
    user("DEV_ADMIN")
}

pub fn user(role: &str) -> User {
    serde_json::from_value(json!({
        "id": "admin_1",
        "firstName": "Dev",
        "lastName": "Admin",
        "email": "dev@kmun.in",
        "role": role,
    }))
    .unwrap()
}
