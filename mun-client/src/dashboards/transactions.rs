use std::sync::Arc;

use futures::future::try_join3;
use kmun_core::{
    messages::{LogsQuery, PaymentsQuery, RefundRequest},
    types::{Payment, PaymentStats, PaymentStatus, TransactionLog},
};

use crate::{
    api::PaymentsApi,
    error::ClientError,
    notify::{Toast, Toaster},
};

use super::any_contains_ci;

pub const PAYMENTS_PAGE_SIZE: u32 = 10;
pub const RECENT_LOGS_LIMIT: u32 = 20;

pub struct TransactionsDashboard<A: PaymentsApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    payments: Vec<Payment>,
    stats: Option<PaymentStats>,
    logs: Vec<TransactionLog>,
    page: u32,
    total_pages: u32,
    status: Option<PaymentStatus>,
    pub search: String,
}

impl<A: PaymentsApi> TransactionsDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            payments: Vec::new(),
            stats: None,
            logs: Vec::new(),
            page: 1,
            total_pages: 1,
            status: None,
            search: String::new(),
        }
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn stats(&self) -> Option<&PaymentStats> {
        self.stats.as_ref()
    }

    pub fn logs(&self) -> &[TransactionLog] {
        &self.logs
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn status(&self) -> Option<PaymentStatus> {
        self.status
    }

    /// Payments page, stats and recent logs in one round.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let payments = self.api.list_payments(PaymentsQuery {
            page: Some(self.page),
            limit: Some(PAYMENTS_PAGE_SIZE),
            status: self.status,
            user_id: None,
        });
        let logs = self.api.transaction_logs(LogsQuery {
            page: Some(1),
            limit: Some(RECENT_LOGS_LIMIT),
            ..Default::default()
        });
        match try_join3(payments, self.api.payment_stats(), logs).await {
            Ok((page, stats, logs)) => {
                log::debug!(
                    "loaded {} payments (page {}/{}), {} logs",
                    page.payments.len(),
                    self.page,
                    page.pagination.pages,
                    logs.logs.len()
                );
                self.payments = page.payments;
                self.total_pages = page.pagination.pages.max(1);
                self.stats = Some(stats);
                self.logs = logs.logs;
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load transactions: {}", e);
                self.toaster
                    .toast(Toast::error("Failed to load transaction data"));
                Err(e.into())
            }
        }
    }

    pub async fn set_status(&mut self, status: Option<PaymentStatus>) -> Result<(), ClientError> {
        self.status = status;
        self.page = 1;
        self.load().await
    }

    /// Out-of-range pages are clamped to the known page count.
    pub async fn go_to_page(&mut self, page: u32) -> Result<(), ClientError> {
        self.page = page.clamp(1, self.total_pages.max(1));
        self.load().await
    }

    /// Search applies to the current page only.
    pub fn visible(&self) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|p| match &p.user {
                Some(u) => any_contains_ci(
                    &[
                        u.first_name.as_str(),
                        u.last_name.as_str(),
                        u.email.as_str(),
                        p.id.as_str(),
                    ],
                    &self.search,
                ),
                None => any_contains_ci(&[p.id.as_str()], &self.search),
            })
            .collect()
    }

    pub async fn refund(&mut self, id: &str, amount: u64, reason: &str) -> Result<(), ClientError> {
        let req = RefundRequest {
            amount,
            reason: reason.to_string(),
        };
        match self.api.refund(id, req).await {
            Ok(_) => {
                log::info!("refunded payment {}", id);
                self.toaster.toast(Toast::success("Refund processed successfully"));
                self.load().await
            }
            Err(e) => {
                self.toaster
                    .toast(Toast::error(e.message_or("Failed to process refund")));
                Err(e.into())
            }
        }
    }
}
