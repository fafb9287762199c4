use std::{sync::Arc, time::Duration};

use futures::future::{join3, try_join};
use kmun_core::types::{ActivityItem, DashboardStat};
use tokio_util::sync::CancellationToken;

use crate::{
    api::{DashboardApi, HealthApi, Service},
    config::PortalConfig,
    error::ClientError,
    notify::{Toast, Toaster},
};

pub const STATS_FALLBACK_TOAST: &str = "Dashboard data unavailable - showing default values";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Checking,
    Up,
    Down,
}

/// Last known state of the three backend services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemStatus {
    pub database: Health,
    pub payment: Health,
    pub email: Health,
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            database: Health::Checking,
            payment: Health::Checking,
            email: Health::Checking,
        }
    }
}

impl SystemStatus {
    pub fn get(&self, service: Service) -> Health {
        match service {
            Service::Database => self.database,
            Service::Payment => self.payment,
            Service::Email => self.email,
        }
    }

    /// Text shown next to each service.
    pub fn label(&self, service: Service) -> &'static str {
        match (service, self.get(service)) {
            (_, Health::Checking) => "Checking...",
            (Service::Database, Health::Up) => "Connected",
            (Service::Database, Health::Down) => "Connection failed",
            (Service::Payment, Health::Up) => "Active",
            (Service::Payment, Health::Down) => "Service unavailable",
            (Service::Email, Health::Up) => "Operational",
            (Service::Email, Health::Down) => "Service down",
        }
    }
}

fn health(up: bool) -> Health {
    if up {
        Health::Up
    } else {
        Health::Down
    }
}

pub struct Overview<A: DashboardApi + HealthApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    stats: Vec<DashboardStat>,
    activity: Vec<ActivityItem>,
    status: SystemStatus,
}

impl<A: DashboardApi + HealthApi> Overview<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            stats: DashboardStat::defaults(),
            activity: Vec::new(),
            status: SystemStatus::default(),
        }
    }

    pub fn stats(&self) -> &[DashboardStat] {
        &self.stats
    }

    pub fn activity(&self) -> &[ActivityItem] {
        &self.activity
    }

    pub fn status(&self) -> SystemStatus {
        self.status
    }

    /// Never fails: a broken backend leaves zeroed cards and no activity.
    pub async fn load(&mut self) {
        match try_join(self.api.dashboard_stats(), self.api.recent_activity()).await {
            Ok((stats, activity)) => {
                self.stats = stats;
                self.activity = activity;
            }
            Err(e) => {
                log::warn!("dashboard data unavailable: {}", e);
                self.stats = DashboardStat::defaults();
                self.activity = Vec::new();
                self.toaster.toast(Toast::error(STATS_FALLBACK_TOAST));
            }
        }
    }

    pub async fn refresh_activity(&mut self) -> Result<(), ClientError> {
        match self.api.recent_activity().await {
            Ok(activity) => {
                self.activity = activity;
                self.toaster
                    .toast(Toast::success("Activity refreshed successfully"));
                Ok(())
            }
            Err(e) => {
                self.toaster.toast(Toast::error("Failed to refresh activity"));
                Err(e.into())
            }
        }
    }

    pub async fn check_status(&mut self) -> SystemStatus {
        let (database, payment, email) = join3(
            self.api.service_up(Service::Database),
            self.api.service_up(Service::Payment),
            self.api.service_up(Service::Email),
        )
        .await;
        self.status = SystemStatus {
            database: health(database),
            payment: health(payment),
            email: health(email),
        };
        log::debug!("system status: {:?}", self.status);
        self.status
    }

    /// Checks immediately, then every `status_poll_ms` until `stop` fires.
    pub async fn poll_status(&mut self, config: &PortalConfig, stop: CancellationToken) {
        let period = Duration::from_millis(config.status_poll_ms.max(1));
        let mut ticker = tokio::time::interval(period);
        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                _ = ticker.tick() => {
                    self.check_status().await;
                }
            }
        }
    }
}
