use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use kmun_core::types::{DelegateKind, UserProfile};

use crate::{
    api::AuthApi,
    error::ClientError,
    flow::{AmountSource, FlowParams},
    notify::{Toast, Toaster},
};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub status: EventStatus,
}

pub fn conference_schedule() -> Vec<ScheduleEvent> {
    vec![
        ScheduleEvent {
            id: "1",
            title: "Opening Ceremony",
            date: "2025-09-26",
            time: "09:00 - 10:00",
            location: "Main Auditorium",
            description: "Welcome address and conference inauguration",
            status: EventStatus::Upcoming,
        },
        ScheduleEvent {
            id: "2",
            title: "Committee Session I",
            date: "2025-09-26",
            time: "10:30 - 12:30",
            location: "Committee Rooms",
            description: "First committee session with agenda setting",
            status: EventStatus::Upcoming,
        },
        ScheduleEvent {
            id: "3",
            title: "Committee Session II",
            date: "2025-09-27",
            time: "09:00 - 12:00",
            location: "Committee Rooms",
            description: "Second committee session with debate",
            status: EventStatus::Upcoming,
        },
    ]
}

/// Notifications are not served by the backend yet; these are stamped relative to `now`.
pub fn default_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            title: "Welcome to K-MUN 2025!".into(),
            message: "Thank you for registering. Please complete your payment to secure your spot."
                .into(),
            kind: NotificationKind::Info,
            created_at: now - Duration::hours(2),
            is_read: false,
        },
        Notification {
            id: "2".into(),
            title: "Payment Reminder".into(),
            message: "Please complete your registration payment within 48 hours.".into(),
            kind: NotificationKind::Warning,
            created_at: now - Duration::hours(24),
            is_read: false,
        },
    ]
}

pub struct DelegateDashboard<A: AuthApi> {
    api: Arc<A>,
    toaster: Arc<dyn Toaster>,
    profile: Option<UserProfile>,
    notifications: Vec<Notification>,
    events: Vec<ScheduleEvent>,
}

impl<A: AuthApi> DelegateDashboard<A> {
    pub fn new(api: Arc<A>, toaster: Arc<dyn Toaster>) -> Self {
        Self {
            api,
            toaster,
            profile: None,
            notifications: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.is_read = true;
        }
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.notifications = default_notifications(Utc::now());
        self.events = conference_schedule();
        match self.api.get_profile().await {
            Ok(profile) => {
                self.profile = Some(profile);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load profile: {}", e);
                self.toaster.toast(Toast::error("Failed to load user data"));
                Err(e.into())
            }
        }
    }

    /// Replaces the profile after a payment resync.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn delegate_kind(&self) -> Option<DelegateKind> {
        self.profile.as_ref().map(UserProfile::delegate_kind)
    }

    /// Parameters for the registration-fee payment, or `None` once paid.
    pub fn payment_params(&self) -> Option<FlowParams> {
        let profile = self.profile.as_ref().filter(|p| !p.has_paid())?;
        Some(FlowParams {
            user_id: profile.id.clone(),
            registration_id: profile.registration_id.clone(),
            custom_user_id: profile.user_id.clone(),
            amount: AmountSource::Pricing(profile.delegate_kind()),
        })
    }
}
