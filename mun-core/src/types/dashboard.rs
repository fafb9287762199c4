#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub change: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl DashboardStat {
    fn zero(label: &str, icon: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            value: "0".to_string(),
            change: "0%".to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Cards shown when the stats endpoint cannot be reached.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::zero("Total Users", "Users", "blue"),
            Self::zero("Total Registrations", "UserPlus", "green"),
            Self::zero("Confirmed Payments", "CreditCard", "purple"),
            Self::zero("Active Committees", "FileText", "yellow"),
            Self::zero("Contact Submissions", "MessageSquare", "indigo"),
            Self::zero("Pending Contacts", "Clock", "orange"),
        ]
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
    pub action: String,
    pub timestamp: String,
    #[serde(default)]
    pub details: String,
}

/// Direction of a stat's month-over-month change, read from its sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl DashboardStat {
    pub fn trend(&self) -> Trend {
        if self.change.starts_with('+') {
            Trend::Up
        } else if self.change.starts_with('-') {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}
