#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Delegate,
    DelegateAffairs,
    Admin,
    DevAdmin,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn is_dev_admin(&self) -> bool {
        *self == Role::DevAdmin
    }
}
