use std::sync::Arc;

use kmun_core::{
    messages::LoginRequest,
    types::{Role, User},
};

use crate::{
    api::{AuthApi, TokenStore},
    error::ClientError,
};

pub const DEV_ADMIN_ONLY: &str = "Only dev admins can manage portfolios";

/// The signed-in user as far as the client knows. Every check here is a UX gate;
/// the backend authorizes for real.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn can_manage_portfolios(&self) -> bool {
        self.user.role.is_dev_admin()
    }

    pub fn require_portfolio_manager(&self) -> Result<(), ClientError> {
        if self.can_manage_portfolios() {
            Ok(())
        } else {
            log::warn!("{:?} tried to change portfolios", self.user.role);
            Err(ClientError::Forbidden(DEV_ADMIN_ONLY.to_string()))
        }
    }

    /// Logs in and keeps the token for later calls.
    pub async fn login<A: AuthApi + ?Sized>(
        api: &A,
        tokens: &Arc<dyn TokenStore>,
        email: &str,
        password: &str,
    ) -> Result<Self, ClientError> {
        let resp = api
            .login(LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;
        tokens.store(resp.token);
        log::info!("signed in as {} ({:?})", resp.user.email, resp.user.role);
        Ok(Self::new(resp.user))
    }

    pub fn logout(self, tokens: &Arc<dyn TokenStore>) {
        tokens.clear();
        log::info!("signed out {}", self.user.email);
    }
}
