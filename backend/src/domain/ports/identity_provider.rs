//! Driven port for the external identity provider.
//!
//! The sign-in action names a provider and forwards the raw form. Providers
//! report rejections with a discriminable [`AuthErrorKind`]; anything that is
//! not an authentication decision is `Unexpected`.
use async_trait::async_trait;

use crate::domain::{AuthErrorKind, CREDENTIALS_PROVIDER, FormPayload, LoginCredentials, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityProviderError {
        /// The provider made an authentication decision against the caller.
        Authentication { kind: AuthErrorKind } => "authentication failed: {kind}",
        /// The provider failed for a reason unrelated to the credentials.
        Unexpected { message: String } => "identity provider failure: {message}",
    }
}

/// Identity provider capable of signing a user in from a form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in through `provider` with the submitted form.
    async fn sign_in(
        &self,
        provider: &str,
        form: &FormPayload,
    ) -> Result<UserId, IdentityProviderError>;
}

/// In-memory provider with a single seeded account.
///
/// Accepts `user@nextmail.com` / `123456` through the `credentials` provider
/// and yields a fixed user id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityProvider;

impl FixtureIdentityProvider {
    const EMAIL: &'static str = "user@nextmail.com";
    const PASSWORD: &'static str = "123456";
    const USER_ID: &'static str = "410544b2-4001-4271-9855-fec4b6a6442a";
}

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn sign_in(
        &self,
        provider: &str,
        form: &FormPayload,
    ) -> Result<UserId, IdentityProviderError> {
        if provider != CREDENTIALS_PROVIDER {
            return Err(IdentityProviderError::authentication(
                AuthErrorKind::Other("InvalidProvider".to_owned()),
            ));
        }
        let credentials = LoginCredentials::try_from_form(form)
            .map_err(|_| IdentityProviderError::authentication(AuthErrorKind::CredentialsSignin))?;
        if credentials.email() != Self::EMAIL || credentials.password() != Self::PASSWORD {
            return Err(IdentityProviderError::authentication(
                AuthErrorKind::CredentialsSignin,
            ));
        }
        UserId::new(Self::USER_ID)
            .map_err(|err| IdentityProviderError::unexpected(format!("invalid fixture user id: {err}")))
    }
}
