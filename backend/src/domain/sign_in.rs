//! Credentials sign-in action.
//!
//! Forwards the submitted form to the identity provider under the
//! `credentials` key and classifies the result. Authentication rejections are
//! returned as data with a user-facing message; any other provider fault is an
//! [`Error`] for the caller to handle.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{IdentityProvider, IdentityProviderError, SignInCommand};
use crate::domain::{AuthErrorKind, Error, FormPayload, UserId};

/// Provider key used for email/password sign-in.
pub const CREDENTIALS_PROVIDER: &str = "credentials";

/// Why a sign-in attempt was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// Email or password did not match an account.
    InvalidCredentials,
    /// The provider rejected the attempt for another reason.
    Unknown,
}

impl AuthRejection {
    /// Message shown to the user.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid credentials.",
            Self::Unknown => "Something went wrong.",
        }
    }
}

impl From<&AuthErrorKind> for AuthRejection {
    fn from(kind: &AuthErrorKind) -> Self {
        match kind {
            AuthErrorKind::CredentialsSignin => Self::InvalidCredentials,
            AuthErrorKind::Other(_) => Self::Unknown,
        }
    }
}

/// Result of a sign-in attempt that reached an authentication decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The provider accepted the credentials.
    Authenticated(UserId),
    /// The provider rejected the attempt.
    Rejected(AuthRejection),
}

/// Domain service implementing [`SignInCommand`] over an identity provider.
#[derive(Clone)]
pub struct CredentialsSignInService<P> {
    provider: Arc<P>,
}

impl<P> CredentialsSignInService<P> {
    /// Create the service.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> SignInCommand for CredentialsSignInService<P>
where
    P: IdentityProvider,
{
    async fn authenticate(&self, form: &FormPayload) -> Result<AuthOutcome, Error> {
        let result = self.provider.sign_in(CREDENTIALS_PROVIDER, form).await;
        classify_sign_in(result)
    }
}

fn classify_sign_in(
    result: Result<UserId, IdentityProviderError>,
) -> Result<AuthOutcome, Error> {
    match result {
        Ok(user_id) => {
            info!(user_id = %user_id, "user signed in");
            Ok(AuthOutcome::Authenticated(user_id))
        }
        Err(IdentityProviderError::Authentication { kind }) => {
            warn!(kind = %kind, "sign-in rejected");
            Ok(AuthOutcome::Rejected(AuthRejection::from(&kind)))
        }
        Err(IdentityProviderError::Unexpected { message }) => {
            error!(error = %message, "identity provider failed");
            Err(Error::service_unavailable("identity provider unavailable"))
        }
    }
}
