//! Driving port for the credentials sign-in action.
//!
//! Keeps HTTP handlers independent of the identity provider so handler tests
//! can substitute a double.

use async_trait::async_trait;

use crate::domain::{AuthOutcome, Error, FormPayload};

/// Domain use-case port for signing in with a submitted form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignInCommand: Send + Sync {
    /// Authenticate the form's credentials.
    ///
    /// Rejections are an [`AuthOutcome`]; only non-authentication faults are
    /// returned as `Err`.
    async fn authenticate(&self, form: &FormPayload) -> Result<AuthOutcome, Error>;
}
