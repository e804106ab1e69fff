//! Authentication primitives: sign-in credentials and failure subtypes.
//!
//! The sign-in action forwards the raw form to an identity provider. Providers
//! that check a password use [`LoginCredentials::try_from_form`] to decode it,
//! and report rejections with an [`AuthErrorKind`] the action can discriminate.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

use crate::domain::FormPayload;

/// Domain error returned when sign-in form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not contain a local part and a domain.
    #[error("email must be a valid address")]
    InvalidEmail,
    /// Password was missing or blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated sign-in credentials.
///
/// ## Invariants
/// - `email` is trimmed and has the shape `local@domain`.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" user@nextmail.com ", "123456").unwrap();
/// assert_eq!(creds.email(), "user@nextmail.com");
/// assert_eq!(creds.password(), "123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        match normalized.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(LoginValidationError::InvalidEmail),
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Decode the `email` and `password` fields of a submitted form.
    pub fn try_from_form(form: &FormPayload) -> Result<Self, LoginValidationError> {
        let email = form.get("email").ok_or(LoginValidationError::EmptyEmail)?;
        let password = form
            .get("password")
            .ok_or(LoginValidationError::EmptyPassword)?;
        Self::try_from_parts(email, password)
    }

    /// Email address used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Discriminable authentication failure subtype reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The provider rejected the submitted credentials.
    CredentialsSignin,
    /// Any other authentication failure, keyed by the provider's type name.
    Other(String),
}

impl AuthErrorKind {
    /// Provider-facing type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CredentialsSignin => "CredentialsSignin",
            Self::Other(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthErrorKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "CredentialsSignin" => Self::CredentialsSignin,
            other => Self::Other(other.to_owned()),
        })
    }
}
