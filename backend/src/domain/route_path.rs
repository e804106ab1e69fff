//! Application route paths used for revalidation and redirects.

use std::fmt;

use serde::Serialize;

/// Listing page for invoices; every invoice action revalidates and returns here.
pub const INVOICES_ROUTE: RoutePath = RoutePath::from_static("/dashboard/invoices");

/// Landing page after a successful sign-in.
pub const DASHBOARD_ROUTE: RoutePath = RoutePath::from_static("/dashboard");

/// Validation errors returned by [`RoutePath::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutePathValidationError {
    /// Path does not start with `/`.
    #[error("route path must be absolute")]
    NotAbsolute,
    /// Path contains whitespace or control characters.
    #[error("route path must not contain whitespace")]
    ContainsWhitespace,
}

/// Absolute, application-relative route path such as `/dashboard/invoices`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoutePath(std::borrow::Cow<'static, str>);

impl RoutePath {
    /// Validate and construct a route path.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::RoutePath;
    ///
    /// assert!(RoutePath::new("/dashboard").is_ok());
    /// assert!(RoutePath::new("dashboard").is_err());
    /// ```
    pub fn new(path: impl Into<String>) -> Result<Self, RoutePathValidationError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(RoutePathValidationError::NotAbsolute);
        }
        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(RoutePathValidationError::ContainsWhitespace);
        }
        Ok(Self(path.into()))
    }

    const fn from_static(path: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(path))
    }

    /// Borrow the path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful action outcome: the route to mark stale and the route to
/// navigate to.
///
/// Actions return this value instead of performing navigation themselves so
/// that the caller runs cache revalidation and the redirect after every
/// fallible step has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRedirect {
    revalidate: Option<RoutePath>,
    location: RoutePath,
}

impl ActionRedirect {
    /// Revalidate `path` and redirect to the same path.
    pub fn revalidate_and_redirect(path: RoutePath) -> Self {
        Self {
            revalidate: Some(path.clone()),
            location: path,
        }
    }

    /// Redirect without revalidating any cached route.
    pub fn redirect(location: RoutePath) -> Self {
        Self {
            revalidate: None,
            location,
        }
    }

    /// Route whose cached rendering must be marked stale, if any.
    pub fn revalidate(&self) -> Option<&RoutePath> {
        self.revalidate.as_ref()
    }

    /// Redirect target.
    pub fn location(&self) -> &RoutePath {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("relative/path", RoutePathValidationError::NotAbsolute)]
    #[case("", RoutePathValidationError::NotAbsolute)]
    #[case("/dash board", RoutePathValidationError::ContainsWhitespace)]
    fn rejects_invalid_paths(#[case] raw: &str, #[case] expected: RoutePathValidationError) {
        assert_eq!(RoutePath::new(raw).expect_err("invalid path"), expected);
    }

    #[rstest]
    fn revalidate_and_redirect_targets_same_route() {
        let redirect = ActionRedirect::revalidate_and_redirect(INVOICES_ROUTE);
        assert_eq!(redirect.revalidate(), Some(&INVOICES_ROUTE));
        assert_eq!(redirect.location().as_str(), "/dashboard/invoices");
    }
}
