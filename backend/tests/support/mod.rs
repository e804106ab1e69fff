//! Shared support for the dashboard behaviour suites.

pub(crate) mod doubles;
pub(crate) mod harness;
