//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_provider;
mod invoice_command;
mod invoice_repository;
mod route_cache;
mod sign_in_command;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{FixtureIdentityProvider, IdentityProvider, IdentityProviderError};
#[cfg(test)]
pub use invoice_command::MockInvoiceCommand;
pub use invoice_command::InvoiceCommand;
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
pub use invoice_repository::{FixtureInvoiceRepository, InvoiceRepository, InvoiceRepositoryError};
#[cfg(test)]
pub use route_cache::MockRouteCache;
pub use route_cache::{RouteCache, RouteCacheError};
#[cfg(test)]
pub use sign_in_command::MockSignInCommand;
pub use sign_in_command::SignInCommand;
