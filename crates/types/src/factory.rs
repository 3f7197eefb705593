//! Shorthand constructors for placed types.

use crate::{FederatedType, Placement, Type};

/// Places `member` at the clients, one value per client.
#[must_use]
pub fn at_clients(member: impl Into<Type>) -> Type {
    FederatedType::new(member, Placement::Clients, false).into()
}

/// Places `member` at the clients, with every client holding the same value.
#[must_use]
pub fn at_clients_all_equal(member: impl Into<Type>) -> Type {
    FederatedType::new(member, Placement::Clients, true).into()
}

/// Places `member` at the server.
#[must_use]
pub fn at_server(member: impl Into<Type>) -> Type {
    FederatedType::new(member, Placement::Server, true).into()
}
