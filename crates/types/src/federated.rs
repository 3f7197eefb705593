use std::fmt;

use crate::Type;

/// Where a federated value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Clients,
    Server,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Clients => f.write_str("CLIENTS"),
            Placement::Server => f.write_str("SERVER"),
        }
    }
}

/// A member type placed at a group of participants.
///
/// When `all_equal` is set, every participant holds the same member value and
/// the type renders as `T@PLACEMENT`. Otherwise each participant holds its own
/// value and the type renders as `{T}@PLACEMENT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FederatedType {
    member: Box<Type>,
    placement: Placement,
    all_equal: bool,
}

impl FederatedType {
    #[must_use]
    pub fn new(member: impl Into<Type>, placement: Placement, all_equal: bool) -> Self {
        Self {
            member: Box::new(member.into()),
            placement,
            all_equal,
        }
    }

    #[must_use]
    pub fn member(&self) -> &Type {
        &self.member
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn all_equal(&self) -> bool {
        self.all_equal
    }
}

impl fmt::Display for FederatedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.all_equal {
            write!(f, "{}@{}", self.member, self.placement)
        } else {
            write!(f, "{{{}}}@{}", self.member, self.placement)
        }
    }
}
