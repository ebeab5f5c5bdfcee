//! Strongly-typed identifiers used across the domain.
//!
//! Every business record carries a human-readable string id (`V-100`, `P-1000`,
//! `SO-9000`, ...). Ids are immutable once assigned and unique within their
//! collection.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a business record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Build an id of the form `{prefix}-{number}`.
    pub fn numbered(prefix: &str, number: u64) -> Self {
        Self(format!("{prefix}-{number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("identifier cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Declare a domain-specific id newtype over [`EntityId`].
///
/// The generated type is `#[serde(transparent)]`, displays as the inner id and
/// parses through [`EntityId`]'s `FromStr`.
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $crate::EntityId);

        impl $name {
            /// Id prefix used for generated records.
            pub const PREFIX: &'static str = $prefix;

            pub fn new(id: $crate::EntityId) -> Self {
                Self(id)
            }

            /// Build the `{PREFIX}-{number}` id.
            pub fn numbered(number: u64) -> Self {
                Self($crate::EntityId::numbered(Self::PREFIX, number))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$crate::EntityId>().map(Self)
            }
        }
    };
}
