//! Newtype IDs for type-safe entity references.
//!
//! Entity identifiers are 12 bytes rendered as 24 lowercase hexadecimal
//! characters: a 4-byte big-endian Unix-timestamp prefix followed by 8
//! random bytes. Use the `define_id!` macro to create type-safe ID wrappers
//! that prevent accidentally mixing IDs from different entity types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`EntityId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not exactly 24 characters long.
    #[error("entity id must be exactly {expected} characters, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[error("entity id must be hexadecimal")]
    NotHex,
}

/// A raw entity identifier: 24 lowercase hex characters.
///
/// ## Examples
///
/// ```
/// use storeroom_core::EntityId;
///
/// assert!(EntityId::parse("507f1f77bcf86cd799439011").is_ok());
/// assert!(EntityId::parse("").is_err());            // empty
/// assert!(EntityId::parse("not-hex-at-all-not-hex-a").is_err());
///
/// let id = EntityId::generate();
/// assert_eq!(id.as_str().len(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Length of the hex representation.
    pub const LENGTH: usize = 24;

    /// Generate a new identifier from the current time and random bytes.
    #[must_use]
    pub fn generate() -> Self {
        let seconds = chrono::Utc::now().timestamp();
        // The timestamp prefix fits in u32 until 2106.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let prefix = (seconds as u32).to_be_bytes();
        let suffix: [u8; 8] = rand::random();

        use fmt::Write;
        let mut hex = String::with_capacity(Self::LENGTH);
        for byte in prefix.iter().chain(suffix.iter()) {
            // Writing to a String cannot fail.
            let _ = write!(hex, "{byte:02x}");
        }
        Self(hex)
    }

    /// Parse an `EntityId` from a string.
    ///
    /// Accepts exactly 24 hexadecimal digits, case-insensitive; the stored
    /// form is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has the wrong length or contains a
    /// non-hexadecimal character.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.len() != Self::LENGTH {
            return Err(IdError::WrongLength {
                expected: Self::LENGTH,
                actual: s.len(),
            });
        }

        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::NotHex);
        }

        Ok(Self(s.to_ascii_lowercase()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `EntityId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around [`EntityId`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()`, `parse()`, `as_str()`, and `into_inner()` methods
/// - `Display` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use storeroom_core::define_id;
/// define_id!(WarehouseId);
///
/// let a = WarehouseId::generate();
/// let b = WarehouseId::parse(a.as_str()).unwrap();
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($crate::types::id::EntityId);

        impl $name {
            /// Generate a new random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self($crate::types::id::EntityId::generate())
            }

            /// Parse an ID from its 24-character hex representation.
            ///
            /// # Errors
            ///
            /// Returns an error if the input is not 24 hex digits.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                $crate::types::id::EntityId::parse(s).map(Self)
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Consumes the ID and returns its inner string.
            #[must_use]
            pub fn into_inner(self) -> ::std::string::String {
                self.0.into_inner()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::core::convert::From<$crate::types::id::EntityId> for $name {
            fn from(id: $crate::types::id::EntityId) -> Self {
                Self(id)
            }
        }
    };
}

// Define standard entity IDs
define_id!(CustomerId);
define_id!(ProductId);
define_id!(OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_24_hex_chars() {
        let id = EntityId::generate();
        assert_eq!(id.as_str().len(), 24);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn parse_accepts_canonical_id() {
        let id = EntityId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn parse_normalizes_to_lowercase() {
        let id = EntityId::parse("507F1F77BCF86CD799439011").unwrap();
        assert_eq!(id.as_str(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            EntityId::parse("abc123"),
            Err(IdError::WrongLength {
                expected: 24,
                actual: 6
            })
        );
        assert!(EntityId::parse("").is_err());
        assert!(EntityId::parse("507f1f77bcf86cd7994390111").is_err());
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert_eq!(
            EntityId::parse("507f1f77bcf86cd79943901z"),
            Err(IdError::NotHex)
        );
    }

    #[test]
    fn typed_ids_round_trip_through_serde() {
        let id = CustomerId::parse("507f1f77bcf86cd799439011").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"507f1f77bcf86cd799439011\"");
        let back: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialize_rejects_malformed_id() {
        let result: Result<ProductId, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
