use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate as exposed by the pricing API.
///
/// The API uses integer keys. Form controls hand them around as strings,
/// so every id knows how to round-trip through its textual form.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw integer value
    fn value(&self) -> i64;

    /// Textual form used in `<select>` values and URL paths
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an id coming from a form control
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn value(&self) -> i64 {
        *self
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Declares a transparent integer id newtype implementing [`AggregateId`].
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                <i64 as $crate::domain::common::AggregateId>::from_string(s).map($name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    aggregate_id!(
        /// Id used only by these tests
        SampleId
    );

    #[test]
    fn test_from_string_trims_and_parses() {
        assert_eq!(SampleId::from_string(" 42 ").unwrap(), SampleId(42));
        assert_eq!(SampleId(7).as_string(), "7");
    }

    #[test]
    fn test_from_string_rejects_garbage() {
        assert!(SampleId::from_string("").is_err());
        assert!(SampleId::from_string("4.5").is_err());
        assert!(SampleId::from_string("abc").is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&SampleId(9)).unwrap(), "9");
        let id: SampleId = serde_json::from_str("13").unwrap();
        assert_eq!(id, SampleId(13));
    }
}
