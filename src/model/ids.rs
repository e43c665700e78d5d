use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared body of every string-backed identifier.
macro_rules! string_id_body {
    ($name:ident) => {
        impl $name {
            /// Returns the identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Declares a document-unique identifier.
///
/// Stored ids are opaque strings; documents written by other editors keep
/// whatever ids they were saved with. Fresh ids are random v4 UUIDs.
macro_rules! new_id_type {
    ($(#[$outer:meta])* pub struct $name:ident;) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        string_id_body!($name);
    };
}

/// Declares an opaque identifier owned by an external catalog.
macro_rules! new_external_id_type {
    ($(#[$outer:meta])* pub struct $name:ident;) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a catalog key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }
        }

        string_id_body!($name);
    };
}

new_id_type! {
    /// Unique identifier for a layout document.
    pub struct LayoutId;
}

new_id_type! {
    /// Unique identifier for a wall node.
    pub struct NodeId;
}

new_id_type! {
    /// Unique identifier for a wall segment.
    pub struct WallId;
}

new_id_type! {
    /// Unique identifier for a placed fixture.
    pub struct FixtureId;
}

new_id_type! {
    /// Unique identifier for a shelf level inside a fixture.
    pub struct LevelId;
}

new_id_type! {
    /// Unique identifier for a shelf slot inside a level.
    pub struct SlotId;
}

new_external_id_type! {
    /// Key of a fixture template in the template catalog.
    pub struct TemplateId;
}

new_external_id_type! {
    /// Key of a product in the product catalog.
    pub struct ProductId;
}
