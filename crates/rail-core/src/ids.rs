//! Strongly typed identifier wrappers around natural string keys.
//!
//! Rail entities carry externally assigned codes ("NDLS", "SEC001", "12951")
//! rather than dense integer indexes, so each ID wraps a `String`.  All IDs
//! are `Ord + Hash` and implement `Borrow<str>`, so they work as sorted map
//! keys and can be looked up with plain `&str` without an allocation.
//!
//! Sorted-key iteration over `BTreeMap<TrainId, _>` / `BTreeMap<SectionId, _>`
//! is the workspace-wide ordering contract: wherever processing order is
//! observable (per-tick train stepping, section lookup tie-breaks), the order
//! is ascending ID, never incidental insertion order.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around an owned string code.
macro_rules! typed_code {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }

        // Hash/Ord of the wrapper delegate to the inner `String`, which in
        // turn agrees with `str` — the invariant `Borrow` requires.
        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_code! {
    /// Station code, the station table key (e.g. "NDLS").
    pub struct StationCode;
}

typed_code! {
    /// Section id, the section table key (e.g. "SEC001").
    pub struct SectionId;
}

typed_code! {
    /// Train id, the train table key (e.g. "12951").
    pub struct TrainId;
}

impl SectionId {
    /// Label of the sentinel id meaning "no section connects this pair".
    pub const UNKNOWN_LABEL: &'static str = "UNKNOWN";

    /// The sentinel id returned by travel estimation when no section
    /// connects two consecutive stops.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN_LABEL.to_owned())
    }

    /// `true` if this id is the unknown-section sentinel.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN_LABEL
    }
}
