//! Run identifiers.

use std::fmt;

use rand::Rng;

/// Short unique label for one simulation execution.
///
/// Generated once at engine construction and used only to name persisted
/// artifacts — it is not part of any event's content, and two runs over
/// identical inputs still produce identical event sequences.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunId(String);

impl RunId {
    pub const LEN: usize = 8;

    /// Generate a fresh 8-character lowercase alphanumeric id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..Self::LEN)
            .map(|_| char::from(rng.sample(rand::distributions::Alphanumeric)).to_ascii_lowercase())
            .collect();
        Self(id)
    }

    /// Wrap an externally chosen id (e.g. to re-persist a prior run).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
