use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A wallet identifier in canonical form: surrounding whitespace removed and
/// ASCII case folded. Graph node identities and query lookups both go through
/// [`WalletAddress::normalize`], so `" 0xAB "` and `"0xab"` are the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn normalize(raw: &str) -> Self { Self(raw.trim().to_ascii_lowercase()) }

    /// `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let address = Self::normalize(raw);
        if address.0.is_empty() { None } else { Some(address) }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for WalletAddress {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(raw: &str) -> Self { Self::normalize(raw) }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str { &self.0 }
}
