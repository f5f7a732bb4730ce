//! Engine capabilities
//!
//! Not every tab is backed by a full web view. A placeholder tab may not
//! support going forward, for example. Callers query the set before invoking.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Back,
    Forward,
    Reload,
    /// Load an arbitrary URL
    SetUrl,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Back,
        Capability::Forward,
        Capability::Reload,
        Capability::SetUrl,
    ];

    const fn bit(self) -> u8 {
        match self {
            Capability::Back => 1,
            Capability::Forward => 1 << 1,
            Capability::Reload => 1 << 2,
            Capability::SetUrl => 1 << 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Back => "back",
            Capability::Forward => "forward",
            Capability::Reload => "reload",
            Capability::SetUrl => "set_url",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b1111)
    }

    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    pub const fn without(self, capability: Capability) -> Self {
        Self(self.0 & !capability.bit())
    }

    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CapabilitySet::empty(), CapabilitySet::with)
    }
}
