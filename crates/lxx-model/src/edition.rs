use std::fmt;

/// A reference word corpus the primary text is checked against.
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
#[serde(rename_all = "lowercase")]
pub enum Edition {
    Rahlfs,
    Swete,
}

impl Edition {
    /// Preference order used to break ties between editions that match at
    /// the same locality and similarity.
    pub const ORDER: [Edition; 2] = [Edition::Rahlfs, Edition::Swete];

    pub fn as_str(self) -> &'static str {
        match self {
            Edition::Rahlfs => "rahlfs",
            Edition::Swete => "swete",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
