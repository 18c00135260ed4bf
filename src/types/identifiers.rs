use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Identity of a document inside a catalog.
///
/// Assigned from the insertion position, so it doubles as the final
/// tie-break of the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(u32);

impl MediaId {
    pub fn new(position: u32) -> Self {
        MediaId(position)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for MediaId {
    type Error = std::num::TryFromIntError;

    fn try_from(position: usize) -> Result<Self, Self::Error> {
        u32::try_from(position).map(MediaId)
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of a built index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexVersion(String);

impl IndexVersion {
    /// Hash posting lines (`token:id,id,...`) in the order given.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut hasher = Sha256::new();
        for line in lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        IndexVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
