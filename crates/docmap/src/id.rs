use crate::Error;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use std::{fmt, str::FromStr, time::SystemTime};

/// A canonical entity identifier.
///
/// Twelve raw bytes, rendered as a 24-character lowercase hex string. This is
/// the representation documents carry in their `_id` field.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId([u8; 12]);

impl EntityId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Mint a new identifier: a 4-byte big-endian UNIX-seconds timestamp
    /// followed by 8 random bytes.
    pub fn generate() -> Self {
        use rand::RngCore;

        let seconds = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0);

        let mut bytes = [0; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..]);

        Self(bytes)
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        if s.len() != 24 {
            return Err(Error::InvalidReference);
        }

        let mut bytes = [0; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidReference)?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({self})")
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&s), &"a 24-character hex string")
        })
    }
}
