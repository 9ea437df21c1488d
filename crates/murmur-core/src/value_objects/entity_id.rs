//! Entity ID - 64-bit identifier shared by users, circles, murmurs and comments
//!
//! Structure of generated ids:
//! - Bits 63-22: Timestamp (milliseconds since custom epoch)
//! - Bits 21-12: Worker ID (0-1023)
//! - Bits 11-0:  Sequence number (0-4095)
//!
//! Seeded fixture ids are plain small integers ("1", "2", ...) and never
//! collide with generated ones.

use parking_lot::Mutex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque entity identifier, rendered as a decimal string on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from the wire representation
    ///
    /// Only positive decimal integers are accepted; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::positive)
            .ok_or_else(|| EntityIdParseError::InvalidFormat(s.to_string()))
    }

    /// Wrap a raw value if it is a valid (positive) id
    #[inline]
    pub fn positive(id: i64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// Worker that generated this id (0 for seeded ids)
    #[inline]
    pub fn worker_id(&self) -> u16 {
        ((self.0 >> 12) & 0x3FF) as u16
    }
}

/// Error when parsing an EntityId from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid id: {0:?}")]
    InvalidFormat(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Accepts "42" as well as 42
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EntityIdVisitor;

        impl Visitor<'_> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer entity id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                EntityId::positive(value).ok_or_else(|| {
                    de::Error::custom(format!("entity id must be positive, got {value}"))
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                let value = i64::try_from(value)
                    .map_err(|_| de::Error::custom("entity id out of range"))?;
                self.visit_i64(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                EntityId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}

/// Error returned when a generator is configured with an out-of-range worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("worker id must be < 1024, got {0}")]
pub struct InvalidWorkerId(pub u16);

#[derive(Debug, Default)]
struct GeneratorState {
    last_timestamp: i64,
    sequence: i64,
}

/// Thread-safe id generator
///
/// Up to 4096 ids per millisecond per worker. Ids from one generator are
/// strictly increasing.
#[derive(Debug)]
pub struct IdGenerator {
    worker_id: u16,
    state: Mutex<GeneratorState>,
}

impl IdGenerator {
    pub fn new(worker_id: u16) -> Result<Self, InvalidWorkerId> {
        if worker_id >= 1024 {
            return Err(InvalidWorkerId(worker_id));
        }
        Ok(Self {
            worker_id,
            state: Mutex::new(GeneratorState::default()),
        })
    }

    pub fn generate(&self) -> EntityId {
        self.generate_at(current_millis())
    }

    /// Clocks reading before the epoch are treated as just after it, so ids stay positive
    fn generate_at(&self, now_millis: i64) -> EntityId {
        let mut state = self.state.lock();
        let mut timestamp = now_millis
            .max(EntityId::EPOCH + 1)
            .max(state.last_timestamp);

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & 0xFFF;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond; borrow the next one
                timestamp += 1;
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        EntityId::new(
            ((timestamp - EntityId::EPOCH) << 22)
                | (i64::from(self.worker_id) << 12)
                | state.sequence,
        )
    }

    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            worker_id: 0,
            state: Mutex::new(GeneratorState::default()),
        }
    }
}

fn current_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(EntityId::EPOCH)
}
