//! Collaborators the store talks to: the running game session and the
//! monster registry.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The running game, as seen from config reloads.
///
/// The session remembers the hash of the message of the day its clients
/// were last told about; a reload that changes the message bumps the
/// session's revision counter so clients refetch it.
pub trait GameSession: Send + Sync {
    /// Hash of the message of the day currently announced to clients.
    fn motd_hash(&self) -> String;

    /// Advance the message-of-the-day revision.
    fn increment_motd_num(&self);
}

/// Content hash of a message of the day (lower-case hex SHA-256).
pub fn motd_hash(motd: &str) -> String {
    hex::encode(Sha256::digest(motd.as_bytes()))
}

/// Despawn limits published with every load, pulled by the monster
/// registry instead of being written into it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DespawnSettings {
    /// How many floors a monster may leave its spawn before despawning.
    pub range: i32,
    /// How far (in tiles) a monster may leave its spawn before despawning.
    pub radius: i32,
}
