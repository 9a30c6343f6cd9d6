use blacktek_config::{GameSession, motd_hash};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct SessionState {
    motd_hash: String,
    motd_num: u32,
}

/// Game session that remembers the announced motd hash and counts
/// revision bumps.
#[derive(Debug, Default)]
pub struct RecordingSession {
    state: Mutex<SessionState>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose clients were last told about `motd`.
    pub fn announcing(motd: &str) -> Self {
        Self {
            state: Mutex::new(SessionState {
                motd_hash: motd_hash(motd),
                motd_num: 0,
            }),
        }
    }

    /// Announce a new message, as the game does after a bump.
    pub fn announce(&self, motd: &str) {
        self.state.lock().motd_hash = motd_hash(motd);
    }

    pub fn motd_num(&self) -> u32 {
        self.state.lock().motd_num
    }
}

impl GameSession for RecordingSession {
    fn motd_hash(&self) -> String {
        self.state.lock().motd_hash.clone()
    }

    fn increment_motd_num(&self) {
        self.state.lock().motd_num += 1;
    }
}
