// Playback state machine - Idle <-> Playing
//
// The controller only tracks the state; the dashboard actor owns the timer,
// so a tick can never fire once stop() has been applied.

#[derive(Debug, Default)]
pub struct PlaybackController {
    playing: bool,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Playing. Returns whether a transition happened; no-op when
    /// already playing.
    pub fn start(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    /// Playing -> Idle. No-op when already idle.
    pub fn stop(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.playing = false;
        true
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        assert!(!PlaybackController::new().is_playing());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut playback = PlaybackController::new();
        assert!(playback.start());
        assert!(!playback.start());
        assert!(playback.is_playing());
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut playback = PlaybackController::new();
        assert!(!playback.stop());
        playback.start();
        assert!(playback.stop());
        assert!(!playback.stop());
        assert!(!playback.is_playing());
    }
}
