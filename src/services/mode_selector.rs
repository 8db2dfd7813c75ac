use std::sync::atomic::{AtomicBool, Ordering};
use crate::models::Mode;

/// Online/offline switch shared by the callers of the engine
#[derive(Debug)]
pub struct ModeSelector {
    online: AtomicBool,
}

impl ModeSelector {
    pub fn new(initial: Mode) -> Self {
        ModeSelector {
            online: AtomicBool::new(initial == Mode::Online),
        }
    }

    pub fn current_mode(&self) -> Mode {
        if self.online.load(Ordering::SeqCst) {
            Mode::Online
        } else {
            Mode::Offline
        }
    }

    /// Flip the flag and return the mode now in effect
    pub fn toggle(&self) -> Mode {
        let was_online = self.online.fetch_xor(true, Ordering::SeqCst);
        if was_online { Mode::Offline } else { Mode::Online }
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        ModeSelector::new(Mode::Online)
    }
}
