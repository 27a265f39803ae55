//! Audio feedback cues for dropdown state transitions.
//!
//! Playback is fire-and-forget: the menu calls [`AudioService::play`] when a
//! transition wants feedback and never waits for or inspects the result. The
//! service is optional: with no backend injected the cues are skipped
//! silently and the transition proceeds unaffected.

use tracing::debug;

/// Feedback sound tied to a menu state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    DropdownOpen,
    DropdownClose,
}

impl Cue {
    /// Sample lookup name in the host's sound theme.
    pub fn sample_name(&self) -> &'static str {
        match self {
            Cue::DropdownOpen => "UI/dropdown-open",
            Cue::DropdownClose => "UI/dropdown-close",
        }
    }
}

/// Sample playback backend supplied by the host.
pub trait AudioService {
    /// Play a cue. Non-blocking; a missing sample must be skipped silently.
    fn play(&self, cue: Cue);
}

/// Plays cues into the void, logging at debug level.
///
/// Handy for demos and hosts that want transition logging without wiring a
/// real backend.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play(&self, cue: Cue) {
        debug!("skipping cue without audio backend: {}", cue.sample_name());
    }
}
