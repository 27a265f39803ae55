//! Constructor-injected service bundle.
//!
//! Components resolve their collaborators once, at construction, from a
//! [`Services`] value. Every service has a graceful default: a
//! [`HeadlessScene`], no audio backend, the built-in dark palette and
//! case-insensitive substring matching.

use std::rc::Rc;

use crate::audio::AudioService;
use crate::engine::{HeadlessScene, Scene};
use crate::text_match::{SubstringMatch, TextMatch};
use crate::theme::Theme;

#[derive(Clone)]
pub struct Services {
    pub scene: Rc<dyn Scene>,
    pub audio: Option<Rc<dyn AudioService>>,
    pub theme: Theme,
    pub matcher: Rc<dyn TextMatch>,
}

impl Services {
    /// Service bundle on top of a host scene; other services take their
    /// defaults.
    pub fn new(scene: Rc<dyn Scene>) -> Self {
        Self {
            scene,
            audio: None,
            theme: Theme::default(),
            matcher: Rc::new(SubstringMatch),
        }
    }

    // === Builder API ===

    pub fn with_audio(mut self, audio: Rc<dyn AudioService>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_matcher(mut self, matcher: Rc<dyn TextMatch>) -> Self {
        self.matcher = matcher;
        self
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(Rc::new(HeadlessScene::new()))
    }
}
