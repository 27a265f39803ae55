//! Scene-graph and animation service boundary.
//!
//! The dropdown components never run animations themselves. State
//! transitions issue *intents*, a target value for an animated property with
//! an optional transition, to a [`Scene`] implementation. The host
//! engine owns layout, compositing and the per-frame clock; a new intent on
//! the same `(layer, property)` pair supersedes any in-flight animation
//! (last-writer-wins), so there is no cancellation API.
//!
//! [`HeadlessScene`] is a recording implementation used as the graceful
//! default and by the unit tests.

mod headless;

pub use headless::{HeadlessScene, Intent};

use std::time::Duration;

/// Handle to a layer owned by the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// Properties the dropdown components animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Layer opacity, 0.0..=1.0. Fades of the menu body and search filter.
    Opacity,
    /// Layer width in logical pixels.
    Width,
    /// Layer height in logical pixels.
    Height,
    /// Vertical scale factor. The header chevron flips via -1.0/1.0.
    ScaleY,
}

/// Easing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    In,
    OutQuint,
}

/// Timed interpolation towards a property target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// The kit's stock transition: `OutQuint` over the given milliseconds.
    pub fn out_quint(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::OutQuint)
    }
}

/// Fire-and-forget animation surface of the host engine.
///
/// Implementations must apply `set` calls in order and treat a later call on
/// the same `(layer, property)` as superseding the earlier one. `transition:
/// None` means "snap immediately".
pub trait Scene {
    /// Allocate a new layer in the host scene graph.
    fn create_layer(&self) -> LayerId;

    /// Set `property` of `layer` to `target`, animated when a transition is
    /// given.
    fn set(
        &self,
        layer: LayerId,
        property: AnimatedProperty,
        target: f32,
        transition: Option<Transition>,
    );
}
