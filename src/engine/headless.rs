use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{AnimatedProperty, LayerId, Scene, Transition};

/// One recorded `Scene::set` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub layer: LayerId,
    pub property: AnimatedProperty,
    pub target: f32,
    pub transition: Option<Transition>,
}

/// In-process [`Scene`] that records intents instead of rendering.
///
/// Keeps the latest target per `(layer, property)` (the last-writer-wins
/// contract) plus an ordered log of every call. Used as the default scene
/// when the host injects none, and by tests to assert on the animation
/// intents a transition issued.
#[derive(Default)]
pub struct HeadlessScene {
    next_layer: Cell<u64>,
    targets: RefCell<HashMap<(LayerId, AnimatedProperty), Intent>>,
    log: RefCell<Vec<Intent>>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest target value of a property, if one was ever set.
    pub fn value_of(&self, layer: LayerId, property: AnimatedProperty) -> Option<f32> {
        self.targets
            .borrow()
            .get(&(layer, property))
            .map(|intent| intent.target)
    }

    /// Transition of the latest intent on a property (`None` also when the
    /// latest intent snapped).
    pub fn transition_of(&self, layer: LayerId, property: AnimatedProperty) -> Option<Transition> {
        self.targets
            .borrow()
            .get(&(layer, property))
            .and_then(|intent| intent.transition)
    }

    /// Every recorded call, in order.
    pub fn intents(&self) -> Vec<Intent> {
        self.log.borrow().clone()
    }

    /// Number of recorded calls on a given property of a layer.
    pub fn intent_count(&self, layer: LayerId, property: AnimatedProperty) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|intent| intent.layer == layer && intent.property == property)
            .count()
    }

    /// Drop the call log (latest targets are kept).
    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Scene for HeadlessScene {
    fn create_layer(&self) -> LayerId {
        let id = self.next_layer.get();
        self.next_layer.set(id + 1);
        LayerId(id)
    }

    fn set(
        &self,
        layer: LayerId,
        property: AnimatedProperty,
        target: f32,
        transition: Option<Transition>,
    ) {
        let intent = Intent {
            layer,
            property,
            target,
            transition,
        };
        self.targets.borrow_mut().insert((layer, property), intent);
        self.log.borrow_mut().push(intent);
    }
}
