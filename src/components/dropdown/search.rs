use std::rc::Rc;

use tracing::trace;

use crate::common::Visibility;
use crate::engine::{AnimatedProperty, LayerId, Scene};
use crate::services::Services;
use crate::text_match::TextMatch;

/// Text-input overlay narrowing the visible menu items.
///
/// Visibility toggles exactly with the menu's open/close state: shown on
/// open, hidden on close. Unlike the menu body, show/hide is an instant
/// opacity change; the filter never participates in the slower resize
/// animation. Hiding also clears the query so a reopened menu starts
/// unfiltered.
pub struct SearchFilter {
    text: String,
    visibility: Visibility,
    placeholder: String,

    layer: LayerId,
    scene: Rc<dyn Scene>,
    matcher: Rc<dyn TextMatch>,
}

impl SearchFilter {
    pub fn new(services: &Services, placeholder: impl Into<String>) -> Self {
        let layer = services.scene.create_layer();
        services.scene.set(layer, AnimatedProperty::Opacity, 0.0, None);

        Self {
            text: String::new(),
            visibility: Visibility::Hidden,
            placeholder: placeholder.into(),
            layer,
            scene: services.scene.clone(),
            matcher: services.matcher.clone(),
        }
    }

    // === Getters ===

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    // === Visibility (coupled to the menu state) ===

    pub fn pop_in(&mut self) {
        self.visibility = Visibility::Visible;
        self.scene
            .set(self.layer, AnimatedProperty::Opacity, 1.0, None);
    }

    pub fn pop_out(&mut self) {
        self.visibility = Visibility::Hidden;
        self.text.clear();
        self.scene
            .set(self.layer, AnimatedProperty::Opacity, 0.0, None);
    }

    // === Filtering ===

    /// Replace the query. Returns false when the text did not change.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        trace!(query = %text, "search filter text changed");
        self.text = text;
        true
    }

    /// Whether an item label passes the current query.
    pub fn matches(&self, label: &str) -> bool {
        self.matcher.matches(label, &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> (Rc<crate::engine::HeadlessScene>, SearchFilter) {
        let scene = Rc::new(crate::engine::HeadlessScene::new());
        let services = Services::new(scene.clone());
        let filter = SearchFilter::new(&services, "type to search…");
        (scene, filter)
    }

    #[test]
    fn test_starts_hidden_and_transparent() {
        let (scene, filter) = filter();
        assert!(!filter.is_visible());
        assert_eq!(
            scene.value_of(filter.layer(), AnimatedProperty::Opacity),
            Some(0.0)
        );
    }

    #[test]
    fn test_pop_in_is_an_instant_fade() {
        let (scene, mut filter) = filter();
        filter.pop_in();

        assert!(filter.is_visible());
        assert_eq!(
            scene.value_of(filter.layer(), AnimatedProperty::Opacity),
            Some(1.0)
        );
        // Instant show: no transition attached.
        assert_eq!(
            scene.transition_of(filter.layer(), AnimatedProperty::Opacity),
            None
        );
    }

    #[test]
    fn test_pop_out_clears_query() {
        let (_, mut filter) = filter();
        filter.pop_in();
        filter.set_text("ap");
        filter.pop_out();

        assert!(!filter.is_visible());
        assert_eq!(filter.text(), "");
    }

    #[test]
    fn test_set_text_reports_changes() {
        let (_, mut filter) = filter();
        assert!(filter.set_text("ap"));
        assert!(!filter.set_text("ap"));
        assert!(filter.set_text("app"));
    }

    #[test]
    fn test_matches_uses_injected_predicate() {
        let (_, mut filter) = filter();
        filter.set_text("ap");
        assert!(filter.matches("Apple"));
        assert!(filter.matches("Grape"));
        assert!(!filter.matches("Banana"));
    }
}
