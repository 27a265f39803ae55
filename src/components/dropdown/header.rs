use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use super::menu::{ListenerId, MenuState};
use super::{DropdownStyle, SearchFilter};
use crate::engine::{AnimatedProperty, LayerId, Scene, Transition};
use crate::services::Services;
use crate::theme::Color;

/// Resolved header colors for the current interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderVisual {
    pub background: Color,
    pub chevron: Color,
    /// 1.0 normally, dimmed while the widget is disabled.
    pub alpha: f32,
    /// True while the bound menu is open (chevron points up).
    pub chevron_flipped: bool,
}

/// Single-line display of the current selection plus a chevron that flips
/// with the bound menu's state.
///
/// The header observes the menu through a state-change listener registered
/// by the root widget; the chevron and colors update on that event, never by
/// per-frame polling. Color precedence is fixed: while the search filter is
/// visible, filter-active styling overrides the hover palette (the chevron
/// stays neutral and only lightens on hover, the background keeps the
/// unhovered color).
pub struct DropdownHeader {
    label: String,
    hovered: bool,
    enabled: bool,
    open: bool,

    layer: LayerId,
    chevron_layer: LayerId,
    scene: Rc<dyn Scene>,

    hovered_color: Color,
    unhovered_color: Color,
    disabled_alpha: f32,
    chevron_flip: Transition,

    search: Option<Rc<RefCell<SearchFilter>>>,
    /// Registration with the menu; taken back on teardown.
    listener: Option<ListenerId>,
}

impl DropdownHeader {
    pub fn new(services: &Services, style: &DropdownStyle) -> Self {
        let layer = services.scene.create_layer();
        let chevron_layer = services.scene.create_layer();
        services.scene.set(layer, AnimatedProperty::Opacity, 1.0, None);
        services
            .scene
            .set(chevron_layer, AnimatedProperty::ScaleY, 1.0, None);

        Self {
            label: String::new(),
            hovered: false,
            enabled: true,
            open: false,
            layer,
            chevron_layer,
            scene: services.scene.clone(),
            hovered_color: services.theme.accent,
            unhovered_color: services.theme.surface,
            disabled_alpha: style.disabled_alpha,
            chevron_flip: style.chevron_flip,
            search: None,
            listener: None,
        }
    }

    // === Getters ===

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    pub fn chevron_layer(&self) -> LayerId {
        self.chevron_layer
    }

    // === Wiring (done by the root widget) ===

    pub fn set_search(&mut self, search: Rc<RefCell<SearchFilter>>) {
        self.search = Some(search);
    }

    pub fn set_listener(&mut self, id: ListenerId) {
        self.listener = Some(id);
    }

    /// Listener registration handed back for unregistration on teardown.
    pub fn take_listener(&mut self) -> Option<ListenerId> {
        self.listener.take()
    }

    // === State Mutations ===

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.update_visuals();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.update_visuals();
    }

    /// Invoked by the state-change listener the root registers with the
    /// menu.
    pub fn menu_state_changed(&mut self, state: MenuState) {
        self.open = state == MenuState::Open;
        trace!(open = self.open, "header observed menu state change");

        let scale_y = if self.open { -1.0 } else { 1.0 };
        self.scene.set(
            self.chevron_layer,
            AnimatedProperty::ScaleY,
            scale_y,
            Some(self.chevron_flip),
        );
        // Filter visibility changed together with the state.
        self.update_visuals();
    }

    // === Rendering Model ===

    /// Colors and alpha the header should display right now.
    pub fn visual(&self) -> HeaderVisual {
        let hovered = self.enabled && self.hovered;
        let filter_visible = self
            .search
            .as_ref()
            .map(|search| search.borrow().is_visible())
            .unwrap_or(false);

        let alpha = if self.enabled {
            1.0
        } else {
            self.disabled_alpha
        };

        let (background, chevron) = if filter_visible {
            // Filter-active styling overrides hover.
            let chevron = if hovered {
                self.hovered_color.lighten(0.5)
            } else {
                Color::WHITE
            };
            (self.unhovered_color, chevron)
        } else {
            let background = if hovered {
                self.hovered_color
            } else {
                self.unhovered_color
            };
            (background, Color::WHITE)
        };

        HeaderVisual {
            background,
            chevron,
            alpha,
            chevron_flipped: self.open,
        }
    }

    fn update_visuals(&mut self) {
        let visual = self.visual();
        self.scene
            .set(self.layer, AnimatedProperty::Opacity, visual.alpha, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessScene;

    struct Fixture {
        scene: Rc<HeadlessScene>,
        services: Services,
    }

    fn fixture() -> Fixture {
        let scene = Rc::new(HeadlessScene::new());
        let services = Services::new(scene.clone());
        Fixture { scene, services }
    }

    fn header(fx: &Fixture) -> DropdownHeader {
        DropdownHeader::new(&fx.services, &DropdownStyle::default())
    }

    fn header_with_search(fx: &Fixture) -> (DropdownHeader, Rc<RefCell<SearchFilter>>) {
        let mut header = header(fx);
        let search = Rc::new(RefCell::new(SearchFilter::new(&fx.services, "search")));
        header.set_search(search.clone());
        (header, search)
    }

    #[test]
    fn test_idle_visual() {
        let fx = fixture();
        let header = header(&fx);

        let visual = header.visual();
        assert_eq!(visual.background, fx.services.theme.surface);
        assert_eq!(visual.chevron, Color::WHITE);
        assert_eq!(visual.alpha, 1.0);
        assert!(!visual.chevron_flipped);
    }

    #[test]
    fn test_hover_swaps_background() {
        let fx = fixture();
        let mut header = header(&fx);

        header.set_hovered(true);
        let visual = header.visual();
        assert_eq!(visual.background, fx.services.theme.accent);
        assert_eq!(visual.chevron, Color::WHITE);
    }

    #[test]
    fn test_disabled_dims_and_ignores_hover() {
        let fx = fixture();
        let mut header = header(&fx);

        header.set_enabled(false);
        header.set_hovered(true);

        let visual = header.visual();
        assert_eq!(visual.alpha, 0.3);
        // Hover palette requires an enabled widget.
        assert_eq!(visual.background, fx.services.theme.surface);
        assert_eq!(
            fx.scene.value_of(header.layer(), AnimatedProperty::Opacity),
            Some(0.3)
        );
    }

    #[test]
    fn test_filter_visible_overrides_hover() {
        let fx = fixture();
        let (mut header, search) = header_with_search(&fx);

        search.borrow_mut().pop_in();
        header.set_hovered(true);

        let visual = header.visual();
        // Background stays unhovered, chevron lightens instead.
        assert_eq!(visual.background, fx.services.theme.surface);
        assert_eq!(visual.chevron, fx.services.theme.accent.lighten(0.5));
    }

    #[test]
    fn test_filter_visible_without_hover_keeps_neutral_chevron() {
        let fx = fixture();
        let (header, search) = header_with_search(&fx);

        search.borrow_mut().pop_in();
        assert_eq!(header.visual().chevron, Color::WHITE);
    }

    #[test]
    fn test_chevron_flips_on_state_change() {
        let fx = fixture();
        let mut header = header(&fx);

        header.menu_state_changed(MenuState::Open);
        assert!(header.visual().chevron_flipped);
        assert_eq!(
            fx.scene
                .value_of(header.chevron_layer(), AnimatedProperty::ScaleY),
            Some(-1.0)
        );
        assert!(fx
            .scene
            .transition_of(header.chevron_layer(), AnimatedProperty::ScaleY)
            .is_some());

        header.menu_state_changed(MenuState::Closed);
        assert_eq!(
            fx.scene
                .value_of(header.chevron_layer(), AnimatedProperty::ScaleY),
            Some(1.0)
        );
    }

}
