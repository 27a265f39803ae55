use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::header::DropdownHeader;
use super::menu::{DropdownMenu, MenuState};
use super::DropdownStyle;
use crate::components::menu_item::MenuItem;
use crate::input::DismissAction;
use crate::services::Services;

type ValueListener<T> = Rc<dyn Fn(&T)>;

/// Single-selection dropdown: a header showing the current value plus a
/// popup menu of items.
///
/// The root owns the current value and the wiring between its parts. The
/// header never reaches into the menu directly; it observes state changes
/// through a listener the root registers at construction and removes again
/// when the widget is dropped. Selection flows one way: a commit in the menu
/// reports the chosen value, the root stores it and pushes it back down as
/// the selected row and the header label.
pub struct Dropdown<T> {
    services: Services,
    menu: Rc<RefCell<DropdownMenu<T>>>,
    header: Rc<RefCell<DropdownHeader>>,

    current_value: Option<T>,
    enabled: bool,
    on_value_changed: Option<ValueListener<T>>,
}

impl<T: Clone + PartialEq> Dropdown<T> {
    pub fn new(services: &Services, style: DropdownStyle) -> Self {
        let menu = Rc::new(RefCell::new(DropdownMenu::new(services, style.clone())));
        let header = Rc::new(RefCell::new(DropdownHeader::new(services, &style)));

        let listener = menu.borrow_mut().add_state_listener({
            let header = header.clone();
            Rc::new(move |state| header.borrow_mut().menu_state_changed(state))
        });
        header.borrow_mut().set_listener(listener);

        Self {
            services: services.clone(),
            menu,
            header,
            current_value: None,
            enabled: true,
            on_value_changed: None,
        }
    }

    // === Builder API ===

    /// Attach the search filter and share its handle with the header so the
    /// filter-active styling can take over while it is shown.
    pub fn with_search(self) -> Self {
        let search = self.menu.borrow_mut().enable_search(&self.services);
        self.header.borrow_mut().set_search(search);
        self
    }

    pub fn with_items(mut self, items: Vec<MenuItem<T>>) -> Self {
        self.set_items(items);
        self
    }

    pub fn with_on_value_changed(mut self, listener: ValueListener<T>) -> Self {
        self.on_value_changed = Some(listener);
        self
    }

    // === Getters ===

    pub fn current_value(&self) -> Option<&T> {
        self.current_value.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_open(&self) -> bool {
        self.menu.borrow().is_open()
    }

    pub fn menu(&self) -> Rc<RefCell<DropdownMenu<T>>> {
        self.menu.clone()
    }

    pub fn header(&self) -> Rc<RefCell<DropdownHeader>> {
        self.header.clone()
    }

    // === Items and Value ===

    /// Replace the item sequence. The current value is reconciled against
    /// the new items: a matching row is re-marked selected and the header
    /// label follows.
    pub fn set_items(&mut self, items: Vec<MenuItem<T>>) {
        self.menu.borrow_mut().set_items(items);
        self.reflect_value();
    }

    /// Programmatic value change. The selected row and the header label
    /// update; the value listener fires when the value actually changed.
    pub fn set_current_value(&mut self, value: Option<T>) {
        let changed = self.current_value != value;
        self.current_value = value;
        self.reflect_value();

        if changed {
            if let (Some(listener), Some(value)) = (&self.on_value_changed, &self.current_value) {
                listener(value);
            }
        }
    }

    /// Push the current value down into the menu rows and the header label.
    fn reflect_value(&mut self) {
        let label = {
            let mut menu = self.menu.borrow_mut();
            menu.set_selected_value(self.current_value.as_ref());

            // Header shows the matching item's label, or nothing when the
            // value has no item.
            self.current_value.as_ref().and_then(|value| {
                menu.rows()
                    .iter()
                    .find(|row| row.item().value() == value)
                    .map(|row| row.item().label().to_string())
            })
        };
        self.header.borrow_mut().set_label(label.unwrap_or_default());
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        // Disabling an open widget closes the menu.
        self.menu.borrow_mut().set_enabled(enabled);
        self.header.borrow_mut().set_enabled(enabled);
    }

    // === Header Events ===

    /// Activation (click or keyboard) on the header toggles the menu.
    pub fn header_activated(&mut self) {
        if !self.enabled {
            trace!("ignoring header activation while disabled");
            return;
        }
        self.toggle_menu();
    }

    pub fn header_hovered(&mut self) {
        self.header.borrow_mut().set_hovered(true);
    }

    pub fn header_unhovered(&mut self) {
        self.header.borrow_mut().set_hovered(false);
    }

    pub fn toggle_menu(&mut self) {
        let mut menu = self.menu.borrow_mut();
        match menu.state() {
            MenuState::Closed => menu.open(),
            MenuState::Open => menu.close(),
        }
    }

    // === Menu Events ===

    pub fn row_hovered(&mut self, index: usize) {
        self.menu.borrow_mut().row_hovered(index);
    }

    pub fn row_unhovered(&mut self, index: usize) {
        self.menu.borrow_mut().row_unhovered(index);
    }

    /// Click on a row commits it: the menu closes and the value binding
    /// updates.
    pub fn row_clicked(&mut self, index: usize) {
        let committed = self.menu.borrow_mut().commit(index);
        if let Some(value) = committed {
            debug!("row click committed a selection");
            self.set_current_value(Some(value));
        }
    }

    pub fn navigate_next(&mut self) {
        self.menu.borrow_mut().navigate_next();
    }

    pub fn navigate_previous(&mut self) {
        self.menu.borrow_mut().navigate_previous();
    }

    /// Commit the pre-selected row (keyboard confirm).
    pub fn commit_pre_selected(&mut self) {
        let committed = self.menu.borrow_mut().commit_pre_selected();
        if let Some(value) = committed {
            self.set_current_value(Some(value));
        }
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.menu.borrow_mut().set_filter_text(text);
    }

    // === Dismissal ===

    /// Pointer pressed outside the widget: an open menu closes without a
    /// selection.
    pub fn pointer_outside(&mut self) {
        self.menu.borrow_mut().close();
    }

    /// Back/escape style dismissal. Consumed (returns true) only when it
    /// actually closed an open menu; key repeats are never acted on.
    pub fn handle_dismiss(&mut self, action: DismissAction) -> bool {
        if action.repeat {
            return false;
        }
        let mut menu = self.menu.borrow_mut();
        if !menu.is_open() {
            return false;
        }
        menu.close();
        true
    }
}

impl<T> Drop for Dropdown<T> {
    fn drop(&mut self) {
        // Unregister the header's listener so neither half keeps the other
        // alive through the closure.
        if let Some(listener) = self.header.borrow_mut().take_listener() {
            self.menu.borrow_mut().remove_state_listener(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessScene;
    use crate::theme::Color;

    struct Fixture {
        services: Services,
    }

    fn fixture() -> Fixture {
        let scene = Rc::new(HeadlessScene::new());
        Fixture {
            services: Services::new(scene),
        }
    }

    fn fruit_items() -> Vec<MenuItem<&'static str>> {
        vec![
            MenuItem::new("Apple", "apple"),
            MenuItem::new("Banana", "banana").disabled(),
            MenuItem::new("Grape", "grape"),
        ]
    }

    fn dropdown(fx: &Fixture) -> Dropdown<&'static str> {
        Dropdown::new(&fx.services, DropdownStyle::default()).with_items(fruit_items())
    }

    #[test]
    fn test_header_activation_toggles_menu() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.header_activated();
        assert!(dropdown.is_open());
        dropdown.header_activated();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_disabled_widget_ignores_activation() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.set_enabled(false);
        dropdown.header_activated();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_disabling_open_widget_closes_menu() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.header_activated();
        dropdown.set_enabled(false);
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.header().borrow().visual().alpha, 0.3);
    }

    #[test]
    fn test_row_click_commits_value_and_label() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.header_activated();
        dropdown.row_clicked(2);

        assert_eq!(dropdown.current_value(), Some(&"grape"));
        assert_eq!(dropdown.header().borrow().label(), "Grape");
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_value_listener_fires_on_commit() {
        let fx = fixture();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let mut dropdown = Dropdown::new(&fx.services, DropdownStyle::default())
            .with_items(fruit_items())
            .with_on_value_changed({
                let observed = observed.clone();
                Rc::new(move |value: &&str| observed.borrow_mut().push(*value))
            });

        dropdown.header_activated();
        dropdown.navigate_next();
        dropdown.commit_pre_selected();

        assert_eq!(*observed.borrow(), vec!["apple"]);

        // Setting the same value again stays quiet.
        dropdown.set_current_value(Some("apple"));
        assert_eq!(observed.borrow().len(), 1);
    }

    #[test]
    fn test_set_current_value_updates_header_label() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.set_current_value(Some("apple"));
        assert_eq!(dropdown.header().borrow().label(), "Apple");

        // A value with no matching item leaves the header empty.
        dropdown.set_current_value(Some("kiwi"));
        assert_eq!(dropdown.header().borrow().label(), "");
    }

    #[test]
    fn test_set_items_reconciles_current_value() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);
        dropdown.set_current_value(Some("apple"));

        dropdown.set_items(vec![
            MenuItem::new("Green Apple", "apple"),
            MenuItem::new("Cherry", "cherry"),
        ]);

        assert_eq!(dropdown.current_value(), Some(&"apple"));
        assert_eq!(dropdown.menu().borrow().selected_index(), Some(0));
        assert_eq!(dropdown.header().borrow().label(), "Green Apple");
    }

    #[test]
    fn test_chevron_follows_menu_state() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        assert!(!dropdown.header().borrow().visual().chevron_flipped);
        dropdown.header_activated();
        assert!(dropdown.header().borrow().visual().chevron_flipped);
        dropdown.pointer_outside();
        assert!(!dropdown.header().borrow().visual().chevron_flipped);
    }

    #[test]
    fn test_dismiss_consumed_only_while_open() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        assert!(!dropdown.handle_dismiss(DismissAction::new()));

        dropdown.header_activated();
        assert!(dropdown.handle_dismiss(DismissAction::new()));
        assert!(!dropdown.is_open());
        assert!(!dropdown.handle_dismiss(DismissAction::new()));
    }

    #[test]
    fn test_dismiss_ignores_key_repeat() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.header_activated();
        assert!(!dropdown.handle_dismiss(DismissAction::repeated()));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_search_wiring_reaches_header() {
        let fx = fixture();
        let mut dropdown = Dropdown::new(&fx.services, DropdownStyle::default())
            .with_items(fruit_items())
            .with_search();

        dropdown.header_activated();
        dropdown.header_hovered();

        // Filter-active styling wins over hover on the background.
        let visual = dropdown.header().borrow().visual();
        assert_eq!(visual.background, fx.services.theme.surface);
        assert_eq!(visual.chevron, fx.services.theme.accent.lighten(0.5));

        dropdown.set_filter_text("grape");
        assert_eq!(dropdown.menu().borrow().visible_count(), 1);
    }

    #[test]
    fn test_pointer_outside_dismisses_without_selection() {
        let fx = fixture();
        let mut dropdown = dropdown(&fx);

        dropdown.header_activated();
        dropdown.row_hovered(0);
        dropdown.pointer_outside();

        assert!(!dropdown.is_open());
        assert_eq!(dropdown.current_value(), None);
    }

    #[test]
    fn test_drop_unregisters_header_listener() {
        let fx = fixture();
        let dropdown = dropdown(&fx);
        let header = dropdown.header();

        // Held by the test, the widget and the listener closure.
        assert_eq!(Rc::strong_count(&header), 3);
        drop(dropdown);
        assert_eq!(Rc::strong_count(&header), 1);
    }

    #[test]
    fn test_highlight_color_override_flows_to_rows() {
        let fx = fixture();
        let dropdown = dropdown(&fx);

        let accent = Color::from_rgb(0x20, 0x40, 0x60);
        dropdown.menu().borrow_mut().set_hover_color(accent);
        let menu = dropdown.menu();
        let menu = menu.borrow();
        assert!(menu.rows().iter().all(|row| row.style().hover_color == accent));
    }
}
