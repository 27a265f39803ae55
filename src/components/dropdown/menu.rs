use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::{DropdownStyle, SearchFilter};
use crate::audio::{AudioService, Cue};
use crate::common::Direction;
use crate::components::menu_item::{ItemRow, MenuItem};
use crate::engine::{AnimatedProperty, LayerId, Scene};
use crate::services::Services;
use crate::theme::Color;

/// Open/close state of the dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    Closed,
    Open,
}

/// Handle to a registered state-change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type StateListener = Rc<dyn Fn(MenuState)>;

/// Popup menu of a dropdown: owns the item rows, the open/close state
/// machine and pre-selection tracking.
///
/// Transitions issue their side effects (fade, cue, filter visibility,
/// resize) synchronously, then notify registered listeners with the new
/// state. Listeners must not call back into the menu; they receive the new
/// state as an argument.
pub struct DropdownMenu<T> {
    rows: Vec<ItemRow<T>>,
    state: MenuState,
    /// Set on the first open, never reset. Gates the close effects so the
    /// initial state application at construction stays silent.
    ever_opened: bool,
    enabled: bool,

    style: DropdownStyle,
    layer: LayerId,
    scene: Rc<dyn Scene>,
    audio: Option<Rc<dyn AudioService>>,
    search: Option<Rc<RefCell<SearchFilter>>>,

    listeners: Vec<(ListenerId, StateListener)>,
    next_listener_id: u64,
}

impl<T> DropdownMenu<T> {
    pub fn new(services: &Services, style: DropdownStyle) -> Self {
        let layer = services.scene.create_layer();
        services.scene.set(layer, AnimatedProperty::Opacity, 0.0, None);

        let mut menu = Self {
            rows: Vec::new(),
            state: MenuState::Closed,
            ever_opened: false,
            enabled: true,
            style,
            layer,
            scene: services.scene.clone(),
            audio: services.audio.clone(),
            search: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        };

        // Apply the initial Closed state through the regular path; the
        // ever_opened guard keeps it free of sound and fade.
        menu.animate_close();
        menu
    }

    /// Attach a search filter. Idempotent; returns the shared handle so the
    /// header can observe filter visibility.
    pub fn enable_search(&mut self, services: &Services) -> Rc<RefCell<SearchFilter>> {
        if let Some(search) = &self.search {
            return search.clone();
        }
        let filter = Rc::new(RefCell::new(SearchFilter::new(
            services,
            self.style.search_placeholder.clone(),
        )));
        self.search = Some(filter.clone());
        filter
    }

    // === Getters ===

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn ever_opened(&self) -> bool {
        self.ever_opened
    }

    /// While open the menu consumes all non-positional input (navigation,
    /// filter text); while closed it consumes none.
    pub fn handles_non_positional_input(&self) -> bool {
        self.is_open()
    }

    pub fn rows(&self) -> &[ItemRow<T>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ItemRow<T>> {
        self.rows.get(index)
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_visible()).count()
    }

    pub fn pre_selected_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.is_pre_selected())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.is_selected())
    }

    pub fn search(&self) -> Option<Rc<RefCell<SearchFilter>>> {
        self.search.clone()
    }

    pub fn layer(&self) -> LayerId {
        self.layer
    }

    // === Items ===

    /// Replace the item sequence wholesale. Rows are rebuilt; the current
    /// filter query is re-applied when the menu is open.
    pub fn set_items(&mut self, items: Vec<MenuItem<T>>) {
        debug!(count = items.len(), "replacing menu items");
        self.rows = items
            .into_iter()
            .map(|item| ItemRow::new(item, self.style.row.clone()))
            .collect();

        if self.is_open() {
            self.apply_filter();
            self.update_size(true);
        }
    }

    // === State Machine ===

    pub fn set_state(&mut self, state: MenuState) {
        match state {
            MenuState::Open => self.open(),
            MenuState::Closed => self.close(),
        }
    }

    /// `Closed → Open`. A no-op while already open or while disabled.
    pub fn open(&mut self) {
        if !self.enabled {
            trace!("ignoring open while disabled");
            return;
        }
        if self.state == MenuState::Open {
            return;
        }

        self.state = MenuState::Open;
        self.ever_opened = true;
        debug!("dropdown menu opened");

        self.animate_open();
        if let Some(search) = &self.search {
            search.borrow_mut().pop_in();
        }
        self.update_size(true);
        self.notify(MenuState::Open);
    }

    /// `Open → Closed`. A no-op while already closed.
    pub fn close(&mut self) {
        if self.state == MenuState::Closed {
            return;
        }

        self.state = MenuState::Closed;
        debug!("dropdown menu closed");

        // Release navigation focus.
        self.pre_select_unchecked(None);

        self.animate_close();
        if let Some(search) = &self.search {
            search.borrow_mut().pop_out();
            self.apply_filter();
        }
        self.notify(MenuState::Closed);
    }

    fn animate_open(&mut self) {
        self.scene.set(
            self.layer,
            AnimatedProperty::Opacity,
            1.0,
            Some(self.style.fade),
        );
        self.play_cue(Cue::DropdownOpen);
    }

    fn animate_close(&mut self) {
        // No close feedback before the menu was ever open.
        if !self.ever_opened {
            return;
        }
        self.scene.set(
            self.layer,
            AnimatedProperty::Opacity,
            0.0,
            Some(self.style.fade),
        );
        self.play_cue(Cue::DropdownClose);
    }

    fn play_cue(&self, cue: Cue) {
        if let Some(audio) = &self.audio {
            audio.play(cue);
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.close();
        }
    }

    // === Pre-selection ===

    /// Move pre-selection to `index`, clearing it everywhere else. Rejected
    /// while closed and for rows that are disabled or filtered out.
    pub fn pre_select(&mut self, index: Option<usize>) -> bool {
        if !self.is_open() {
            return false;
        }
        if let Some(i) = index {
            let selectable = self.rows.get(i).map(ItemRow::is_selectable).unwrap_or(false);
            if !selectable {
                return false;
            }
        }
        self.pre_select_unchecked(index);
        true
    }

    fn pre_select_unchecked(&mut self, index: Option<usize>) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_pre_selected(index == Some(i));
        }
    }

    /// Pointer entered a row. Hover tracking is per row; pre-selection only
    /// follows the pointer onto selectable rows.
    pub fn row_hovered(&mut self, index: usize) {
        if !self.is_open() {
            return;
        }
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_hovered(i == index);
        }
        let selectable = self.rows.get(index).map(ItemRow::is_selectable).unwrap_or(false);
        if selectable {
            self.pre_select_unchecked(Some(index));
        }
    }

    pub fn row_unhovered(&mut self, index: usize) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_hovered(false);
        }
    }

    /// Move pre-selection to the next selectable row, wrapping at the end.
    pub fn navigate_next(&mut self) {
        self.navigate(true);
    }

    /// Move pre-selection to the previous selectable row, wrapping at the
    /// start.
    pub fn navigate_previous(&mut self) {
        self.navigate(false);
    }

    fn navigate(&mut self, forward: bool) {
        if !self.is_open() {
            return;
        }
        let next = Self::find_next_selectable(&self.rows, self.pre_selected_index(), forward);
        if next.is_some() {
            self.pre_select_unchecked(next);
        }
    }

    /// Find the next selectable row, skipping disabled and filtered-out
    /// rows, wrapping around the ends.
    fn find_next_selectable(
        rows: &[ItemRow<T>],
        current: Option<usize>,
        forward: bool,
    ) -> Option<usize> {
        if rows.is_empty() {
            return None;
        }
        let len = rows.len();

        let start = match current {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => {
                if idx == 0 {
                    len - 1
                } else {
                    idx - 1
                }
            }
            None if forward => 0,
            None => len - 1,
        };

        let mut idx = start;
        for _ in 0..len {
            if rows[idx].is_selectable() {
                return Some(idx);
            }
            idx = if forward {
                (idx + 1) % len
            } else if idx == 0 {
                len - 1
            } else {
                idx - 1
            };
        }

        None
    }

    // === Selection Commit ===

    /// Commit the row at `index`: mark it selected, close the menu and
    /// return the committed value. Disabled and filtered-out rows are
    /// rejected.
    pub fn commit(&mut self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        if !self.is_open() {
            return None;
        }
        let selectable = self.rows.get(index).map(ItemRow::is_selectable).unwrap_or(false);
        if !selectable {
            trace!(index, "rejecting commit on unselectable row");
            return None;
        }

        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_selected(i == index);
        }
        let value = self.rows[index].item().value().clone();
        debug!(label = self.rows[index].item().label(), "selection committed");

        self.close();
        Some(value)
    }

    /// Commit the row currently targeted by keyboard/pointer focus.
    pub fn commit_pre_selected(&mut self) -> Option<T>
    where
        T: Clone,
    {
        let index = self.pre_selected_index()?;
        self.commit(index)
    }

    /// Reflect an externally owned current value: the first enabled row with
    /// a matching value is marked selected, every other row is cleared. No
    /// match means no row is selected.
    pub fn set_selected_value(&mut self, value: Option<&T>)
    where
        T: PartialEq,
    {
        let mut found = false;
        for row in &mut self.rows {
            let matches = !found && value.is_some_and(|v| row.item().value() == v);
            if matches && row.set_selected(true) {
                found = true;
            } else {
                row.set_selected(false);
            }
        }
    }

    // === Highlight Colors ===

    /// Update the pre-selection highlight color on every instantiated row.
    pub fn set_hover_color(&mut self, color: Color) {
        self.style.row.hover_color = color;
        for row in &mut self.rows {
            row.set_hover_color(color);
        }
    }

    /// Update the committed-selection highlight color on every instantiated
    /// row.
    pub fn set_selection_color(&mut self, color: Color) {
        self.style.row.selection_color = color;
        for row in &mut self.rows {
            row.set_selection_color(color);
        }
    }

    // === Search Filter ===

    /// Replace the filter query. Only accepted while the menu (and with it
    /// the filter) is open; re-runs the predicate and resizes when the
    /// visible set changed.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        let Some(search) = self.search.clone() else {
            return;
        };
        if !search.borrow_mut().set_text(text) {
            return;
        }
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        let Some(search) = self.search.clone() else {
            return;
        };
        let before = self.visible_count();

        {
            let search = search.borrow();
            for row in &mut self.rows {
                let visible = search.matches(row.item().label());
                row.set_visible(visible);
            }
        }

        // Pre-selection may not rest on a filtered-out row.
        if let Some(i) = self.pre_selected_index() {
            if !self.rows[i].is_visible() {
                self.pre_select_unchecked(None);
            }
        }

        if self.is_open() && self.visible_count() != before {
            self.update_size(true);
        }
    }

    // === Sizing ===

    /// Extent of the visible rows along the stacking axis.
    fn content_extent(&self) -> f32 {
        self.visible_count() as f32 * self.style.row.height + 2.0 * self.style.content_padding
    }

    /// Resize to fit the visible content: the scroll axis animates, the
    /// cross axis snaps.
    fn update_size(&mut self, animated: bool) {
        let extent = self.content_extent();
        let resize = animated.then_some(self.style.resize);

        match self.style.direction {
            Direction::Vertical => {
                self.scene
                    .set(self.layer, AnimatedProperty::Width, self.style.menu_width, None);
                self.scene
                    .set(self.layer, AnimatedProperty::Height, extent, resize);
            }
            Direction::Horizontal => {
                self.scene
                    .set(self.layer, AnimatedProperty::Height, self.style.menu_width, None);
                self.scene
                    .set(self.layer, AnimatedProperty::Width, extent, resize);
            }
        }
    }

    // === State-change Listeners ===

    /// Register a listener invoked with the new state on every transition.
    pub fn add_state_listener(&mut self, listener: StateListener) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn remove_state_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self, state: MenuState) {
        for (_, listener) in &self.listeners {
            listener(state);
        }
    }
}
