use crate::components::icons::Icon;
use crate::components::theme::prelude::{SelectTheme, Theme};
use yew::AttrValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerVariant {
    // menu is open, takes precedence over scroll
    Active,
    // page scrolled past the threshold
    Secondary,
    Primary,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuEvent {
    Toggle,
    Scrolled(f64),
    Select(AttrValue),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuState {
    open: bool,
    scrolled: bool,
    threshold: f64,
    // last observed, so a new threshold can be applied without a scroll event
    offset: f64,
}

impl MenuState {
    pub fn new(threshold: f64) -> Self {
        Self {
            open: false,
            scrolled: false,
            threshold,
            offset: 0.0,
        }
    }

    /// Returns true if `scrolled` changed.
    pub fn set_threshold(&mut self, threshold: f64) -> bool {
        self.threshold = threshold;
        self.observe_scroll(self.offset)
    }

    pub fn open(&self) -> bool {
        self.open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flips the menu, returns whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if `scrolled` changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        self.offset = offset;
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn panel_visible(&self) -> bool {
        self.open
    }

    pub fn trigger_variant(&self) -> TriggerVariant {
        match (self.open, self.scrolled) {
            (true, _) => TriggerVariant::Active,
            (false, true) => TriggerVariant::Secondary,
            (false, false) => TriggerVariant::Primary,
        }
    }

    pub fn trigger_icon(&self) -> Icon {
        if self.open {
            Icon::Close
        } else {
            Icon::Menu
        }
    }

    /// Applies a user event, returns whether the trigger needs a rerender.
    ///
    /// Selection is delegated to `selector` and leaves the menu open.
    pub fn handle(&mut self, event: MenuEvent, selector: &impl SelectTheme) -> bool {
        match event {
            MenuEvent::Toggle => {
                self.toggle();
                true
            }
            MenuEvent::Scrolled(offset) => self.observe_scroll(offset),
            MenuEvent::Select(id) => {
                selector.select_theme(&id);
                false
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeEntry {
    pub id: AttrValue,
    pub name: AttrValue,
    pub icon: Icon,
    pub selected: bool,
}

impl ThemeEntry {
    /// One entry per theme in the order supplied, themes without an id are skipped.
    pub fn list(themes: &[Theme], active_id: &str) -> Vec<ThemeEntry> {
        themes
            .iter()
            .filter(|theme| !theme.id.is_empty())
            .map(|theme| ThemeEntry {
                id: theme.id.clone(),
                name: theme.name.clone(),
                icon: Icon::for_theme(&theme.id),
                selected: &*theme.id == active_id,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::theme::prelude::{MockSelectTheme, Themes};
    use crate::conf::SCROLL_THRESHOLD;

    fn state() -> MenuState {
        MenuState::new(SCROLL_THRESHOLD)
    }

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = state();
        assert!(!state.open());
        assert!(!state.scrolled());
        assert!(!state.panel_visible());
        assert_eq!(state.trigger_variant(), TriggerVariant::Primary);
        assert_eq!(state.trigger_icon(), Icon::Menu);
    }

    #[test]
    fn open_is_parity_of_toggles() {
        let mut state = state();
        for clicks in 1..=9 {
            let open = state.toggle();
            assert_eq!(open, clicks % 2 == 1, "after {clicks} clicks");
            assert_eq!(state.panel_visible(), open);
        }
    }

    #[test]
    fn toggling_twice_restores_visibility() {
        let mut state = state();
        let before = state.panel_visible();
        state.toggle();
        state.toggle();
        assert_eq!(state.panel_visible(), before);
    }

    #[test]
    fn scrolled_follows_latest_offset_only() {
        let mut state = state();
        let offsets = [0.0, 50.0, 50.5, 10.0, 1000.0, 51.0, 49.9, 0.0, 300.0];
        for offset in offsets {
            state.observe_scroll(offset);
            assert_eq!(state.scrolled(), offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn observe_scroll_reports_changes() {
        let mut state = state();
        assert!(!state.observe_scroll(20.0));
        assert!(state.observe_scroll(60.0));
        assert!(!state.observe_scroll(70.0));
        assert!(state.observe_scroll(50.0));
    }

    #[test]
    fn threshold_is_configurable() {
        let mut state = MenuState::new(200.0);
        state.observe_scroll(120.0);
        assert!(!state.scrolled());
        state.observe_scroll(201.0);
        assert!(state.scrolled());
    }

    #[test]
    fn new_threshold_applies_to_last_offset() {
        let mut state = state();
        state.observe_scroll(100.0);
        assert!(state.scrolled());

        assert!(state.set_threshold(200.0));
        assert!(!state.scrolled());
        assert_eq!(state.trigger_variant(), TriggerVariant::Primary);

        assert!(!state.set_threshold(150.0));
        assert!(state.set_threshold(99.0));
        assert!(state.scrolled());
        assert_eq!(state.trigger_variant(), TriggerVariant::Secondary);
    }

    #[test]
    fn variant_table() {
        let cases = [
            (false, 0.0, TriggerVariant::Primary, Icon::Menu),
            (false, 80.0, TriggerVariant::Secondary, Icon::Menu),
            (true, 0.0, TriggerVariant::Active, Icon::Close),
            (true, 80.0, TriggerVariant::Active, Icon::Close),
        ];

        for (open, offset, variant, icon) in cases {
            let mut state = state();
            if open {
                state.toggle();
            }
            state.observe_scroll(offset);
            assert_eq!(state.trigger_variant(), variant, "open={open} offset={offset}");
            assert_eq!(state.trigger_icon(), icon, "open={open} offset={offset}");
        }
    }

    fn untouched_selector() -> MockSelectTheme {
        let mut selector = MockSelectTheme::new();
        selector.expect_select_theme().never();
        selector
    }

    #[test]
    fn selecting_delegates_once_and_keeps_menu_open() {
        let mut state = state();
        state.handle(MenuEvent::Toggle, &untouched_selector());

        for id in ["dark", "light", "pastel", "not-a-theme"] {
            let mut selector = MockSelectTheme::new();
            selector
                .expect_select_theme()
                .withf(move |selected: &str| selected == id)
                .times(1)
                .return_const(());

            let rerender = state.handle(MenuEvent::Select(id.into()), &selector);

            assert!(!rerender);
            assert!(state.open());
            assert!(state.panel_visible());
        }
    }

    #[test]
    fn selecting_while_closed_keeps_menu_closed() {
        let mut state = state();
        let mut selector = MockSelectTheme::new();
        selector.expect_select_theme().times(1).return_const(());

        state.handle(MenuEvent::Select("ocean".into()), &selector);

        assert!(!state.open());
    }

    #[test]
    fn toggle_and_scroll_events_never_select() {
        let selector = untouched_selector();
        let mut state = state();

        assert!(state.handle(MenuEvent::Toggle, &selector));
        assert!(state.open());

        assert!(state.handle(MenuEvent::Scrolled(80.0), &selector));
        assert!(!state.handle(MenuEvent::Scrolled(90.0), &selector));
        assert!(state.scrolled());

        assert!(state.handle(MenuEvent::Toggle, &selector));
        assert!(!state.open());
    }

    #[test]
    fn only_active_entry_is_selected() {
        let catalog = Themes::catalog();

        for active in Themes::ALL {
            let entries = ThemeEntry::list(&catalog, active.id());
            assert_eq!(entries.len(), catalog.len());

            let selected: Vec<_> = entries.iter().filter(|e| e.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(&*selected[0].id, active.id());
        }
    }

    #[test]
    fn unknown_active_selects_nothing() {
        let entries = ThemeEntry::list(&Themes::catalog(), "solarized");
        assert!(entries.iter().all(|e| !e.selected));

        assert!(ThemeEntry::list(&[], "dark").is_empty());
    }

    #[test]
    fn entries_keep_supplied_order() {
        let themes: Vec<Theme> = [Themes::Sunset, Themes::Light, Themes::Dark]
            .into_iter()
            .map(Theme::from)
            .collect();

        let entries = ThemeEntry::list(&themes, "light");

        let ids: Vec<_> = entries.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["sunset", "light", "dark"]);

        let icons: Vec<_> = entries.iter().map(|e| e.icon).collect();
        assert_eq!(icons, [Icon::Palette, Icon::Sun, Icon::Moon]);

        assert_eq!(&*entries[1].name, "Light");
        assert!(entries[1].selected);
    }

    #[test]
    fn entries_without_id_are_skipped() {
        let mut broken = Theme::from(Themes::Pastel);
        broken.id = "".into();
        let themes = [Theme::from(Themes::Dark), broken, Theme::from(Themes::Ocean)];

        let entries = ThemeEntry::list(&themes, "");

        let ids: Vec<_> = entries.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, ["dark", "ocean"]);
        assert!(entries.iter().all(|e| !e.selected));
    }

    #[test]
    fn open_select_close_walkthrough() {
        let catalog = Themes::catalog();
        let mut state = state();

        let mut selector = MockSelectTheme::new();
        selector
            .expect_select_theme()
            .withf(|id: &str| id == "dark")
            .times(1)
            .return_const(());

        assert_eq!(state.trigger_variant(), TriggerVariant::Primary);
        assert_eq!(state.trigger_icon(), Icon::Menu);
        assert!(!state.panel_visible());

        state.handle(MenuEvent::Toggle, &selector);
        assert!(state.panel_visible());
        assert_eq!(state.trigger_icon(), Icon::Close);

        state.handle(MenuEvent::Scrolled(120.0), &selector);
        assert!(state.scrolled());
        assert_eq!(state.trigger_variant(), TriggerVariant::Active);

        let dark = ThemeEntry::list(&catalog, "light")
            .into_iter()
            .find(|e| &*e.id == "dark")
            .unwrap();
        state.handle(MenuEvent::Select(dark.id), &selector);
        assert!(state.panel_visible());

        state.handle(MenuEvent::Toggle, &selector);
        assert!(!state.panel_visible());
        assert_eq!(state.trigger_variant(), TriggerVariant::Secondary);
        assert_eq!(state.trigger_icon(), Icon::Menu);
    }
}
