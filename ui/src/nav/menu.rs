//! Menu state for the slide-in navigation panel.
//!
//! Everything here is plain data: feeding a [`NavEvent`] to a
//! [`MenuState`] yields a [`Transition`] holding the next state and the
//! [`Command`]s the host has to carry out (listener bookkeeping, scrolling).
//! The Leptos header in [`super::header`] is the only host in the app.

use std::time::Duration;

use crate::content::NavItem;

/// How long a link-triggered smooth scroll takes.
pub const SCROLL_DURATION: Duration = Duration::from_millis(600);

/// Below this width the inline bar is hidden and the menu button shows.
pub const COMPACT_QUERY: &str = "(max-width: 768px)";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Where a nav link was clicked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkOrigin {
    /// Inline desktop bar.
    Bar,
    /// Slide-in mobile panel.
    Panel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Menu button activated.
    Toggle,
    /// Pointer went down somewhere on the page while the outside listener
    /// was attached. `inside` is true for the panel subtree and the menu
    /// button itself.
    PointerDown { inside: bool },
    Select { item: NavItem, origin: LinkOrigin },
    /// The compact-layout media query changed.
    Breakpoint { compact: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ListenOutside,
    StopListening,
    ScrollTo {
        anchor: &'static str,
        duration: Duration,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: MenuState,
    pub commands: Vec<Command>,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn on(self, event: NavEvent) -> Transition {
        let (next, scroll) = match event {
            NavEvent::Toggle => (self.toggled(), None),
            NavEvent::PointerDown { inside: false } => (MenuState::Closed, None),
            NavEvent::PointerDown { inside: true } => (self, None),
            NavEvent::Select { item, origin } => {
                let next = match origin {
                    LinkOrigin::Panel => MenuState::Closed,
                    LinkOrigin::Bar => self,
                };
                (next, Some(item.anchor))
            }
            NavEvent::Breakpoint { compact: false } => (MenuState::Closed, None),
            NavEvent::Breakpoint { compact: true } => (self, None),
        };

        let mut commands = Vec::with_capacity(2);
        match (self, next) {
            (MenuState::Closed, MenuState::Open) => commands.push(Command::ListenOutside),
            (MenuState::Open, MenuState::Closed) => commands.push(Command::StopListening),
            _ => {}
        }
        if let Some(anchor) = scroll {
            commands.push(Command::ScrollTo {
                anchor,
                duration: SCROLL_DURATION,
            });
        }

        Transition { next, commands }
    }

    /// Tailwind offset for the panel: parked off-screen to the right when closed.
    pub fn panel_class(self) -> &'static str {
        match self {
            MenuState::Open => "right-0",
            MenuState::Closed => "-right-full",
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;
    use proptest::prelude::*;

    /// Replays commands the way the header does and tracks what a browser
    /// would see.
    #[derive(Default)]
    struct FakeHost {
        state: MenuState,
        listeners: usize,
        scrolled: Vec<&'static str>,
    }

    impl FakeHost {
        fn send(&mut self, event: NavEvent) {
            let t = self.state.on(event);
            self.state = t.next;
            for cmd in t.commands {
                match cmd {
                    Command::ListenOutside => self.listeners += 1,
                    Command::StopListening => self.listeners -= 1,
                    Command::ScrollTo { anchor, duration } => {
                        assert_eq!(duration, SCROLL_DURATION);
                        self.scrolled.push(anchor);
                    }
                }
            }
        }

        /// Outside pointer events only reach the machine while the listener is attached.
        fn pointer_down(&mut self, inside: bool) {
            if self.listeners > 0 {
                self.send(NavEvent::PointerDown { inside });
            }
        }
    }

    fn skills() -> NavItem {
        NAV_ITEMS[1]
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert_eq!(FakeHost::default().listeners, 0);
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut host = FakeHost::default();
        host.send(NavEvent::Toggle);
        assert!(host.state.is_open());
        assert_eq!(host.listeners, 1);

        host.pointer_down(false);
        assert_eq!(host.state, MenuState::Closed);
        assert_eq!(host.listeners, 0);
    }

    #[test]
    fn inside_click_keeps_menu_open() {
        let mut host = FakeHost::default();
        host.send(NavEvent::Toggle);
        host.pointer_down(true);
        assert_eq!(host.state, MenuState::Open);
        assert_eq!(host.listeners, 1);
    }

    #[test]
    fn panel_link_closes_and_scrolls() {
        let mut host = FakeHost::default();
        host.send(NavEvent::Toggle);
        host.send(NavEvent::Select {
            item: skills(),
            origin: LinkOrigin::Panel,
        });
        assert_eq!(host.state, MenuState::Closed);
        assert_eq!(host.listeners, 0);
        assert_eq!(host.scrolled, vec!["skills"]);
    }

    #[test]
    fn every_panel_link_closes_and_targets_its_anchor() {
        for item in NAV_ITEMS {
            let t = MenuState::Open.on(NavEvent::Select {
                item,
                origin: LinkOrigin::Panel,
            });
            assert_eq!(t.next, MenuState::Closed);
            assert_eq!(
                t.commands,
                vec![
                    Command::StopListening,
                    Command::ScrollTo {
                        anchor: item.anchor,
                        duration: SCROLL_DURATION
                    },
                ]
            );
        }
    }

    #[test]
    fn bar_link_only_scrolls() {
        let t = MenuState::Closed.on(NavEvent::Select {
            item: NAV_ITEMS[4],
            origin: LinkOrigin::Bar,
        });
        assert_eq!(t.next, MenuState::Closed);
        assert_eq!(
            t.commands,
            vec![Command::ScrollTo {
                anchor: "contact",
                duration: SCROLL_DURATION
            }]
        );
    }

    #[test]
    fn panel_link_while_closed_does_not_open() {
        let t = MenuState::Closed.on(NavEvent::Select {
            item: NAV_ITEMS[0],
            origin: LinkOrigin::Panel,
        });
        assert_eq!(t.next, MenuState::Closed);
        assert!(!t.commands.contains(&Command::ListenOutside));
    }

    #[test]
    fn widening_past_breakpoint_closes() {
        let t = MenuState::Open.on(NavEvent::Breakpoint { compact: false });
        assert_eq!(t.next, MenuState::Closed);
        assert_eq!(t.commands, vec![Command::StopListening]);

        let t = MenuState::Open.on(NavEvent::Breakpoint { compact: true });
        assert_eq!(t.next, MenuState::Open);
        assert!(t.commands.is_empty());
    }

    #[test]
    fn panel_class_follows_state() {
        assert_eq!(MenuState::Open.panel_class(), "right-0");
        assert_eq!(MenuState::Closed.panel_class(), "-right-full");
        assert_eq!(MenuState::Open.aria_expanded(), "true");
    }

    fn any_event() -> impl Strategy<Value = NavEvent> {
        prop_oneof![
            Just(NavEvent::Toggle),
            any::<bool>().prop_map(|inside| NavEvent::PointerDown { inside }),
            (0..NAV_ITEMS.len(), any::<bool>()).prop_map(|(i, panel)| NavEvent::Select {
                item: NAV_ITEMS[i],
                origin: if panel { LinkOrigin::Panel } else { LinkOrigin::Bar },
            }),
            any::<bool>().prop_map(|compact| NavEvent::Breakpoint { compact }),
        ]
    }

    proptest! {
        #[test]
        fn toggle_parity(n in 0usize..64) {
            let mut state = MenuState::Closed;
            for _ in 0..n {
                state = state.on(NavEvent::Toggle).next;
            }
            let expected = if n % 2 == 0 { MenuState::Closed } else { MenuState::Open };
            prop_assert_eq!(state, expected);
        }

        #[test]
        fn listener_attached_iff_open(events in proptest::collection::vec(any_event(), 0..48)) {
            let mut host = FakeHost::default();
            for event in events {
                match event {
                    NavEvent::PointerDown { inside } => host.pointer_down(inside),
                    other => host.send(other),
                }
                prop_assert_eq!(host.listeners, usize::from(host.state.is_open()));
            }
        }
    }
}
