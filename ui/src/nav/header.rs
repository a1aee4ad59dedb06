use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::logging::error;
use leptos::prelude::*;
use leptos_use::use_media_query;
use web_sys::Node;

use super::menu::{COMPACT_QUERY, Command, LinkOrigin, MenuState, NavEvent};
use super::outside::{self, OutsideClick};
use super::scroll::smooth_scroll_to;
use crate::content::{NAV_ITEMS, SITE_TITLE};

/// Everything the header's event handlers need, bundled so it can be
/// copied into each closure.
#[derive(Copy, Clone)]
struct MenuCtl {
    menu: RwSignal<MenuState>,
    // Some exactly while the panel is open
    listener: StoredValue<Option<OutsideClick>, LocalStorage>,
    panel: NodeRef<html::Nav>,
    button: NodeRef<html::Button>,
}

impl MenuCtl {
    fn new() -> Self {
        Self {
            menu: RwSignal::new(MenuState::Closed),
            listener: StoredValue::new_local(None),
            panel: NodeRef::new(),
            button: NodeRef::new(),
        }
    }

    fn send(self, event: NavEvent) {
        let transition = self.menu.get_untracked().on(event);
        self.menu.set(transition.next);
        for command in transition.commands {
            self.run(command);
        }
    }

    fn run(self, command: Command) {
        match command {
            Command::ListenOutside => {
                match OutsideClick::attach(move |target| self.pointer_down(target)) {
                    Ok(sub) => self.listener.set_value(Some(sub)),
                    Err(e) => error!("menu stays open until toggled: {e:#}"),
                }
            }
            Command::StopListening => self.listener.set_value(None),
            Command::ScrollTo { anchor, duration } => {
                if let Err(e) = smooth_scroll_to(anchor, duration) {
                    error!("scroll to #{anchor}: {e:#}");
                }
            }
        }
    }

    fn pointer_down(self, target: Option<Node>) {
        // the menu button toggles on click; treating its pointer-down as
        // outside would close and immediately reopen the panel
        let inside = hits(self.panel.get_untracked(), target.as_ref())
            || hits(self.button.get_untracked(), target.as_ref());
        self.send(NavEvent::PointerDown { inside });
    }
}

fn hits<E: AsRef<Node>>(el: Option<E>, target: Option<&Node>) -> bool {
    el.is_some_and(|el| outside::contains(el.as_ref(), target))
}

fn nav_links(nav: MenuCtl, origin: LinkOrigin) -> impl IntoView {
    let class = match origin {
        LinkOrigin::Bar => "text-lg font-medium cursor-pointer hover:text-[#0070f3]",
        LinkOrigin::Panel => {
            "w-full py-2.5 text-center text-lg font-medium cursor-pointer hover:text-[#0070f3]"
        }
    };

    NAV_ITEMS
        .into_iter()
        .map(|item| {
            view! {
                <a
                    href=format!("#{}", item.anchor)
                    class=class
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.send(NavEvent::Select { item, origin });
                    }
                >
                    {item.label}
                </a>
            }
        })
        .collect_view()
}

fn bars_icon() -> impl IntoView {
    view! {
        <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" d="M4 6h16M4 12h16M4 18h16"/>
        </svg>
    }
}

fn close_icon() -> impl IntoView {
    view! {
        <svg class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path stroke-linecap="round" d="M6 6l12 12M18 6L6 18"/>
        </svg>
    }
}

/// Fixed top bar: inline links on wide screens, menu button plus slide-in
/// panel on narrow ones.
#[component]
pub fn Header() -> impl IntoView {
    let nav = MenuCtl::new();

    let compact = use_media_query(COMPACT_QUERY.to_string());
    Effect::new(move |_| {
        nav.send(NavEvent::Breakpoint {
            compact: compact.get(),
        });
    });

    // slide the bar in once it is mounted
    let landed = RwSignal::new(false);
    Effect::new(move |_| {
        Timeout::new(16, move || landed.set(true)).forget();
    });

    view! {
        <header class=move || format!(
            "fixed top-0 w-full z-[100] flex justify-between items-center px-6 py-4 \
             bg-white text-black shadow-[0_4px_10px_rgba(0,0,0,0.1)] \
             transition-all duration-500 {}",
            if landed.get() { "translate-y-0 opacity-100" } else { "-translate-y-[100px] opacity-0" }
        )>
            <div class="text-[22px] font-bold cursor-pointer">{SITE_TITLE}</div>

            <div class="flex items-center">
                <nav class="hidden min-[769px]:flex gap-5">
                    {nav_links(nav, LinkOrigin::Bar)}
                </nav>
                <button
                    node_ref=nav.button
                    class="min-[769px]:hidden absolute right-5 z-[100] text-2xl bg-transparent border-none cursor-pointer"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.menu.get().aria_expanded()
                    on:click=move |_| nav.send(NavEvent::Toggle)
                >
                    {move || if nav.menu.get().is_open() {
                        close_icon().into_any()
                    } else {
                        bars_icon().into_any()
                    }}
                </button>
            </div>
        </header>

        <nav
            node_ref=nav.panel
            class=move || format!(
                "fixed top-0 {} h-screen w-[250px] z-50 flex flex-col items-center justify-center \
                 bg-white/95 shadow-[-4px_0_10px_rgba(0,0,0,0.1)] \
                 transition-[right] duration-300 ease-in-out",
                nav.menu.get().panel_class()
            )
            aria-hidden=move || if nav.menu.get().is_open() { "false" } else { "true" }
        >
            {nav_links(nav, LinkOrigin::Panel)}
        </nav>
    }
}
