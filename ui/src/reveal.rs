//! Entrance animations for page sections.
//!
//! A section starts hidden, animates in when it scrolls into view and,
//! unless it is marked `once`, animates back out when it leaves so the
//! effect replays on the next pass.

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    BeforeView,
    Entering,
    Visible,
    Exiting,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Intersect(bool),
    TransitionEnd,
}

impl Phase {
    pub fn on(self, event: RevealEvent, once: bool) -> Phase {
        use Phase::*;
        use RevealEvent::*;

        match (self, event) {
            (BeforeView | Exiting, Intersect(true)) => Entering,
            (Entering | Visible, Intersect(false)) if !once => Exiting,
            (Entering, TransitionEnd) => Visible,
            (Exiting, TransitionEnd) => BeforeView,
            (phase, _) => phase,
        }
    }

    /// Whether the element should sit at its final, on-screen pose.
    pub fn is_shown(self) -> bool {
        matches!(self, Phase::Entering | Phase::Visible)
    }
}

/// Entrance variants used across the page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    /// Slide up 50px while fading in.
    #[default]
    Rise,
    /// Drop in from 20px above, slightly delayed.
    Drop,
    /// Scale from 90% while fading in.
    Grow,
}

impl Motion {
    pub fn duration_ms(self) -> u32 {
        match self {
            Motion::Rise | Motion::Drop => 1000,
            Motion::Grow => 500,
        }
    }

    pub fn delay_ms(self) -> u32 {
        match self {
            Motion::Drop => 200,
            _ => 0,
        }
    }

    pub fn classes(self, phase: Phase) -> &'static str {
        match (self, phase.is_shown()) {
            (Motion::Rise, false) => "opacity-0 translate-y-[50px]",
            (Motion::Drop, false) => "opacity-0 -translate-y-5",
            (Motion::Grow, false) => "opacity-0 scale-90",
            (Motion::Rise | Motion::Drop, true) => "opacity-100 translate-y-0",
            (Motion::Grow, true) => "opacity-100 scale-100",
        }
    }

    pub fn style(self) -> String {
        format!(
            "transition-duration:{}ms;transition-delay:{}ms;",
            self.duration_ms(),
            self.delay_ms()
        )
    }
}

#[cfg(feature = "web")]
pub use view::Reveal;

#[cfg(feature = "web")]
mod view {
    use leptos::html;
    use leptos::prelude::*;
    use leptos_use::use_element_visibility;
    use wasm_bindgen::JsValue;

    use super::{Motion, Phase, RevealEvent};

    #[component]
    pub fn Reveal(
        #[prop(optional)] id: Option<&'static str>,
        #[prop(optional)] motion: Motion,
        /// Stay visible after the first entrance.
        #[prop(optional)]
        once: bool,
        #[prop(into, optional)] class: String,
        children: Children,
    ) -> impl IntoView {
        let target: NodeRef<html::Div> = NodeRef::new();
        let in_view = use_element_visibility(target);
        let phase = RwSignal::new(Phase::BeforeView);

        Effect::new(move |_| {
            let event = RevealEvent::Intersect(in_view.get());
            phase.update(|p| *p = p.on(event, once));
        });

        // children animate on hover too; only our own transition counts
        let on_transition_end = move |ev: leptos::ev::TransitionEvent| {
            let ours = match (ev.target(), target.get_untracked()) {
                (Some(t), Some(el)) => AsRef::<JsValue>::as_ref(&t) == AsRef::<JsValue>::as_ref(&el),
                _ => false,
            };
            if ours {
                phase.update(|p| *p = p.on(RevealEvent::TransitionEnd, once));
            }
        };

        view! {
            <div
                id=id
                node_ref=target
                class=move || format!("transition-all ease-out {class} {}", motion.classes(phase.get()))
                style=motion.style()
                on:transitionend=on_transition_end
            >
                {children()}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RevealEvent::*;

    fn run(events: &[RevealEvent], once: bool) -> Phase {
        events
            .iter()
            .fold(Phase::BeforeView, |phase, ev| phase.on(*ev, once))
    }

    #[test]
    fn enters_then_settles() {
        assert_eq!(run(&[Intersect(true)], false), Phase::Entering);
        assert_eq!(run(&[Intersect(true), TransitionEnd], false), Phase::Visible);
    }

    #[test]
    fn reversible_section_resets_after_leaving() {
        let phase = run(
            &[Intersect(true), TransitionEnd, Intersect(false), TransitionEnd],
            false,
        );
        assert_eq!(phase, Phase::BeforeView);
    }

    #[test]
    fn once_section_stays_visible() {
        let phase = run(
            &[Intersect(true), TransitionEnd, Intersect(false), TransitionEnd],
            true,
        );
        assert_eq!(phase, Phase::Visible);
    }

    #[test]
    fn reentering_mid_exit_turns_around() {
        let phase = run(&[Intersect(true), Intersect(false), Intersect(true)], false);
        assert_eq!(phase, Phase::Entering);
    }

    #[test]
    fn stray_transition_end_is_ignored_before_view() {
        assert_eq!(run(&[TransitionEnd, Intersect(false)], false), Phase::BeforeView);
    }

    #[test]
    fn hidden_and_shown_classes_differ() {
        for motion in [Motion::Rise, Motion::Drop, Motion::Grow] {
            assert_ne!(
                motion.classes(Phase::BeforeView),
                motion.classes(Phase::Visible)
            );
            assert_eq!(
                motion.classes(Phase::Exiting),
                motion.classes(Phase::BeforeView)
            );
        }
        assert_eq!(
            Motion::Drop.style(),
            "transition-duration:1000ms;transition-delay:200ms;"
        );
    }
}
