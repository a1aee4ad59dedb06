use std::time::Duration;

/// Quadratic ease-in/ease-out over `t` in `0..=1`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (2.0 - 2.0 * t).powi(2) / 2.0
    }
}

/// Vertical scroll position over time for one smooth-scroll.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn position(&self, elapsed_ms: f64) -> f64 {
        if self.is_done(elapsed_ms) {
            return self.to;
        }
        let t = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_quad(t)
    }
}

#[cfg(feature = "web")]
pub use driver::smooth_scroll_to;

#[cfg(feature = "web")]
mod driver {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use leptos::logging::{error, log};
    use wasm_bindgen::{JsCast, prelude::Closure};

    use super::ScrollTween;
    use crate::dom::{js_err, window};

    thread_local! {
        // bumped per scroll so an older animation notices it was superseded
        static GENERATION: Cell<u64> = const { Cell::new(0) };
    }

    /// Animates the window so the element with id `anchor` lands at the top.
    /// A missing element is not an error.
    pub fn smooth_scroll_to(anchor: &str, duration: Duration) -> Result<()> {
        let window = window()?;
        let document = window.document().context("window has no document")?;
        let Some(target) = document.get_element_by_id(anchor) else {
            log!("no element #{anchor}, skipping scroll");
            return Ok(());
        };

        let from = window.scroll_y().map_err(js_err)?;
        let x = window.scroll_x().map_err(js_err)?;
        let tween = ScrollTween::new(from, from + target.get_bounding_client_rect().top(), duration);
        let started = window
            .performance()
            .context("performance API unavailable")?
            .now();

        let generation = GENERATION.with(|g| {
            g.set(g.get() + 1);
            g.get()
        });

        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let win = window.clone();

        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if GENERATION.with(Cell::get) != generation {
                let _ = f.borrow_mut().take();
                return;
            }

            let elapsed = (now - started).max(0.0);
            win.scroll_to_with_x_and_y(x, tween.position(elapsed));

            if tween.is_done(elapsed) {
                let _ = f.borrow_mut().take();
                return;
            }

            if let Some(cb) = f.borrow().as_ref() {
                if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    error!("scroll frame not scheduled: {e:?}");
                }
            }
        }) as Box<dyn FnMut(f64)>));

        // initial kick
        if let Some(cb) = g.borrow().as_ref() {
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(js_err)
                .context("scheduling first scroll frame")?;
        }
        Ok(())
    }
}
