use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ResizeObserver};

/// Quiet period after the last size change before the surface is re-laid out.
pub(crate) const RESIZE_DEBOUNCE_MS: u32 = 200;

/// A scheduled job that can be called off before it runs.
pub(crate) trait Cancel {
    fn cancel(self);
}

impl Cancel for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

/// Holds at most one pending job. Arming a new one cancels the previous, so
/// in a burst only the last job is left to run.
pub(crate) struct PendingSlot<H: Cancel> {
    pending: Option<H>,
}

impl<H: Cancel> PendingSlot<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

/// Trailing-edge debounce: each `schedule` cancels the pending call.
#[derive(Clone)]
pub(crate) struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<PendingSlot<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(PendingSlot::new())),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        self.pending.borrow_mut().arm(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().cancel();
    }
}

struct ResizeBinding {
    observer: ResizeObserver,
    _on_resize: Closure<dyn FnMut(js_sys::Array)>,
    debouncer: Debouncer,
    window: web_sys::Window,
    on_unload: Closure<dyn Fn()>,
}

impl ResizeBinding {
    fn close(self) {
        self.observer.disconnect();
        self.debouncer.cancel();
        let _ = self
            .window
            .remove_event_listener_with_callback("beforeunload", self.on_unload.as_ref().unchecked_ref());
    }
}

thread_local! {
    static RESIZE_BINDING: RefCell<Option<ResizeBinding>> = const { RefCell::new(None) };
}

/// Watch `target` for size changes and call `on_settled` once it stops
/// resizing. Replaces any earlier observation.
pub(crate) fn observe(target: &Element, on_settled: impl Fn() + 'static) {
    disconnect();

    let Some(window) = web_sys::window() else {
        return;
    };

    let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS);
    let on_settled = Rc::new(on_settled);
    let on_resize = Closure::<dyn FnMut(js_sys::Array)>::new({
        let debouncer = debouncer.clone();
        move |_entries: js_sys::Array| {
            let on_settled = Rc::clone(&on_settled);
            debouncer.schedule(move || on_settled());
        }
    });

    let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(_) => {
            web_sys::console::warn_1(&"ResizeObserver unavailable; layout will not follow resizes".into());
            return;
        }
    };
    observer.observe(target);

    // Stop observing before the page goes away so no timer fires mid-unload.
    let on_unload = Closure::<dyn Fn()>::new({
        let observer = observer.clone();
        let debouncer = debouncer.clone();
        move || {
            observer.disconnect();
            debouncer.cancel();
        }
    });
    let _ = window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());

    RESIZE_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(ResizeBinding {
            observer,
            _on_resize: on_resize,
            debouncer,
            window,
            on_unload,
        });
    });
}

pub(crate) fn disconnect() {
    RESIZE_BINDING.with(|slot| {
        if let Some(binding) = slot.borrow_mut().take() {
            binding.close();
        }
    });
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn debouncer_runs_only_the_last_call_of_a_burst() {
        let runs = Rc::new(Cell::new(Vec::<u32>::new()));
        let debouncer = Debouncer::new(20);
        for n in 1..=3 {
            let runs = Rc::clone(&runs);
            debouncer.schedule(move || {
                let mut seen = runs.take();
                seen.push(n);
                runs.set(seen);
            });
        }

        TimeoutFuture::new(80).await;
        assert_eq!(runs.take(), vec![3]);
    }
}
