//! Scroll-driven UI activation: reveal-on-scroll sections, animated stat
//! counters and the geometry rules behind the header's active nav link.
//!
//! The engine is created by the page that owns the observed elements and torn
//! down when that page unmounts. Elements opt in by class name:
//! `fade-in-up` sections get a `revealed` class on first intersection;
//! `count-up` elements carry `data-target` (and optionally `data-suffix`) and
//! animate their text content once scrolled into view. Both transitions are
//! one-way: an element is unobserved the moment it fires.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub mod counter;
pub mod nav;

use self::counter::CounterAnimation;

pub const REVEAL_CLASS: &str = "fade-in-up";
pub const REVEALED_CLASS: &str = "revealed";
pub const COUNTER_CLASS: &str = "count-up";

// Reveal slightly before the section fully enters the viewport.
const REVEAL_THRESHOLD: f64 = 0.5;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -20px 0px";
const COUNTER_THRESHOLD: f64 = 0.5;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct ViewportActivation {
    reveal_observer: Option<IntersectionObserver>,
    counter_observer: Option<IntersectionObserver>,
    disposed: Rc<Cell<bool>>,
    _reveal_cb: ObserverCallback,
    _counter_cb: ObserverCallback,
}

impl ViewportActivation {
    /// Watches every reveal target and counter currently in the document.
    /// Returns `None` only if the browser refuses to construct an observer.
    pub fn mount(document: &Document) -> Option<Self> {
        let disposed = Rc::new(Cell::new(false));

        let reveal_cb: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let classes = target.class_list();
                    if !classes.contains(REVEALED_CLASS) {
                        let _ = classes.add_1(REVEALED_CLASS);
                    }
                    observer.unobserve(&target);
                }
            },
        ));

        let counter_disposed = disposed.clone();
        let counter_cb: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    // Unobserve first so a slow animation can't be restarted
                    // by a second intersection.
                    observer.unobserve(&target);
                    let Some(raw) = target.get_attribute("data-target") else {
                        continue;
                    };
                    let Ok(value) = raw.parse::<u64>() else {
                        continue;
                    };
                    let suffix = target.get_attribute("data-suffix").unwrap_or_default();
                    animate_counter(
                        target,
                        CounterAnimation::new(value, suffix),
                        counter_disposed.clone(),
                    );
                }
            },
        ));

        let mut reveal_options = IntersectionObserverInit::new();
        reveal_options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        reveal_options.root_margin(REVEAL_ROOT_MARGIN);
        let reveal_observer =
            IntersectionObserver::new_with_options(reveal_cb.as_ref().unchecked_ref(), &reveal_options)
                .ok()?;

        let mut counter_options = IntersectionObserverInit::new();
        counter_options.threshold(&JsValue::from_f64(COUNTER_THRESHOLD));
        let counter_observer = IntersectionObserver::new_with_options(
            counter_cb.as_ref().unchecked_ref(),
            &counter_options,
        )
        .ok()?;

        observe_all(document, REVEAL_CLASS, &reveal_observer);
        observe_all(document, COUNTER_CLASS, &counter_observer);

        Some(Self {
            reveal_observer: Some(reveal_observer),
            counter_observer: Some(counter_observer),
            disposed,
            _reveal_cb: reveal_cb,
            _counter_cb: counter_cb,
        })
    }

    /// Disconnects both observers and stops in-flight counter animations.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        self.disposed.set(true);
        if let Some(observer) = self.reveal_observer.take() {
            observer.disconnect();
        }
        if let Some(observer) = self.counter_observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for ViewportActivation {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn observe_all(document: &Document, class: &str, observer: &IntersectionObserver) {
    let Ok(list) = document.query_selector_all(&format!(".{}", class)) else {
        return;
    };
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
            }
        }
    }
}

/// Drives one counter element through its animation frames. The shared
/// `disposed` flag makes a frame that fires after engine teardown a no-op, so
/// no text mutation is observable once the owning page has unmounted.
fn animate_counter(target: Element, mut animation: CounterAnimation, disposed: Rc<Cell<bool>>) {
    let frame: FrameHandle = Rc::new(RefCell::new(None));
    let handle = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if disposed.get() {
            handle.borrow_mut().take();
            return;
        }
        animation.tick();
        target.set_text_content(Some(&animation.display()));
        if animation.is_done() {
            handle.borrow_mut().take();
            return;
        }
        request_frame(&handle);
    }) as Box<dyn FnMut()>));
    request_frame(&frame);
}

fn request_frame(frame: &FrameHandle) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
