use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the viewport has scrolled past a fixed offset and reports
/// changes to a listener until it is detached.
pub struct ScrollTracker<F: FnMut(bool)> {
    threshold: f64,
    past: bool,
    on_change: Option<F>,
}

impl<F: FnMut(bool)> ScrollTracker<F> {
    pub fn new(threshold: f64, on_change: F) -> Self {
        Self {
            threshold,
            past: false,
            on_change: Some(on_change),
        }
    }

    pub fn is_past(&self) -> bool {
        self.past
    }

    pub fn is_attached(&self) -> bool {
        self.on_change.is_some()
    }

    /// Feeds a new scroll offset. Returns true if the listener was notified.
    pub fn handle(&mut self, offset: f64) -> bool {
        let past = past_threshold(offset, self.threshold);
        if !self.is_attached() || past == self.is_past() {
            return false;
        }
        self.past = past;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(past);
        }
        true
    }

    /// Drops the listener. Events delivered after this point are ignored.
    pub fn detach(&mut self) {
        self.on_change = None;
    }
}

type SharedTracker = Rc<RefCell<ScrollTracker<Box<dyn FnMut(bool)>>>>;

/// Returns true while the window is scrolled further than `threshold` pixels.
/// The scroll listener lives exactly as long as the calling component.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let on_change: Box<dyn FnMut(bool)> = Box::new(move |past| scrolled.set(past));
                    let tracker: SharedTracker =
                        Rc::new(RefCell::new(ScrollTracker::new(*threshold, on_change)));

                    let callback = Closure::<dyn FnMut()>::new({
                        let tracker = tracker.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(offset) = win.scroll_y() {
                                    tracker.borrow_mut().handle(offset);
                                }
                            }
                        }
                    });

                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => debug!("scroll listener attached (threshold {}px)", threshold),
                        Err(e) => error!("failed to attach scroll listener: {:?}", e),
                    }

                    // Page may be restored mid-scroll
                    if let Ok(offset) = window.scroll_y() {
                        tracker.borrow_mut().handle(offset);
                    }

                    Box::new(move || {
                        tracker.borrow_mut().detach();
                        if let Err(e) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            error!("failed to remove scroll listener: {:?}", e);
                        }
                        debug!("scroll listener removed");
                    })
                } else {
                    error!("no window available, scroll tracking disabled");
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_tracker(threshold: f64) -> (ScrollTracker<impl FnMut(bool)>, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let tracker = ScrollTracker::new(threshold, move |past| sink.borrow_mut().push(past));
        (tracker, seen)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!past_threshold(0.0, 50.0));
        assert!(!past_threshold(50.0, 50.0));
        assert!(past_threshold(51.0, 50.0));
    }

    #[test]
    fn tracker_flips_at_boundary() {
        let (mut tracker, seen) = recording_tracker(50.0);

        assert!(!tracker.handle(50.0));
        assert!(!tracker.is_past());

        assert!(tracker.handle(51.0));
        assert!(tracker.is_past());

        assert!(tracker.handle(50.0));
        assert!(!tracker.is_past());

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn repeated_offsets_on_same_side_notify_once() {
        let (mut tracker, seen) = recording_tracker(50.0);
        for offset in [60.0, 120.0, 800.0, 51.0] {
            tracker.handle(offset);
        }
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn detached_tracker_ignores_late_events() {
        let (mut tracker, seen) = recording_tracker(50.0);
        tracker.handle(100.0);
        tracker.detach();
        assert!(!tracker.is_attached());

        assert!(!tracker.handle(0.0));
        assert!(!tracker.handle(300.0));
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(tracker.is_past());
    }
}
