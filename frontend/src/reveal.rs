use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// One-shot visibility flag. Once set it stays set, so content that has been
/// read never disappears again when scrolled out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Records an intersection update. Returns true only for the update that
    /// flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.is_revealed() || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Where an element rests before it is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Pushed down by the given pixels, rises into place.
    Rise(f64),
    /// Pushed sideways (negative is left), slides into place.
    Slide(f64),
}

impl Offset {
    fn transform(&self) -> String {
        match self {
            Offset::Rise(px) => format!("translateY({}px)", px),
            Offset::Slide(px) => format!("translateX({}px)", px),
        }
    }
}

pub fn stagger_delay(index: usize, step_s: f64) -> f64 {
    index as f64 * step_s
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub offset: Offset,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Motion {
    pub fn section() -> Self {
        Self {
            offset: Offset::Rise(config::SECTION_RISE_PX),
            duration_s: config::SECTION_DURATION_S,
            delay_s: 0.0,
        }
    }

    /// A card at `index` in a list whose items start `step_s` seconds apart.
    pub fn card(index: usize, step_s: f64) -> Self {
        Self {
            offset: Offset::Rise(config::CARD_RISE_PX),
            duration_s: config::CARD_DURATION_S,
            delay_s: stagger_delay(index, step_s),
        }
    }

    pub fn slide(px: f64) -> Self {
        Self {
            offset: Offset::Slide(px),
            duration_s: config::CARD_DURATION_S,
            delay_s: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_duration(mut self, duration_s: f64) -> Self {
        self.duration_s = duration_s;
        self
    }

    pub fn with_delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Inline style for the element in its pre-reveal or resting state. The
    /// transition is always present so the flip animates.
    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {d:.2}s ease-out {delay:.2}s, transform {d:.2}s ease-out {delay:.2}s;",
            d = self.duration_s,
            delay = self.delay_s,
        );
        if revealed {
            format!("opacity: 1; transform: none; {}", transition)
        } else {
            format!("opacity: 0; transform: {}; {}", self.offset.transform(), transition)
        }
    }

    /// `@keyframes` rule moving from the offset start to the resting state.
    /// Used for entrances that run on load, where there is no earlier style
    /// for a transition to start from.
    pub fn keyframes(&self, name: &str) -> String {
        format!(
            "@keyframes {} {{ from {{ opacity: 0; transform: {}; }} to {{ opacity: 1; transform: none; }} }}",
            name,
            self.offset.transform(),
        )
    }

    /// Inline style that plays the `name` keyframes. Fill mode `both` holds the
    /// start frame during the delay.
    pub fn animation(&self, name: &str) -> String {
        format!(
            "animation: {} {:.2}s ease-out {:.2}s both;",
            name, self.duration_s, self.delay_s,
        )
    }
}

/// Observes `node` and returns true from the first time it intersects the
/// viewport (shrunk by `root_margin`) onwards.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, root_margin): &(NodeRef, &'static str)| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => observe_once(&element, root_margin, revealed),
                    None => {
                        debug!("reveal target not mounted, showing content");
                        revealed.set(true);
                        Box::new(|| ())
                    }
                };
                move || {
                    destructor();
                }
            },
            (node, root_margin),
        );
    }

    *revealed
}

fn observe_once(
    element: &Element,
    root_margin: &str,
    revealed: UseStateHandle<bool>,
) -> Box<dyn FnOnce()> {
    let latch = Rc::new(RefCell::new(RevealLatch::default()));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
        let revealed = revealed.clone();
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.borrow_mut().observe(intersecting) {
                revealed.set(true);
                observer.disconnect();
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(e) => {
            error!("failed to create intersection observer: {:?}", e);
            revealed.set(true);
            Box::new(|| ())
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Motion::section())]
    pub motion: Motion,
    #[prop_or(config::CARD_REVEAL_MARGIN)]
    pub margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps its children in a block that fades and moves into place the first
/// time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.margin);

    html! {
        <div ref={node} class={props.class.clone()} style={props.motion.style(revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        assert!(!RevealLatch::default().is_revealed());
    }

    #[test]
    fn latch_fires_once_and_never_reverts() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // scroll out, back in, out again
        for intersecting in [false, true, false, false, true] {
            assert!(!latch.observe(intersecting));
            assert!(latch.is_revealed());
        }
    }

    #[test]
    fn stagger_strictly_increases() {
        for step in [config::SERVICE_STAGGER_S, config::TEAM_STAGGER_S] {
            for i in 0..8 {
                assert!(stagger_delay(i + 1, step) > stagger_delay(i, step));
            }
        }
        assert_eq!(stagger_delay(0, config::SERVICE_STAGGER_S), 0.0);
    }

    #[test]
    fn card_motion_carries_stagger() {
        let third = Motion::card(2, config::TEAM_STAGGER_S);
        assert_eq!(third.offset, Offset::Rise(30.0));
        assert!((third.delay_s - 0.4).abs() < 1e-9);
        assert!(third.style(false).contains("ease-out 0.40s"));
    }

    #[test]
    fn section_style_before_and_after_reveal() {
        let motion = Motion::section();
        let hidden = motion.style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(40px);"));
        assert!(hidden.contains("opacity 0.70s ease-out 0.00s"));

        let shown = motion.style(true);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("transform 0.70s ease-out"));
    }

    #[test]
    fn slide_uses_horizontal_offset() {
        assert!(Motion::slide(-30.0).style(false).contains("translateX(-30px)"));
        assert!(Motion::slide(30.0).style(false).contains("translateX(30px)"));
    }

    #[test]
    fn load_entrance_holds_start_frame_through_delay() {
        let motion = Motion::slide(-50.0).with_duration(0.8).with_delay(0.2);
        assert_eq!(motion.animation("enterLeft"), "animation: enterLeft 0.80s ease-out 0.20s both;");

        let frames = motion.keyframes("enterLeft");
        assert!(frames.starts_with("@keyframes enterLeft {"));
        assert!(frames.contains("from { opacity: 0; transform: translateX(-50px); }"));
        assert!(frames.contains("to { opacity: 1; transform: none; }"));
    }
}
