use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{MOUNT_REVEAL_DELAY_MS, REVEAL_STAGGER_MS};

/// Root margin used by section headings: reveal once the element is 80px inside the viewport.
pub const HEADING_MARGIN: &str = "-80px";
pub const EDGE_MARGIN: &str = "0px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// Keeps the JS callback alive for as long as the observer is registered.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether a batch of observer entries brings the element into view.
fn entered_view(intersecting: impl IntoIterator<Item = bool>) -> bool {
    intersecting.into_iter().any(|hit| hit)
}

/// Folds observer batches into visibility. Once shown, an element never hides again.
fn next_visibility(visible: bool, intersecting: impl IntoIterator<Item = bool>) -> bool {
    visible || entered_view(intersecting)
}

fn observe_once(
    element: &Element,
    root_margin: &str,
    reveal: UseStateSetter<bool>,
) -> Result<RevealObserver, JsValue> {
    let mut visible = false;
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let batch = entries
            .iter()
            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        visible = next_visibility(visible, batch);
        if visible {
            reveal.set(true);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Returns `false` until `node` first scrolls into the viewport, then `true` for good.
///
/// Without `IntersectionObserver` support the element is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef, root_margin: &'static str) -> bool {
    let visible = use_state(|| false);

    {
        let reveal = visible.setter();
        use_effect_with_deps(
            move |node| {
                let observer = match node.cast::<Element>() {
                    Some(element) => match observe_once(&element, root_margin, reveal.clone()) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                            reveal.set(true);
                            None
                        }
                    },
                    None => {
                        reveal.set(true);
                        None
                    }
                };
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

/// Flips to `true` one frame after mount so the entrance transition runs on load.
#[hook]
pub fn use_mount_reveal() -> bool {
    let visible = use_state(|| false);

    {
        let reveal = visible.setter();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(MOUNT_REVEAL_DELAY_MS, move || reveal.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    *visible
}

pub fn reveal_classes(base: &'static str, visible: bool) -> Classes {
    classes!(base, "reveal", visible.then(|| "visible"))
}

/// Entrance delay for the `index`-th item of a staggered list.
///
/// Feeds `--reveal-delay`, which only the opacity/transform entrance transitions read.
pub fn reveal_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}

pub fn reveal_style(index: usize) -> String {
    format!("--reveal-delay: {}ms;", reveal_delay_ms(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_sixty_ms() {
        assert_eq!(reveal_style(0), "--reveal-delay: 0ms;");
        assert_eq!(reveal_style(1), "--reveal-delay: 60ms;");
        assert_eq!(reveal_style(2), "--reveal-delay: 120ms;");
    }

    #[test]
    fn stagger_saturates_instead_of_wrapping() {
        assert_eq!(reveal_delay_ms(usize::MAX), u32::MAX);
        assert_eq!(reveal_delay_ms(u32::MAX as usize / 2), u32::MAX);
    }

    #[test]
    fn stagger_never_sets_a_blanket_transition_delay() {
        // A plain transition-delay would also hold back hover effects
        assert!(!reveal_style(2).contains("transition-delay"));
    }

    #[test]
    fn stays_hidden_until_an_entry_intersects() {
        assert!(!next_visibility(false, Vec::new()));
        assert!(!next_visibility(false, [false, false]));
        assert!(next_visibility(false, [false, true]));
    }

    #[test]
    fn once_revealed_later_batches_never_hide() {
        let batches: [&[bool]; 4] = [&[false], &[true], &[false], &[]];
        let history: Vec<bool> = batches
            .iter()
            .scan(false, |visible, batch| {
                *visible = next_visibility(*visible, batch.iter().copied());
                Some(*visible)
            })
            .collect();

        assert_eq!(history, [false, true, true, true]);
    }

    #[test]
    fn visible_class_only_once_revealed() {
        let hidden = reveal_classes("section-title", false);
        assert!(hidden.contains("reveal"));
        assert!(!hidden.contains("visible"));

        let shown = reveal_classes("section-title", true);
        assert!(shown.contains("section-title"));
        assert!(shown.contains("visible"));
    }
}
