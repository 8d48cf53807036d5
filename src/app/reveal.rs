use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::observer::{Notify, ObserverOptions, ObserverRoot, VisibilitySource, WatchHandle};
use crate::reveal::{compute_style, compute_style_from, Offset, RevealOptions, ScrollReveal};

/// Visibility reports from the browser's `IntersectionObserver`, via leptos-use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

pub struct BrowserWatch {
    stop: Box<dyn Fn() + Send + Sync>,
}

impl WatchHandle for BrowserWatch {
    fn release(self) {
        (self.stop)();
    }
}

impl VisibilitySource for BrowserViewport {
    type Target = NodeRef<Div>;
    type Handle = BrowserWatch;

    fn watch(
        &self,
        target: &NodeRef<Div>,
        options: &ObserverOptions,
        mut notify: Notify,
    ) -> Option<BrowserWatch> {
        if let ObserverRoot::Element(id) = &options.root {
            log::warn!("scroll container #{id} is not supported, observing the viewport");
        }
        let browser_options = UseIntersectionObserverOptions::default()
            .thresholds(options.threshold.ratios())
            .root_margin(options.root_margin.clone());
        // the node ref is tracked, so binding before mount subscribes once the element exists
        let observer = use_intersection_observer_with_options(
            *target,
            move |entries, _| {
                if let Some(entry) = entries.last() {
                    notify(entry.is_intersecting());
                }
            },
            browser_options,
        );
        Some(BrowserWatch {
            stop: Box::new(observer.stop),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub node_ref: NodeRef<Div>,
    pub is_intersecting: Signal<bool>,
    pub delay_ms: u32,
}

impl Reveal {
    pub fn style(&self) -> String {
        compute_style(self.is_intersecting.get(), self.delay_ms).to_css()
    }

    /// Style for a child that enters from `from` with its own delay.
    pub fn style_from(&self, delay_ms: u32, from: Offset) -> String {
        compute_style_from(self.is_intersecting.get(), delay_ms, from).to_css()
    }
}

/// Reveals the element behind `node_ref` the first time it scrolls into view.
pub fn use_scroll_reveal(options: RevealOptions) -> Reveal {
    let node_ref = NodeRef::<Div>::new();
    let visible = RwSignal::new(false);
    let delay_ms = options.delay_ms;

    match ScrollReveal::new(BrowserViewport, options) {
        Ok(mut reveal) => {
            reveal.on_change(move |state| visible.set(state.is_intersecting));
            reveal.bind(&node_ref);
            let reveal = StoredValue::new(reveal);
            on_cleanup(move || {
                reveal.try_update_value(|r| r.unbind());
            });
        }
        Err(e) => log::warn!("invalid reveal options, element stays hidden: {e}"),
    }

    Reveal {
        node_ref,
        is_intersecting: visible.into(),
        delay_ms,
    }
}
