//! Reveal-on-scroll styling on top of [`ViewportObserver`].

use std::fmt;

use crate::observer::{
    IntersectionState, ObserverError, ObserverOptions, ViewportObserver, VisibilitySource,
};

pub const REVEAL_DISTANCE_PX: i32 = 30;
pub const REVEAL_DURATION_MS: u32 = 600;
pub const DEFAULT_ANIMATION_CLASS: &str = "animate-fade-in";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub delay_ms: u32,
    /// Accepted for callers that pair the reveal with a CSS animation class.
    /// The computed style never applies it.
    pub animation_class: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: "0px".to_string(),
            delay_ms: 0,
            animation_class: DEFAULT_ANIMATION_CLASS.to_string(),
        }
    }
}

impl RevealOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn animation_class(mut self, animation_class: impl Into<String>) -> Self {
        self.animation_class = animation_class.into();
        self
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions::default()
            .threshold(self.threshold)
            .root_margin(self.root_margin.clone())
            .trigger_once(true)
    }
}

/// Where an element starts before sliding into place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    X(i32),
    Y(i32),
}

impl Offset {
    fn at_rest(self) -> Self {
        match self {
            Self::X(_) => Self::X(0),
            Self::Y(_) => Self::Y(0),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (axis, px) = match self {
            Self::X(px) => ("X", px),
            Self::Y(px) => ("Y", px),
        };
        if *px == 0 {
            write!(f, "translate{axis}(0)")
        } else {
            write!(f, "translate{axis}({px}px)")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = f64::from(self.duration_ms) / 1000.0;
        write!(f, "all {seconds}s ease-out {}ms", self.delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: Offset,
    pub transition: Transition,
}

impl RevealStyle {
    pub fn is_revealed(&self) -> bool {
        self.opacity >= 1.0
    }

    /// Inline `style` attribute value.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: {}; transition: {};",
            self.opacity, self.offset, self.transition
        )
    }
}

pub fn compute_style(is_intersecting: bool, delay_ms: u32) -> RevealStyle {
    compute_style_from(is_intersecting, delay_ms, Offset::Y(REVEAL_DISTANCE_PX))
}

pub fn compute_style_from(is_intersecting: bool, delay_ms: u32, from: Offset) -> RevealStyle {
    let transition = Transition {
        duration_ms: REVEAL_DURATION_MS,
        delay_ms,
    };
    if is_intersecting {
        RevealStyle {
            opacity: 1.0,
            offset: from.at_rest(),
            transition,
        }
    } else {
        RevealStyle {
            opacity: 0.0,
            offset: from,
            transition,
        }
    }
}

/// One-shot reveal controller for a single element.
pub struct ScrollReveal<S: VisibilitySource> {
    observer: ViewportObserver<S>,
    delay_ms: u32,
    animation_class: String,
}

impl<S: VisibilitySource> ScrollReveal<S> {
    pub fn new(source: S, options: RevealOptions) -> Result<Self, ObserverError> {
        let observer = ViewportObserver::new(source, options.observer_options())?;
        Ok(Self {
            observer,
            delay_ms: options.delay_ms,
            animation_class: options.animation_class,
        })
    }

    pub fn bind(&mut self, target: &S::Target) {
        self.observer.bind(target);
    }

    pub fn unbind(&mut self) {
        self.observer.unbind();
    }

    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(IntersectionState) + Send + 'static,
    {
        self.observer.on_change(listener);
    }

    pub fn is_intersecting(&self) -> bool {
        self.observer.state().is_intersecting
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn animation_class(&self) -> &str {
        &self.animation_class
    }

    pub fn observer(&self) -> &ViewportObserver<S> {
        &self.observer
    }

    pub fn compute_style(&self) -> RevealStyle {
        compute_style(self.is_intersecting(), self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::fake::FakeViewport;

    #[test]
    fn test_hidden_and_revealed_styles() {
        let hidden = compute_style(false, 200);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset, Offset::Y(30));
        assert!(!hidden.is_revealed());
        assert_eq!(
            hidden.to_css(),
            "opacity: 0; transform: translateY(30px); transition: all 0.6s ease-out 200ms;"
        );

        let revealed = compute_style(true, 200);
        assert!(revealed.is_revealed());
        assert_eq!(
            revealed.to_css(),
            "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out 200ms;"
        );
        assert_eq!(hidden.transition, revealed.transition);
    }

    #[test]
    fn test_compute_style_is_idempotent() {
        for is_intersecting in [false, true] {
            for delay in [0, 150, 800] {
                assert_eq!(
                    compute_style(is_intersecting, delay),
                    compute_style(is_intersecting, delay)
                );
            }
        }
    }

    #[test]
    fn test_horizontal_entrance() {
        let hidden = compute_style_from(false, 400, Offset::X(-50));
        assert_eq!(hidden.offset.to_string(), "translateX(-50px)");
        let revealed = compute_style_from(true, 400, Offset::X(-50));
        assert_eq!(revealed.offset, Offset::X(0));
        assert_eq!(revealed.offset.to_string(), "translateX(0)");
    }

    #[test]
    fn test_reveal_options_force_one_shot() {
        let options = RevealOptions::default().threshold(0.2).root_margin("-20px");
        let observer = options.observer_options();
        assert!(observer.trigger_once);
        assert_eq!(observer.root_margin, "-20px");
        assert_eq!(observer.threshold.ratios(), vec![0.2]);
    }

    #[test]
    fn test_never_visible_stays_hidden() {
        let fake = FakeViewport::default();
        let options = RevealOptions::default().threshold(0.2);
        let mut reveal = ScrollReveal::new(fake.clone(), options).unwrap();
        assert_eq!(reveal.compute_style(), compute_style(false, 0));

        reveal.bind(&3);
        for _ in 0..3 {
            fake.emit(3, false);
            assert_eq!(reveal.compute_style(), compute_style(false, 0));
        }
    }

    #[test]
    fn test_revealed_style_never_regresses() {
        let fake = FakeViewport::default();
        let options = RevealOptions::default().threshold(0.2).delay_ms(100);
        let mut reveal = ScrollReveal::new(fake.clone(), options).unwrap();
        reveal.bind(&3);

        fake.emit(3, true);
        let revealed = reveal.compute_style();
        assert!(revealed.is_revealed());
        assert_eq!(revealed.transition.delay_ms, 100);

        fake.emit(3, false);
        fake.emit(3, false);
        assert_eq!(reveal.compute_style(), revealed);
        assert!(!reveal.observer().is_watching());
    }

    #[test]
    fn test_animation_class_does_not_touch_style() {
        let fake = FakeViewport::default();
        let options = RevealOptions::default().animation_class("animate-slide-up");
        let reveal = ScrollReveal::new(fake, options).unwrap();
        assert_eq!(reveal.animation_class(), "animate-slide-up");
        assert!(!reveal.compute_style().to_css().contains("animate"));
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let options = RevealOptions::default().threshold(2.0);
        assert!(ScrollReveal::new(FakeViewport::default(), options).is_err());
    }
}
