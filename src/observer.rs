//! Visibility tracking for a single element.
//!
//! The browser's intersection machinery is reached through [`VisibilitySource`],
//! so everything here runs (and is tested) without a DOM. [`ViewportObserver`]
//! owns at most one subscription at a time and releases it exactly once: on
//! unbind, rebind, reconfigure, drop, or when a one-shot observer triggers.

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError, Weak};

use regex::Regex;
use thiserror::Error;

static ROOT_MARGIN_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(\d+(\.\d+)?|\.\d+)(px|%)$").expect("root margin pattern should compile")
});

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserverError {
    #[error("threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
    #[error("threshold list is empty")]
    EmptyThreshold,
    #[error("threshold list is not in ascending order")]
    UnorderedThresholds,
    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),
}

/// Fraction(s) of the target's area that must be visible for a report to fire.
#[derive(Debug, Clone, PartialEq)]
pub enum Threshold {
    Ratio(f64),
    Steps(Vec<f64>),
}

impl Threshold {
    pub fn ratios(&self) -> Vec<f64> {
        match self {
            Self::Ratio(r) => vec![*r],
            Self::Steps(steps) => steps.clone(),
        }
    }

    fn validate(&self) -> Result<(), ObserverError> {
        let ratios = self.ratios();
        if ratios.is_empty() {
            return Err(ObserverError::EmptyThreshold);
        }
        if let Some(bad) = ratios.iter().find(|r| !(0.0..=1.0).contains(*r)) {
            return Err(ObserverError::InvalidThreshold(*bad));
        }
        if ratios.windows(2).any(|w| w[0] > w[1]) {
            return Err(ObserverError::UnorderedThresholds);
        }
        Ok(())
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Ratio(0.1)
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self::Ratio(value)
    }
}

impl From<Vec<f64>> for Threshold {
    fn from(value: Vec<f64>) -> Self {
        Self::Steps(value)
    }
}

/// The box intersections are measured against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ObserverRoot {
    #[default]
    Viewport,
    /// A scrollable ancestor, by element id.
    Element(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: Threshold,
    pub root: ObserverRoot,
    /// CSS margin shorthand applied to the root box, one to four `px`/`%` lengths.
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            root: ObserverRoot::Viewport,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

impl ObserverOptions {
    pub fn threshold(mut self, threshold: impl Into<Threshold>) -> Self {
        self.threshold = threshold.into();
        self
    }

    pub fn root(mut self, root: ObserverRoot) -> Self {
        self.root = root;
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    pub fn validate(&self) -> Result<(), ObserverError> {
        self.threshold.validate()?;
        let parts = self.root_margin.split_whitespace().collect::<Vec<_>>();
        let well_formed = (1..=4).contains(&parts.len())
            && parts.iter().all(|p| ROOT_MARGIN_LENGTH.is_match(p));
        if !well_formed {
            return Err(ObserverError::InvalidRootMargin(self.root_margin.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntersectionState {
    pub is_intersecting: bool,
    pub has_triggered: bool,
}

/// What the delivery path should do with the subscription after a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Continue,
    Disconnect,
}

/// The state machine behind [`ViewportObserver`], without any subscription handling.
#[derive(Debug, Clone, Default)]
pub struct IntersectionTracker {
    trigger_once: bool,
    state: IntersectionState,
}

impl IntersectionTracker {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            state: IntersectionState::default(),
        }
    }

    pub fn state(&self) -> IntersectionState {
        self.state
    }

    pub fn is_latched(&self) -> bool {
        self.trigger_once && self.state.has_triggered
    }

    pub fn set_trigger_once(&mut self, trigger_once: bool) {
        self.trigger_once = trigger_once;
    }

    pub fn record(&mut self, is_intersecting: bool) -> Delivery {
        if self.is_latched() {
            return Delivery::Disconnect;
        }
        if is_intersecting {
            self.state.is_intersecting = true;
            if self.trigger_once {
                self.state.has_triggered = true;
                return Delivery::Disconnect;
            }
        } else if !self.trigger_once {
            self.state.is_intersecting = false;
        }
        Delivery::Continue
    }
}

/// Callback a [`VisibilitySource`] invokes with each visibility report, in order.
pub type Notify = Box<dyn FnMut(bool) + Send>;

/// A live subscription. Releasing consumes it, so it can only happen once.
pub trait WatchHandle {
    fn release(self);
}

/// Capability: subscribe to visibility changes of a target.
pub trait VisibilitySource {
    type Target;
    type Handle: WatchHandle + Send + 'static;

    /// Returns `None` when the target can't be observed (e.g. not mounted yet).
    fn watch(
        &self,
        target: &Self::Target,
        options: &ObserverOptions,
        notify: Notify,
    ) -> Option<Self::Handle>;
}

type Listener = Box<dyn FnMut(IntersectionState) + Send>;

struct Shared<H> {
    tracker: IntersectionTracker,
    handle: Option<H>,
    // bumped on every unbind; reports carrying an older value are dropped
    generation: u64,
    listener: Option<Listener>,
}

fn lock<H>(shared: &Mutex<Shared<H>>) -> MutexGuard<'_, Shared<H>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ViewportObserver<S: VisibilitySource> {
    source: S,
    options: ObserverOptions,
    shared: Arc<Mutex<Shared<S::Handle>>>,
}

impl<S: VisibilitySource> ViewportObserver<S> {
    pub fn new(source: S, options: ObserverOptions) -> Result<Self, ObserverError> {
        options.validate()?;
        let shared = Shared {
            tracker: IntersectionTracker::new(options.trigger_once),
            handle: None,
            generation: 0,
            listener: None,
        };
        Ok(Self {
            source,
            options,
            shared: Arc::new(Mutex::new(shared)),
        })
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn state(&self) -> IntersectionState {
        lock(&self.shared).tracker.state()
    }

    pub fn is_watching(&self) -> bool {
        lock(&self.shared).handle.is_some()
    }

    /// Called after every report that changes the state.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(IntersectionState) + Send + 'static,
    {
        lock(&self.shared).listener = Some(Box::new(listener));
    }

    pub fn bind(&mut self, target: &S::Target) {
        self.unbind();
        let generation = {
            let shared = lock(&self.shared);
            if shared.tracker.is_latched() {
                log::debug!("observer already triggered, not resubscribing");
                return;
            }
            shared.generation
        };

        let weak = Arc::downgrade(&self.shared);
        let notify: Notify = Box::new(move |is_intersecting| {
            deliver(&weak, generation, is_intersecting);
        });
        let Some(handle) = self.source.watch(target, &self.options, notify) else {
            log::debug!("visibility source could not bind target");
            return;
        };

        let mut shared = lock(&self.shared);
        if shared.generation == generation && !shared.tracker.is_latched() {
            shared.handle = Some(handle);
        } else {
            // triggered synchronously while subscribing
            drop(shared);
            handle.release();
        }
    }

    pub fn unbind(&mut self) {
        let handle = {
            let mut shared = lock(&self.shared);
            shared.generation = shared.generation.wrapping_add(1);
            shared.handle.take()
        };
        if let Some(handle) = handle {
            handle.release();
        }
    }

    /// Swaps the options, releasing the current subscription. Rebinds when a target is given.
    /// Invalid options leave the observer untouched.
    pub fn reconfigure(
        &mut self,
        options: ObserverOptions,
        target: Option<&S::Target>,
    ) -> Result<(), ObserverError> {
        options.validate()?;
        self.unbind();
        lock(&self.shared)
            .tracker
            .set_trigger_once(options.trigger_once);
        self.options = options;
        if let Some(target) = target {
            self.bind(target);
        }
        Ok(())
    }
}

impl<S: VisibilitySource> Drop for ViewportObserver<S> {
    fn drop(&mut self) {
        self.unbind();
    }
}

fn deliver<H: WatchHandle>(shared: &Weak<Mutex<Shared<H>>>, generation: u64, is_intersecting: bool) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let (state, handle, listener) = {
        let mut guard = lock(&shared);
        if guard.generation != generation {
            return;
        }
        let before = guard.tracker.state();
        let handle = match guard.tracker.record(is_intersecting) {
            Delivery::Disconnect => guard.handle.take(),
            Delivery::Continue => None,
        };
        let state = guard.tracker.state();
        let listener = if state != before {
            guard.listener.take()
        } else {
            None
        };
        (state, handle, listener)
    };

    if let Some(handle) = handle {
        log::debug!("one-shot observer triggered, releasing subscription");
        handle.release();
    }
    if let Some(mut listener) = listener {
        listener(state);
        let mut guard = lock(&shared);
        if guard.listener.is_none() {
            guard.listener = Some(listener);
        }
    }
}
