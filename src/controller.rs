//! Suggestion dropdown controller
//!
//! Owns the suggestion list and decides when it is shown, replaced or
//! cleared. Three event streams meet here: text changes, focus loss, and
//! pointer presses on the rendered list.
//!
//! Async work (provider lookups and the focus-loss delay) runs in spawned
//! tasks that only post [`ControllerEvent`]s back. The controller applies them
//! on the host's thread, so state is never mutated concurrently:
//!
//! - a fetch result is applied only if its sequence number is still the
//!   current one, so the last issued query wins regardless of arrival order;
//! - a pending clear is applied only if it is still the pending one;
//! - nothing is applied after [`Autocomplete::dispose`].

mod events;
mod options;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

pub use events::{ControllerEvent, FetchState, FocusDirective};
pub use options::DropdownOptions;

use crate::error::SuggestError;
use crate::input::InputTarget;
use crate::provider::{ProviderError, SuggestionProvider};
use crate::render::{DropdownAction, Renderer};

/// Hook invoked when a provider lookup fails
pub type ErrorHook = Box<dyn FnMut(&ProviderError)>;

/// Fetch issued with `sequence`, cancellable through `token`
struct InFlight {
    sequence: u64,
    token: CancellationToken,
}

/// Scheduled "clear unless cancelled" after a focus loss
struct PendingClear {
    clear_id: u64,
    token: CancellationToken,
}

/// Autocomplete controller attached to one input
pub struct Autocomplete<I: InputTarget, R: Renderer> {
    input: I,
    renderer: R,
    provider: Arc<dyn SuggestionProvider>,
    options: DropdownOptions,
    runtime: Handle,
    suggestions: Vec<String>,
    visible: bool,
    /// Sequence number of the most recently issued query
    current_sequence: u64,
    in_flight: Option<InFlight>,
    pending_clear: Option<PendingClear>,
    next_clear_id: u64,
    /// Parent of every task token; cancelled on dispose
    scope: CancellationToken,
    events_tx: UnboundedSender<ControllerEvent>,
    events_rx: UnboundedReceiver<ControllerEvent>,
    error_hook: Option<ErrorHook>,
    disposed: bool,
}

impl<I: InputTarget, R: Renderer> Autocomplete<I, R> {
    /// Attach a controller to `input`, drawing through `renderer`
    ///
    /// Must be called from inside a tokio runtime; lookups and delays are
    /// spawned on it.
    ///
    /// # Errors
    /// * `NotSingleLine` - the input holds more than one line
    /// * `NoRuntime` - no tokio runtime is running on this thread
    /// * whatever the renderer's `attach` reports (e.g. `MountUnavailable`)
    pub fn attach<P: SuggestionProvider>(
        input: I,
        mut renderer: R,
        provider: P,
        options: DropdownOptions,
    ) -> Result<Self, SuggestError> {
        let lines = input.line_count();
        if lines > 1 {
            return Err(SuggestError::NotSingleLine(lines));
        }
        let runtime = Handle::try_current().map_err(|_| SuggestError::NoRuntime)?;

        renderer.attach()?;
        renderer.hide();

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Ok(Self {
            input,
            renderer,
            provider: Arc::new(provider),
            options,
            runtime,
            suggestions: Vec::new(),
            visible: false,
            current_sequence: 0,
            in_flight: None,
            pending_clear: None,
            next_clear_id: 0,
            scope: CancellationToken::new(),
            events_tx,
            events_rx,
            error_hook: None,
            disposed: false,
        })
    }

    /// Surface provider failures to the host
    ///
    /// Without a hook, failures are only logged.
    pub fn set_error_hook(&mut self, hook: impl FnMut(&ProviderError) + 'static) {
        self.error_hook = Some(Box::new(hook));
    }

    // =====================================================================
    // Operations
    // =====================================================================

    /// The input text changed to `text`
    pub fn on_query_changed(&mut self, text: &str) {
        if self.disposed {
            return;
        }

        self.current_sequence = self.current_sequence.wrapping_add(1);
        self.cancel_in_flight();

        if text.is_empty() {
            log::debug!(
                "Query cleared, invalidating up to sequence {}",
                self.current_sequence
            );
            self.clear();
            return;
        }

        self.spawn_fetch(text.to_string(), self.current_sequence);
    }

    /// The input lost focus; clear after the configured delay
    ///
    /// A previous pending clear is replaced, so at most one exists.
    pub fn on_input_focus_lost(&mut self) {
        if self.disposed {
            return;
        }

        self.cancel_pending_clear();
        self.next_clear_id = self.next_clear_id.wrapping_add(1);
        let clear_id = self.next_clear_id;
        let token = self.scope.child_token();
        let delay = self.options.clear_delay;
        let tx = self.events_tx.clone();
        let task_token = token.clone();

        self.runtime.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(ControllerEvent::ClearElapsed { clear_id });
                }
            }
        });

        log::debug!("Scheduled clear {} in {:?}", clear_id, delay);
        self.pending_clear = Some(PendingClear { clear_id, token });
    }

    /// Pointer went down on the suggestion surface
    ///
    /// Cancels the pending clear so the following click can land. The host
    /// must honor the returned directive and not apply the focus loss this
    /// press would otherwise cause.
    pub fn on_suggestion_area_pressed(&mut self) -> FocusDirective {
        if self.disposed {
            return FocusDirective::Default;
        }
        self.cancel_pending_clear();
        FocusDirective::KeepFocus
    }

    /// A candidate was clicked: commit it and clear immediately
    pub fn on_suggestion_selected(&mut self, candidate: &str) {
        if self.disposed {
            return;
        }

        self.input.set_value(candidate);
        self.cancel_pending_clear();
        // An older lookup must not reopen the list over the committed value
        self.current_sequence = self.current_sequence.wrapping_add(1);
        self.cancel_in_flight();
        self.clear();
    }

    /// Route a renderer callback to the matching operation
    pub fn handle_action(&mut self, action: DropdownAction) -> FocusDirective {
        match action {
            DropdownAction::AreaPressed => self.on_suggestion_area_pressed(),
            DropdownAction::CandidatePressed(candidate) => {
                self.on_suggestion_selected(&candidate);
                FocusDirective::Default
            }
        }
    }

    /// Tear down: cancel every task, hide and detach the renderer
    ///
    /// Idempotent. No event is applied and no renderer call is made after
    /// this returns.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        self.scope.cancel();
        self.in_flight = None;
        self.pending_clear = None;
        self.events_rx.close();
        while self.events_rx.try_recv().is_ok() {}

        self.suggestions.clear();
        self.visible = false;
        self.renderer.hide();
        self.renderer.detach();
        log::debug!("Autocomplete disposed");
    }

    // =====================================================================
    // Event pump
    // =====================================================================

    /// Apply one event posted by a background task
    pub fn handle_event(&mut self, event: ControllerEvent) {
        if self.disposed {
            return;
        }

        match event {
            ControllerEvent::FetchResolved { sequence, result } => {
                self.apply_fetch(sequence, result)
            }
            ControllerEvent::ClearElapsed { clear_id } => self.fire_clear(clear_id),
        }
    }

    /// Apply every event already waiting, without blocking
    ///
    /// Returns the number of events processed.
    pub fn poll_events(&mut self) -> usize {
        let mut processed = 0;
        while !self.disposed {
            match self.events_rx.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    processed += 1;
                }
                Err(_) => break,
            }
        }
        processed
    }

    /// Wait for the next event from a background task
    ///
    /// Returns `None` once disposed. Intended for a `tokio::select!` branch
    /// in the host loop, followed by [`Self::handle_event`].
    pub async fn next_event(&mut self) -> Option<ControllerEvent> {
        if self.disposed {
            return None;
        }
        self.events_rx.recv().await
    }

    // =====================================================================
    // Inspectors
    // =====================================================================

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current_sequence(&self) -> u64 {
        self.current_sequence
    }

    pub fn fetch_state(&self) -> FetchState {
        match &self.in_flight {
            Some(in_flight) => FetchState::Fetching(in_flight.sequence),
            None => FetchState::Idle,
        }
    }

    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access for the host's own editing of the input
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access for drawing and hit testing
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // =====================================================================
    // Internals
    // =====================================================================

    fn spawn_fetch(&mut self, query: String, sequence: u64) {
        let token = self.scope.child_token();
        let task_token = token.clone();
        let tx = self.events_tx.clone();
        let lookup = self.provider.suggest(&query);

        self.runtime.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                result = lookup => {
                    let _ = tx.send(ControllerEvent::FetchResolved { sequence, result });
                }
            }
        });

        log::debug!("Issued fetch {} for {:?}", sequence, query);
        self.in_flight = Some(InFlight { sequence, token });
    }

    fn apply_fetch(&mut self, sequence: u64, result: Result<Vec<String>, ProviderError>) {
        if sequence != self.current_sequence {
            log::debug!(
                "Discarding stale result {} (current: {})",
                sequence,
                self.current_sequence
            );
            return;
        }
        self.in_flight = None;

        let candidates = match result {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("Suggestion lookup {} failed: {}", sequence, e);
                if let Some(hook) = self.error_hook.as_mut() {
                    hook(&e);
                }
                Vec::new()
            }
        };
        self.show(candidates);
    }

    fn fire_clear(&mut self, clear_id: u64) {
        match &self.pending_clear {
            Some(pending) if pending.clear_id == clear_id => {
                self.pending_clear = None;
                log::debug!("Clear {} fired", clear_id);
                self.clear();
            }
            _ => log::debug!("Ignoring superseded clear {}", clear_id),
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.token.cancel();
        }
    }

    fn cancel_pending_clear(&mut self) {
        if let Some(pending) = self.pending_clear.take() {
            log::debug!("Cancelled clear {}", pending.clear_id);
            pending.token.cancel();
        }
    }

    fn show(&mut self, candidates: Vec<String>) {
        self.renderer.show(&candidates);
        self.suggestions = candidates;
        self.visible = true;
    }

    /// Hide and empty the list; safe to call repeatedly
    fn clear(&mut self) {
        self.suggestions.clear();
        self.visible = false;
        self.renderer.hide();
    }
}

impl<I: InputTarget, R: Renderer> Drop for Autocomplete<I, R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
