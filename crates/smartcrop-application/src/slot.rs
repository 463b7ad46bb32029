//! Async data slots.
//!
//! A slot is one named piece of remote data a view shows. It moves
//! `Idle -> Loading -> {Success, Failure}` and is observable through a watch channel.

use smartcrop_core::AdvisoryError;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Idle,
    Loading,
    Success(T),
    Failure(AdvisoryError),
}

impl<T> Slot<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Slot::Loading)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Slot::Failure(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AdvisoryError> {
        match self {
            Slot::Failure(err) => Some(err),
            _ => None,
        }
    }
}

/// Shared holder of one [`Slot`].
///
/// Slots loaded on mount use [`SlotCell::begin`], which treats `Failure` as terminal.
/// Slots driven by user actions (search, send, run) use [`SlotCell::begin_action`],
/// where each action is a fresh request.
#[derive(Debug)]
pub struct SlotCell<T> {
    name: &'static str,
    state: watch::Sender<Slot<T>>,
}

impl<T: Clone + Send + Sync> SlotCell<T> {
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(Slot::Idle);
        Self { name, state }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> Slot<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Slot<T>> {
        self.state.subscribe()
    }

    /// `Idle | Success -> Loading`. Returns `false` if a load is in flight or the slot
    /// has failed.
    pub fn begin(&self) -> bool {
        self.state.send_if_modified(|slot| match slot {
            Slot::Idle | Slot::Success(_) => {
                *slot = Slot::Loading;
                true
            }
            Slot::Loading | Slot::Failure(_) => false,
        })
    }

    /// Any settled state `-> Loading`. Returns `false` only while a load is in flight.
    pub fn begin_action(&self) -> bool {
        self.state.send_if_modified(|slot| {
            if slot.is_loading() {
                false
            } else {
                *slot = Slot::Loading;
                true
            }
        })
    }

    /// `Loading -> Success | Failure`. Ignored in any other state.
    pub fn finish(&self, result: Result<T, AdvisoryError>) {
        let name = self.name;
        self.state.send_if_modified(move |slot| {
            if !slot.is_loading() {
                tracing::debug!(slot = name, "Ignoring result for a slot that is not loading");
                return false;
            }
            *slot = match result {
                Ok(value) => Slot::Success(value),
                Err(err) => {
                    tracing::warn!(slot = name, "Load failed: {}", err);
                    Slot::Failure(err)
                }
            };
            true
        });
    }
}
