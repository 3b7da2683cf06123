//! Application event channel.
//!
//! # Responsibility
//! - Carry cross-screen notifications (note saved, navigate, ...) from the
//!   service layer to whichever UI component consumes them.
//!
//! # Invariants
//! - The bus is owned by the composition root and passed by reference;
//!   there is no process-wide instance.
//! - The buffer is bounded; publishing never blocks and reports `Full`.
//! - Exactly one subscriber exists per bus. Dropping it disconnects every
//!   publisher.

use crate::model::note::NoteId;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::time::Duration;

/// Events published by the note service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    NoteAdded(NoteId),
    NoteUpdated(NoteId),
    NoteDeleted(NoteId),
    NavigateToDetail(NoteId),
    PasswordRejected(NoteId),
}

impl AppEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::NoteAdded(_) => "note_added",
            Self::NoteUpdated(_) => "note_updated",
            Self::NoteDeleted(_) => "note_deleted",
            Self::NavigateToDetail(_) => "navigate_to_detail",
            Self::PasswordRejected(_) => "password_rejected",
        }
    }
}

/// Returned when an event could not be queued. The event is handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// Buffer is at capacity.
    Full(AppEvent),
    /// Subscriber was dropped.
    Disconnected(AppEvent),
}

impl Display for PublishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full(event) => write!(f, "event buffer full, dropped {}", event.name()),
            Self::Disconnected(event) => {
                write!(f, "no subscriber attached, dropped {}", event.name())
            }
        }
    }
}

impl Error for PublishError {}

/// Bounded single-consumer event channel.
pub struct EventBus {
    sender: SyncSender<AppEvent>,
    receiver: Option<Receiver<AppEvent>>,
    capacity: usize,
}

impl EventBus {
    /// Creates a bus buffering at most `capacity` undelivered events.
    ///
    /// A capacity of 0 is raised to 1 so `try_publish` can ever succeed.
    pub fn bounded(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, receiver) = mpsc::sync_channel(capacity);
        Self {
            sender,
            receiver: Some(receiver),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hands out a publisher that can be cloned into any component.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Takes the single subscriber. Returns `None` once it was taken.
    pub fn subscribe(&mut self) -> Option<EventSubscriber> {
        self.receiver
            .take()
            .map(|receiver| EventSubscriber { receiver })
    }
}

/// Sending half of the bus.
#[derive(Clone)]
pub struct EventPublisher {
    sender: SyncSender<AppEvent>,
}

impl EventPublisher {
    /// Queues `event` without blocking.
    pub fn try_publish(&self, event: AppEvent) -> Result<(), PublishError> {
        match self.sender.try_send(event) {
            Ok(()) => {
                debug!("event=app_event module=events status=ok kind={}", event.name());
                Ok(())
            }
            Err(TrySendError::Full(event)) => Err(PublishError::Full(event)),
            Err(TrySendError::Disconnected(event)) => Err(PublishError::Disconnected(event)),
        }
    }
}

/// Receiving half of the bus. Delivery stops when this is dropped.
pub struct EventSubscriber {
    receiver: Receiver<AppEvent>,
}

impl EventSubscriber {
    /// Returns the next queued event, if any.
    pub fn try_next(&self) -> Option<AppEvent> {
        self.receiver.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    pub fn next_timeout(&self, timeout: Duration) -> Option<AppEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drains every queued event in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }
}
