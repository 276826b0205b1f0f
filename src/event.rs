//! Bounded queue decoupling the actor source from the renderer.
//!
//! Perception publishes sighting reports from wherever they originate; the
//! renderer drains them between frames. Synchronization goes through
//! `critical-section`, so publishing is safe from interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::actor::{Actor, ActorId};

/// A perception-side report about one actor, or the whole scene.
#[derive(Debug, Clone, PartialEq)]
pub enum ActorEvent {
    /// The actor is in view; render it at its current bearing.
    Seen(Actor),
    /// The actor left the scene; release its pixels.
    Lost(ActorId),
    /// Drop every actor and darken the ring.
    ClearAll,
}

/// Error returned when publishing to a full queue.
///
/// Carries the rejected event back to the producer.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueFull(pub ActorEvent);

/// Fixed-capacity event queue shared between producer and renderer.
pub struct EventQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ActorEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue an event, failing if the renderer has fallen behind.
    pub fn publish(&self, event: ActorEvent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFull)
        })
    }

    /// Take the oldest pending event, if any.
    pub fn pop(&self) -> Option<ActorEvent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of events waiting to be drained.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    /// Whether the queue holds no pending events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
