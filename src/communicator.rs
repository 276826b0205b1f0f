//! Output-medium abstraction.
//!
//! Lights are the first medium; sound or projection implementations can
//! satisfy the same trait without the vehicle layer changing.

use embassy_time::Instant;

use crate::actor::Actor;

/// Errors surfaced by a communicator while reacting to a sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunicatorError {
    /// The actor table is full; the sighting was not displayed.
    TooManyActors,
    /// The configured span exceeds the per-actor pixel budget.
    SpanTooWide,
}

/// One medium through which the vehicle communicates with actors.
pub trait Communicator {
    /// Handle returned after each committed update.
    type Frame;

    /// Show the actor, superseding any earlier display for the same id.
    fn sees(&mut self, actor: &Actor, now: Instant) -> Result<Self::Frame, CommunicatorError>;

    /// Stop showing the actor. The flag reports whether it was on display.
    fn no_longer_sees(&mut self, actor_id: &str) -> (bool, Self::Frame);

    /// Forget every actor and darken the medium.
    fn clear(&mut self) -> Self::Frame;

    /// Hook for media that animate between sightings.
    fn animate(&mut self, _now: Instant) {}
}
