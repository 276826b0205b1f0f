//! Perceived actors in the scene around the vehicle.
//!
//! Actors are value-like snapshots supplied by the perception layer; the
//! renderer does not own their lifecycle.

use heapless::String;

/// Maximum length of a caller-supplied actor identifier.
pub const MAX_ACTOR_ID_LEN: usize = 32;

/// Caller-supplied identifier, unique per tracked entity across calls.
pub type ActorId = String<MAX_ACTOR_ID_LEN>;

/// What the actor is currently doing, as perceived by the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Acknowledged, no notable motion.
    Seen,
    /// Moving through the scene.
    Moving,
    /// Slowing down.
    Slowing,
    /// Stopped.
    Stopped,
}

/// How insistently the vehicle needs the actor's attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Polite request, slow flash.
    Request,
    /// Demand, fast flash.
    Demand,
}

/// One perceived human outside the vehicle - a pedestrian, cyclist or
/// other mobility user.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Unique identifier provided by the perception layer.
    pub id: ActorId,
    /// Degrees clockwise from vehicle-forward to the actor.
    pub bearing: f32,
    /// Perceived motion state.
    pub action: Action,
    /// Attention level, if the vehicle wants any; `None` means no flash.
    pub urgency: Option<Urgency>,
}

impl Actor {
    /// Create an actor snapshot without urgency.
    pub const fn new(id: ActorId, bearing: f32, action: Action) -> Self {
        Self {
            id,
            bearing,
            action,
            urgency: None,
        }
    }

    /// Attach an urgency level.
    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }
}
