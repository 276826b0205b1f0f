//! Action base-color filter.

use embassy_time::Instant;

use super::ActorColorFilter;
use crate::actor::{Action, Actor};
use crate::color::{self, Rgb};

/// Base colors per action, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct ActionPalette {
    pub seen: Rgb,
    pub moving: Rgb,
    pub slowing: Rgb,
    pub stopped: Rgb,
}

impl Default for ActionPalette {
    fn default() -> Self {
        Self {
            seen: color::WHITE,
            moving: color::GREEN,
            slowing: color::AMBER,
            stopped: color::RED,
        }
    }
}

impl ActionPalette {
    /// Color configured for an action. Total over all actions, so a
    /// misconfigured table cannot exist.
    pub const fn color_for(&self, action: Action) -> Rgb {
        match action {
            Action::Seen => self.seen,
            Action::Moving => self.moving,
            Action::Slowing => self.slowing,
            Action::Stopped => self.stopped,
        }
    }
}

/// Maps an actor's action to its base color.
///
/// Ignores the incoming color; this filter is the start of the chain.
#[derive(Debug, Clone)]
pub struct ActionColorFilter {
    palette: ActionPalette,
}

impl ActionColorFilter {
    pub const fn new(palette: ActionPalette) -> Self {
        Self { palette }
    }
}

impl ActorColorFilter for ActionColorFilter {
    fn apply(&mut self, actor: &Actor, _color: Option<Rgb>, _now: Instant) -> Option<Rgb> {
        Some(self.palette.color_for(actor.action))
    }
}
