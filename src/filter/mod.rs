//! Per-pixel color filters keyed off actor state.
//!
//! Filters run in a fixed ascending order; each receives the color
//! produced by its predecessor and may replace it or switch the pixel off
//! entirely. The final color for a pixel is whatever the last filter in
//! the chain returns.

mod action;
mod urgency;

use embassy_time::Instant;
use heapless::Vec;

pub use action::{ActionColorFilter, ActionPalette};
pub use urgency::{FlashTimings, UrgencyColorFilter};

use crate::actor::Actor;
use crate::color::Rgb;

/// Upper bound on filters in one chain.
const MAX_FILTERS: usize = 4;

/// A color transform keyed off actor properties.
///
/// `None` means the pixel is off.
pub trait ActorColorFilter {
    /// Produce the color for one pixel of the actor at `now`.
    fn apply(&mut self, actor: &Actor, color: Option<Rgb>, now: Instant) -> Option<Rgb>;
}

/// All filter kinds, enum-dispatched to stay allocation free.
#[derive(Debug, Clone)]
pub enum FilterSlot {
    /// Base color from the actor's action.
    Action(ActionColorFilter),
    /// Flash overlay for urgency-bearing actors.
    Urgency(UrgencyColorFilter),
}

impl FilterSlot {
    fn apply(&mut self, actor: &Actor, color: Option<Rgb>, now: Instant) -> Option<Rgb> {
        match self {
            Self::Action(filter) => filter.apply(actor, color, now),
            Self::Urgency(filter) => filter.apply(actor, color, now),
        }
    }
}

/// Ordered chain producing the final color for one pixel.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<FilterSlot, MAX_FILTERS>,
}

impl FilterChain {
    /// Standard chain: action base color, then urgency flash overlay.
    pub fn standard(palette: ActionPalette, flash: FlashTimings) -> Self {
        let mut filters = Vec::new();
        let _ = filters.push(FilterSlot::Action(ActionColorFilter::new(palette)));
        let _ = filters.push(FilterSlot::Urgency(UrgencyColorFilter::new(flash)));
        Self { filters }
    }

    /// Fold the chain over the actor, first filter starting from no color.
    pub fn resolve(&mut self, actor: &Actor, now: Instant) -> Option<Rgb> {
        let mut color = None;
        for filter in &mut self.filters {
            color = filter.apply(actor, color, now);
        }
        color
    }
}
