//! Urgency flash overlay filter.

use embassy_time::{Duration, Instant};

use super::ActorColorFilter;
use crate::actor::{Actor, Urgency};
use crate::color::Rgb;

/// Full flash period per urgency class.
#[derive(Debug, Clone, Copy)]
pub struct FlashTimings {
    /// Period for [`Urgency::Request`], default 1 Hz.
    pub request: Duration,
    /// Period for [`Urgency::Demand`], default 2 Hz.
    pub demand: Duration,
}

impl Default for FlashTimings {
    fn default() -> Self {
        Self {
            request: Duration::from_millis(1000),
            demand: Duration::from_millis(500),
        }
    }
}

impl FlashTimings {
    const fn period_for(self, urgency: Urgency) -> Duration {
        match urgency {
            Urgency::Request => self.request,
            Urgency::Demand => self.demand,
        }
    }
}

/// Overlays a roughly 50% duty-cycle flash on urgency-bearing actors.
///
/// One flash clock per filter instance: every actor sharing an urgency
/// class flashes in phase with the others. Actors without urgency pass
/// through untouched.
#[derive(Debug, Clone)]
pub struct UrgencyColorFilter {
    timings: FlashTimings,
    previous_flash_on: Instant,
}

impl UrgencyColorFilter {
    pub const fn new(timings: FlashTimings) -> Self {
        Self {
            timings,
            previous_flash_on: Instant::from_ticks(0),
        }
    }
}

impl ActorColorFilter for UrgencyColorFilter {
    /// Off for the first half-window, on for the second; past the full
    /// window the clock resets and the cycle repeats.
    fn apply(&mut self, actor: &Actor, color: Option<Rgb>, now: Instant) -> Option<Rgb> {
        let Some(urgency) = actor.urgency else {
            return color;
        };

        let period = self.timings.period_for(urgency);
        let since_on = now
            .checked_duration_since(self.previous_flash_on)
            .unwrap_or(Duration::from_ticks(0));

        if since_on < period {
            None
        } else if since_on < period * 2 {
            color
        } else {
            self.previous_flash_on = now;
            None
        }
    }
}
