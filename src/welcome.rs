//! Wake-up light show.
//!
//! Sweeps a synthetic actor once around the ring to confirm the system is
//! up and grab attention, then clears it. Pacing is caller-driven in the
//! same way as frame scheduling elsewhere: each tick reports how long to
//! wait before the next, so no timer or async runtime is required.

use embassy_time::{Duration, Instant};

use crate::actor::{Action, Actor, ActorId};
use crate::communicator::{Communicator, CommunicatorError};

/// Delay between single-degree sweep steps.
pub const STEP_DELAY: Duration = Duration::from_millis(5);

/// How long the marker rests at its final bearing before clearing.
pub const HOLD_DELAY: Duration = Duration::from_secs(1);

/// Sweep steps for one full revolution, one per degree.
const FULL_CIRCLE_STEPS: u16 = 360;

const WELCOME_ACTOR_ID: &str = "wake-up";

/// Outcome of one sweep tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStatus {
    /// Sweep in progress; wait this long before the next tick.
    Pending(Duration),
    /// The sweep finished and the marker was cleared.
    Done,
}

/// One-revolution sweep of a synthetic actor around the ring.
#[derive(Debug, Clone, Default)]
pub struct WelcomeSweep {
    bearing: u16,
    holding: bool,
}

impl WelcomeSweep {
    pub const fn new() -> Self {
        Self {
            bearing: 0,
            holding: false,
        }
    }

    /// Advance the sweep by one step.
    ///
    /// Call again after the returned delay until [`SweepStatus::Done`].
    pub fn tick<C: Communicator>(
        &mut self,
        communicator: &mut C,
        now: Instant,
    ) -> Result<SweepStatus, CommunicatorError> {
        if self.holding {
            communicator.no_longer_sees(WELCOME_ACTOR_ID);
            return Ok(SweepStatus::Done);
        }

        let id = ActorId::try_from(WELCOME_ACTOR_ID).unwrap_or_default();
        let actor = Actor::new(id, f32::from(self.bearing), Action::Seen);
        communicator.sees(&actor, now)?;

        self.bearing += 1;
        if self.bearing >= FULL_CIRCLE_STEPS {
            self.holding = true;
            return Ok(SweepStatus::Pending(HOLD_DELAY));
        }
        Ok(SweepStatus::Pending(STEP_DELAY))
    }
}
