#![no_std]

pub mod actor;
pub mod color;
pub mod communicator;
pub mod event;
pub mod filter;
pub mod light_ring;
pub mod ring;
pub mod welcome;

pub use actor::{Action, Actor, ActorId, Urgency};
pub use color::Rgb;
pub use communicator::{Communicator, CommunicatorError};
pub use event::{ActorEvent, EventQueue, QueueFull};
pub use filter::{ActionPalette, ActorColorFilter, FilterChain, FlashTimings};
pub use light_ring::{LightRing, LightRingConfig, MAX_ACTOR_PIXELS};
pub use ring::{ActorSpan, normalize_index, pixel_at_bearing};
pub use welcome::{SweepStatus, WelcomeSweep};

pub use embassy_time::{Duration, Instant};

/// Abstract LED ring driver trait
///
/// Implement this trait to drive a concrete strip. Pixel writes accumulate
/// as staged changes; `commit` pushes them to the hardware in one step, so
/// no partially updated frame is ever visible.
pub trait RingDriver {
    /// Handle for a committed frame.
    type Frame;

    /// Number of addressable pixels on the ring.
    fn pixel_count(&self) -> usize;

    /// Stage a color for one pixel.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Stage one pixel off.
    fn clear_pixel(&mut self, index: usize);

    /// Stage every pixel off.
    fn clear_all(&mut self);

    /// Push all staged changes to the hardware as one frame.
    fn commit(&mut self) -> Self::Frame;
}
