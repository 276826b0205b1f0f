//! The light-based communicator.
//!
//! Wraps an LED strip into an ellipse for 360-degree communication,
//! translating actors in a scene into pixel spans with per-actor color and
//! flash treatment. A per-actor record of lit pixels allows clearing them
//! when the actor moves or leaves the scene.

use embassy_time::Instant;
use heapless::{FnvIndexMap, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::RingDriver;
use crate::actor::{Actor, ActorId};
use crate::communicator::{Communicator, CommunicatorError};
use crate::event::{ActorEvent, EventQueue};
use crate::filter::{ActionPalette, FilterChain, FlashTimings};
use crate::ring::ActorSpan;

/// Upper bound on pixels a single actor may occupy.
pub const MAX_ACTOR_PIXELS: usize = 16;

/// Pixels currently displaying one actor.
type PixelSet = Vec<u16, MAX_ACTOR_PIXELS>;

/// Configuration for the light ring communicator.
#[derive(Debug, Clone)]
pub struct LightRingConfig {
    /// Width of the span representing one actor; the span is centered on
    /// the pixel nearest the actor's bearing. Must stay below
    /// [`MAX_ACTOR_PIXELS`].
    pub pixels_per_actor: usize,
    /// Base colors per action.
    pub palette: ActionPalette,
    /// Flash periods per urgency class.
    pub flash: FlashTimings,
}

impl Default for LightRingConfig {
    fn default() -> Self {
        Self {
            pixels_per_actor: 5,
            palette: ActionPalette::default(),
            flash: FlashTimings::default(),
        }
    }
}

/// 360-degree ring of lights around the vehicle.
///
/// `MAX_ACTORS` bounds the number of simultaneously displayed actors and
/// must be a power of two.
pub struct LightRing<D: RingDriver, const MAX_ACTORS: usize> {
    driver: D,
    pixel_count: usize,
    pixels_per_actor: usize,
    filters: FilterChain,
    actor_pixels: FnvIndexMap<ActorId, PixelSet, MAX_ACTORS>,
}

impl<D: RingDriver, const MAX_ACTORS: usize> LightRing<D, MAX_ACTORS> {
    /// Create a communicator over the given driver.
    pub fn new(driver: D, config: &LightRingConfig) -> Self {
        let pixel_count = driver.pixel_count();
        Self {
            driver,
            pixel_count,
            pixels_per_actor: config.pixels_per_actor,
            filters: FilterChain::standard(config.palette, config.flash),
            actor_pixels: FnvIndexMap::new(),
        }
    }

    /// Number of pixels on the underlying ring.
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Pixels currently displaying the given actor, if it is on display.
    pub fn pixels_for(&self, actor_id: &str) -> Option<&[u16]> {
        self.actor_pixels
            .iter()
            .find(|(id, _)| id.as_str() == actor_id)
            .map(|(_, pixels)| pixels.as_slice())
    }

    /// Snapshot of every current actor-to-pixels allocation.
    pub fn allocations(&self) -> impl Iterator<Item = (&str, &[u16])> {
        self.actor_pixels
            .iter()
            .map(|(id, pixels)| (id.as_str(), pixels.as_slice()))
    }

    /// Drain pending events from a queue, rendering each in arrival order.
    ///
    /// Sightings that exceed a capacity bound are dropped rather than
    /// blocking the rest of the queue.
    pub fn process_events<const SIZE: usize>(&mut self, events: &EventQueue<SIZE>, now: Instant) {
        while let Some(event) = events.pop() {
            match event {
                ActorEvent::Seen(actor) => {
                    if let Err(_err) = self.sees(&actor, now) {
                        #[cfg(feature = "esp32-log")]
                        println!(
                            "light ring: dropped sighting of {}: {:?}",
                            actor.id.as_str(),
                            _err
                        );
                    }
                }
                ActorEvent::Lost(actor_id) => {
                    let _ = self.no_longer_sees(actor_id.as_str());
                }
                ActorEvent::ClearAll => {
                    let _ = self.clear();
                }
            }
        }
    }

    /// Whether a sighting of this actor would exceed a capacity bound.
    fn check_capacity(&self, actor: &Actor) -> Result<(), CommunicatorError> {
        if self.pixels_per_actor / 2 * 2 + 1 > MAX_ACTOR_PIXELS {
            return Err(CommunicatorError::SpanTooWide);
        }
        let is_new = self.pixels_for(actor.id.as_str()).is_none();
        if is_new && self.actor_pixels.len() == self.actor_pixels.capacity() {
            return Err(CommunicatorError::TooManyActors);
        }
        Ok(())
    }
}

impl<D: RingDriver, const MAX_ACTORS: usize> Communicator for LightRing<D, MAX_ACTORS> {
    type Frame = D::Frame;

    /// `I see you` scenario: light the actor's span in its current colors.
    ///
    /// The clear of the previous span and the new span are staged in the
    /// same batch, so the committed frame never shows the actor half-drawn.
    fn sees(&mut self, actor: &Actor, now: Instant) -> Result<D::Frame, CommunicatorError> {
        self.check_capacity(actor)?;

        let previous = self
            .actor_pixels
            .iter()
            .find(|(id, _)| id.as_str() == actor.id.as_str())
            .map(|(_, pixels)| pixels.clone());
        if let Some(previous) = previous {
            for &pixel in &previous {
                self.driver.clear_pixel(pixel as usize);
            }
        }

        let mut current = PixelSet::new();
        for index in ActorSpan::around(actor.bearing, self.pixels_per_actor, self.pixel_count) {
            // each pixel runs the full chain so flash state advances per call
            match self.filters.resolve(actor, now) {
                Some(color) => self.driver.set_pixel(index, color),
                None => self.driver.clear_pixel(index),
            }
            #[allow(clippy::cast_possible_truncation)]
            let _ = current.push(index as u16);
        }

        // cannot fail, capacity checked up front
        let _ = self.actor_pixels.insert(actor.id.clone(), current);

        Ok(self.driver.commit())
    }

    /// Release the actor's pixels.
    ///
    /// Known limitation: clearing is last-writer-wins, so if another
    /// actor's span shares pixels with this one, those pixels go dark too.
    fn no_longer_sees(&mut self, actor_id: &str) -> (bool, D::Frame) {
        let key = self
            .actor_pixels
            .keys()
            .find(|id| id.as_str() == actor_id)
            .cloned();
        let found = match key.and_then(|key| self.actor_pixels.remove(&key)) {
            Some(pixels) => {
                for &pixel in &pixels {
                    self.driver.clear_pixel(pixel as usize);
                }
                true
            }
            None => false,
        };
        (found, self.driver.commit())
    }

    /// Forget every actor and turn the whole ring off in one frame.
    fn clear(&mut self) -> D::Frame {
        self.actor_pixels.clear();
        self.driver.clear_all();
        self.driver.commit()
    }
}
