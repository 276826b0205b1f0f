//! Bearing-to-pixel geometry for the circular strip.
//!
//! The ring wraps a linear strip of pixels into a full circle around the
//! vehicle, so bearings map linearly onto indices and index arithmetic
//! wraps at the strip ends.

use libm::floorf;

/// Degrees in one revolution around the vehicle.
pub const FULL_CIRCLE_DEGREES: f32 = 360.0;

/// Nearest pixel index for a bearing.
///
/// The bearing is brought into `[0, 360)` by at most one full-circle step
/// before the linear mapping. Callers must not pass bearings more than one
/// full circle out of range.
pub fn pixel_at_bearing(bearing: f32, pixel_count: usize) -> usize {
    let mut bearing = bearing;
    if bearing >= FULL_CIRCLE_DEGREES {
        bearing -= FULL_CIRCLE_DEGREES;
    } else if bearing < 0.0 {
        bearing += FULL_CIRCLE_DEGREES;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = floorf(pixel_count as f32 * (bearing / FULL_CIRCLE_DEGREES)) as usize;
    index
}

/// Wrap an index back onto the strip by at most one `pixel_count` step.
///
/// Supports span expansion around a center pixel, where endpoints may run
/// past either end of the strip. Callers must keep `index` within
/// `[-pixel_count, 2 * pixel_count)` so a single wrap suffices.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub const fn normalize_index(index: isize, pixel_count: usize) -> usize {
    let count = pixel_count as isize;
    if index >= count {
        (index - count) as usize
    } else if index < 0 {
        (index + count) as usize
    } else {
        index as usize
    }
}

/// Inclusive run of pixels representing one actor on the ring.
///
/// Centered on the pixel nearest the actor's bearing; endpoints wrap
/// around the strip ends. Iteration yields normalized indices.
#[derive(Debug, Clone, Copy)]
pub struct ActorSpan {
    next: isize,
    end: isize,
    pixel_count: usize,
}

impl ActorSpan {
    /// Span of pixels around the pixel nearest `bearing`.
    ///
    /// `pixels_per_actor / 2` pixels are added on each side of the center,
    /// so the span always holds an odd number of pixels.
    #[allow(clippy::cast_possible_wrap)]
    pub fn around(bearing: f32, pixels_per_actor: usize, pixel_count: usize) -> Self {
        let middle = pixel_at_bearing(bearing, pixel_count) as isize;
        let reach = (pixels_per_actor / 2) as isize;
        Self {
            next: middle - reach,
            end: middle + reach,
            pixel_count,
        }
    }
}

impl Iterator for ActorSpan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next > self.end {
            return None;
        }
        let index = normalize_index(self.next, self.pixel_count);
        self.next += 1;
        Some(index)
    }

    #[allow(clippy::cast_sign_loss)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.end {
            0
        } else {
            (self.end - self.next + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ActorSpan {}
