//! Color vocabulary for the ring.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Acknowledgement color, default for merely seen actors.
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Default color for moving actors.
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Amber (#ffbf00), default color for slowing actors.
pub const AMBER: Rgb = Rgb {
    r: 255,
    g: 191,
    b: 0,
};

/// Default color for stopped actors.
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
