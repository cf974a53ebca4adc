// SPDX-License-Identifier: MPL-2.0
//! Hover tilt for feature cards.
//!
//! While the pointer is inside a card, the card leans towards the cursor:
//! the rotation is proportional to the cursor's offset from the card
//! center, and the card lifts slightly. Leaving the card snaps everything
//! back to neutral. Unlike the parallax field this consumes raw pointer
//! events, so the tilt follows the cursor without debounce latency.

/// Divisor applied to the pixel offset from center to get degrees.
const ROTATION_SOFTNESS: f32 = 10.0;

/// Tilt and lift of a single card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltState {
    rotate_x: f32,
    rotate_y: f32,
    hovered: bool,
    /// Last card-local cursor position, kept so a press can anchor effects
    /// at the pointer.
    cursor: Option<(f32, f32)>,
}

impl TiltState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the tilt from a cursor position local to the card.
    ///
    /// `size` is the card's width and height; degenerate sizes reset to
    /// neutral instead of dividing by zero.
    pub fn set_cursor(&mut self, cursor: (f32, f32), size: (f32, f32)) {
        let (width, height) = size;
        if width <= 0.0 || height <= 0.0 {
            self.reset();
            return;
        }

        let center_x = width / 2.0;
        let center_y = height / 2.0;

        self.rotate_x = (cursor.1 - center_y) / ROTATION_SOFTNESS;
        self.rotate_y = (center_x - cursor.0) / ROTATION_SOFTNESS;
        self.hovered = true;
        self.cursor = Some(cursor);
    }

    /// Snaps back to the neutral transform.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotation around the horizontal axis, in degrees.
    #[must_use]
    pub fn rotate_x(&self) -> f32 {
        self.rotate_x
    }

    /// Rotation around the vertical axis, in degrees.
    #[must_use]
    pub fn rotate_y(&self) -> f32 {
        self.rotate_y
    }

    /// Whether the card is lifted (pointer inside).
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Last known card-local cursor position while hovered.
    #[must_use]
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}
