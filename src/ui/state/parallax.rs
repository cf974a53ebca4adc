// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven parallax for the decorative background layers.
//!
//! Each layer translates away from the window center as the pointer moves,
//! with deeper layers travelling further. The state is a pure function of
//! the latest pointer position and the window size; nothing accumulates
//! between events.

/// Number of decorative background layers.
pub const LAYER_COUNT: usize = 3;

/// Per-layer speed increment: layer `i` moves at `(i + 1) * 0.5` speed.
const SPEED_STEP: f32 = 0.5;

/// Pixel travel for a full normalized offset at speed 1.
const TRAVEL: f32 = 10.0;

/// Current translation of every background layer, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxField {
    offsets: [(f32, f32); LAYER_COUNT],
}

impl ParallaxField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes every layer from a pointer position in window coordinates.
    ///
    /// The pointer is normalized against the window center to `[-1, 1]` per
    /// axis, so the field rests at zero when the pointer sits dead center
    /// and reaches full travel at the window edges. Degenerate window sizes
    /// leave the field untouched.
    pub fn retarget(&mut self, pointer: (f32, f32), window: (f32, f32)) {
        let (width, height) = window;
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let normal_x = (pointer.0 / width - 0.5) * 2.0;
        let normal_y = (pointer.1 / height - 0.5) * 2.0;

        for (index, offset) in self.offsets.iter_mut().enumerate() {
            let speed = (index + 1) as f32 * SPEED_STEP;
            *offset = (normal_x * speed * TRAVEL, normal_y * speed * TRAVEL);
        }
    }

    /// Translation of layer `index`, clamped to the last layer.
    #[must_use]
    pub fn layer_offset(&self, index: usize) -> (f32, f32) {
        self.offsets[index.min(LAYER_COUNT - 1)]
    }

    #[must_use]
    pub fn offsets(&self) -> &[(f32, f32); LAYER_COUNT] {
        &self.offsets
    }

    /// Snaps every layer back to rest.
    pub fn reset(&mut self) {
        self.offsets = [(0.0, 0.0); LAYER_COUNT];
    }
}
