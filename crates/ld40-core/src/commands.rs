//! Player input gathered by the platform layer for one simulation tick.
//!
//! The platform layer owns the key/mouse state and hands a copy to the
//! simulation every tick. Nothing here is global.

use serde::{Deserialize, Serialize};

/// Held keys and mouse movement for a single tick.
///
/// `jump` and `shoot` are edge-triggered: the simulation consumes them on
/// the tick they are seen, so the platform layer should set them only on
/// key/button press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub sneak: bool,
    pub jump: bool,
    pub shoot: bool,
    /// Horizontal mouse movement in pixels since the last tick.
    pub mouse_dx: i32,
    /// Vertical mouse movement in pixels since the last tick (positive is down).
    pub mouse_dy: i32,
}

impl InputFrame {
    /// A frame with no keys held and no mouse movement.
    pub fn idle() -> Self {
        Self::default()
    }

    /// True if any movement key is held.
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
