//! Knob script model: the recorded host input events the replay commands
//! consume.
//!
//! Scripts are newline-delimited JSON, one event per line:
//!
//! ```text
//! {"event":"down","knob":"left"}
//! {"event":"move","knob":"left","angle":1.5707}
//! {"event":"up"}
//! {"event":"clear"}
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::{Deserialize, Serialize};
use sketch::input::Knob;

/// One recorded host input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Touch-down on a knob; opens a drag.
    Down {
        /// The knob under the touch.
        knob: Knob,
    },
    /// Drag-move with the knob's current absolute rotation in radians.
    Move {
        /// The knob being dragged.
        knob: Knob,
        /// Absolute rotation of the knob's transform.
        angle: f64,
    },
    /// Touch-up; closes the drag.
    Up,
    /// Clear button or shake gesture: wipe the surface.
    Clear,
}
