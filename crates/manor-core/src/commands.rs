//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::{SupportVariant, WeaponVariant};
use crate::types::{MountId, Position};

/// Hardware selection for mount placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum HardwareSpec {
    Weapon { variant: WeaponVariant },
    Support { variant: SupportVariant },
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// Per-tick pointer sample: world-projected position and whether
    /// the left button is held. Edge detection (press/release) is
    /// derived by the engine.
    Pointer { position: Position, left_down: bool },
    /// Abort any in-progress aim or charge on every weapon.
    CancelOperation,

    // --- Hardware management ---
    /// Place hardware on an empty mount.
    PlaceHardware { mount_id: MountId, spec: HardwareSpec },

    // --- Simulation control ---
    /// Start a new defense from the main menu.
    StartGame,
    /// Pause the simulation (timers freeze, input is not consumed).
    Pause,
    /// Resume from pause.
    Resume,
    /// Tear down the current defense and return to the main menu.
    Reset,
}
