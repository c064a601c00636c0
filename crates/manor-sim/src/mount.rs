//! Mounts and the hardware installed on them.

use manor_core::commands::HardwareSpec;
use manor_core::components::Health;
use manor_core::constants::HARDWARE_MAX_HEALTH;
use manor_core::enums::HardwareKind;
use manor_core::types::{MountId, Position};
use manor_hardware::fsm::WeaponInstance;
use manor_hardware::support::SupportInstance;

/// A fixed emplacement hardware can be installed on. A vital mount losing
/// its weapon ends the game.
#[derive(Debug)]
pub struct Mount {
    pub id: MountId,
    pub vital: bool,
    pub position: Position,
    pub hardware: Option<HardwareUnit>,
}

impl Mount {
    pub fn new(id: MountId, position: Position, vital: bool) -> Self {
        Self {
            id,
            vital,
            position,
            hardware: None,
        }
    }
}

/// An installed piece of hardware plus its durability.
#[derive(Debug)]
pub struct HardwareUnit {
    pub health: Health,
    pub device: HardwareDevice,
}

#[derive(Debug)]
pub enum HardwareDevice {
    Weapon(WeaponInstance),
    Support(SupportInstance),
}

impl HardwareUnit {
    /// Builds a unit from a placement spec, anchored at the mount position.
    pub fn from_spec(spec: &HardwareSpec, anchor: Position) -> Self {
        let device = match spec {
            HardwareSpec::Weapon { variant } => {
                let mut weapon = WeaponInstance::new(*variant, anchor, anchor);
                weapon.make_ready();
                HardwareDevice::Weapon(weapon)
            }
            HardwareSpec::Support { variant } => {
                HardwareDevice::Support(SupportInstance::new(*variant))
            }
        };
        Self {
            health: Health::new(HARDWARE_MAX_HEALTH),
            device,
        }
    }

    pub fn kind(&self) -> HardwareKind {
        match self.device {
            HardwareDevice::Weapon(_) => HardwareKind::Weapon,
            HardwareDevice::Support(_) => HardwareKind::Support,
        }
    }

    pub fn weapon_mut(&mut self) -> Option<&mut WeaponInstance> {
        match &mut self.device {
            HardwareDevice::Weapon(weapon) => Some(weapon),
            HardwareDevice::Support(_) => None,
        }
    }
}

/// Running score and tallies for the current defense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub enemies_total: u32,
    pub shots_fired: u32,
}
