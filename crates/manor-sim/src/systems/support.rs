//! Support hardware effects.
//!
//! Repair kits scan the other mounts for damaged hardware in range and
//! restore health on their effect interval. A ready kit with nothing to
//! repair holds its charge until a target appears.

use crate::mount::{HardwareDevice, Mount};

/// Update every installed support unit and apply its effect.
pub fn run(mounts: &mut [Mount], dt: f64) {
    // (support index, effect target index)
    let mut actions: Vec<(usize, Option<usize>)> = Vec::new();

    for (index, mount) in mounts.iter().enumerate() {
        let Some(unit) = mount.hardware.as_ref() else {
            continue;
        };
        let HardwareDevice::Support(kit) = &unit.device else {
            continue;
        };
        let max_range = kit.profile().max_range;

        let target = mounts
            .iter()
            .enumerate()
            .filter(|(other_index, other)| {
                if *other_index == index {
                    return false;
                }
                let Some(other_unit) = other.hardware.as_ref() else {
                    return false;
                };
                other_unit.health.current < other_unit.health.max
                    && mount.position.horizontal_range_to(&other.position) <= max_range
            })
            .min_by(|(_, a), (_, b)| {
                mount
                    .position
                    .horizontal_range_to(&a.position)
                    .total_cmp(&mount.position.horizontal_range_to(&b.position))
            })
            .map(|(other_index, _)| other_index);
        actions.push((index, target));
    }

    for (index, target) in actions {
        let amount = {
            let Some(unit) = mounts[index].hardware.as_mut() else {
                continue;
            };
            let HardwareDevice::Support(kit) = &mut unit.device else {
                continue;
            };
            let used = kit.update(target.is_some(), dt);
            if !used {
                continue;
            }
            kit.profile().amount
        };
        let Some(target) = target else {
            continue;
        };
        if let Some(unit) = mounts[target].hardware.as_mut() {
            unit.health.current = (unit.health.current + amount).min(unit.health.max);
        }
    }
}
