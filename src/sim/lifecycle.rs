//! Status transitions, aging and old-age removal.
//!
//! Each function reads one grid and returns a fresh one, so no plant sees
//! another plant's update from the same phase.

use super::context::TickReport;
use crate::model::{Grid, Plant, PlantStatus};

/// Germinating plants that have waited `germination_time` ticks start
/// seeding, with their age reset to 0.
pub fn mature(grid: &Grid, germination_time: u32, report: &mut TickReport) -> Grid {
    grid.map_plants(|_, plant| {
        if plant.status == PlantStatus::Germinating && plant.age >= germination_time {
            report.matured += 1;
            Some(Plant {
                status: PlantStatus::Seeding,
                age: 0,
                ..plant.clone()
            })
        } else {
            Some(plant.clone())
        }
    })
}

/// Every seed that survived resolution becomes germinating.
pub fn germinate(grid: &Grid, report: &mut TickReport) -> Grid {
    grid.map_plants(|_, plant| {
        if plant.is_seed() {
            report.germinated += 1;
            Some(Plant {
                status: PlantStatus::Germinating,
                ..plant.clone()
            })
        } else {
            Some(plant.clone())
        }
    })
}

pub fn age(grid: &Grid) -> Grid {
    grid.map_plants(|_, plant| {
        Some(Plant {
            age: plant.age.saturating_add(1),
            ..plant.clone()
        })
    })
}

/// Empty every cell whose plant has reached its life span, whatever its
/// status.
pub fn remove_expired(grid: &Grid, report: &mut TickReport) -> Grid {
    grid.map_plants(|_, plant| {
        if plant.age >= plant.life_span {
            report.died += 1;
            None
        } else {
            Some(plant.clone())
        }
    })
}
