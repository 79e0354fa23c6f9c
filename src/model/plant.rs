use serde::{Deserialize, Serialize};

use super::traits::TraitKind;

/// Lifecycle stage of a plant. Death has no variant: a dead plant is simply
/// absent from its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    Seed,
    Germinating,
    Seeding,
}

impl From<PlantStatus> for &'static str {
    fn from(status: PlantStatus) -> Self {
        match status {
            PlantStatus::Seed => "seed",
            PlantStatus::Germinating => "germinating",
            PlantStatus::Seeding => "seeding",
        }
    }
}

impl TryFrom<&str> for PlantStatus {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "seed" => Ok(PlantStatus::Seed),
            "germinating" => Ok(PlantStatus::Germinating),
            "seeding" => Ok(PlantStatus::Seeding),
            _ => Err(format!("unknown plant status: {s}")),
        }
    }
}

/// Trait and state record for one plant.
///
/// `age` is a single counter shared by germination and lifespan checks; it
/// resets to 0 when a germinating plant starts seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub status: PlantStatus,
    pub height: u32,
    /// Canopy radius and seed-dispersal radius.
    pub width: u32,
    pub age: u32,
    pub life_span: u32,
    /// 0–100. Takes part in mutation trade-offs only.
    pub shade_tolerance: u32,
    /// Accumulated light units. Never negative.
    pub sunlight: f64,
}

/// The heritable part of a plant, as handed to output collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitVector {
    pub height: u32,
    pub width: u32,
    pub life_span: u32,
    pub shade_tolerance: u32,
}

impl Plant {
    /// A freshly established seeding plant with no age and no stored light.
    pub fn seeding(height: u32, width: u32, life_span: u32, shade_tolerance: u32) -> Self {
        Self {
            status: PlantStatus::Seeding,
            height,
            width,
            age: 0,
            life_span,
            shade_tolerance,
            sunlight: 0.0,
        }
    }

    /// Copy of this plant's traits as a new seed.
    pub fn offspring(&self) -> Self {
        Self {
            status: PlantStatus::Seed,
            age: 0,
            sunlight: 0.0,
            ..self.clone()
        }
    }

    pub fn is_seed(&self) -> bool {
        self.status == PlantStatus::Seed
    }

    /// Sunlight needed before this plant can release a batch of seeds.
    pub fn seed_threshold(&self, light_for_seeds_coefficient: f64) -> f64 {
        let width = f64::from(self.width);
        width * width * 2.0 * light_for_seeds_coefficient
    }

    pub fn trait_value(&self, kind: TraitKind) -> u32 {
        match kind {
            TraitKind::Height => self.height,
            TraitKind::Width => self.width,
            TraitKind::LifeSpan => self.life_span,
            TraitKind::ShadeTolerance => self.shade_tolerance,
        }
    }

    pub fn set_trait_value(&mut self, kind: TraitKind, value: u32) {
        match kind {
            TraitKind::Height => self.height = value,
            TraitKind::Width => self.width = value,
            TraitKind::LifeSpan => self.life_span = value,
            TraitKind::ShadeTolerance => self.shade_tolerance = value,
        }
    }

    pub fn trait_vector(&self) -> TraitVector {
        TraitVector {
            height: self.height,
            width: self.width,
            life_span: self.life_span,
            shade_tolerance: self.shade_tolerance,
        }
    }

    /// Describe the first trait or state value outside its valid domain.
    pub fn validate(&self) -> Result<(), String> {
        for kind in TraitKind::ALL {
            let scale = kind.scale();
            let value = self.trait_value(kind);
            if !scale.contains(value) {
                return Err(format!(
                    "{} {value} outside [{}, {}]",
                    scale.name, scale.min, scale.max
                ));
            }
        }
        if !self.sunlight.is_finite() || self.sunlight < 0.0 {
            return Err(format!("sunlight {} must be finite and non-negative", self.sunlight));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offspring_resets_state_and_keeps_traits() {
        let mut parent = Plant::seeding(8, 3, 20, 50);
        parent.age = 7;
        parent.sunlight = 12.0;

        let seed = parent.offspring();
        assert_eq!(seed.status, PlantStatus::Seed);
        assert_eq!(seed.age, 0);
        assert_eq!(seed.sunlight, 0.0);
        assert_eq!(seed.trait_vector(), parent.trait_vector());
    }

    #[test]
    fn seed_threshold_scales_with_width_squared() {
        assert_eq!(Plant::seeding(8, 3, 10, 25).seed_threshold(2.5), 45.0);
        assert_eq!(Plant::seeding(8, 1, 10, 25).seed_threshold(2.5), 5.0);
        assert_eq!(Plant::seeding(8, 4, 10, 25).seed_threshold(1.0), 32.0);
    }

    #[test]
    fn trait_accessors_round_trip_every_kind() {
        let mut plant = Plant::seeding(1, 2, 3, 4);
        for (i, kind) in TraitKind::ALL.into_iter().enumerate() {
            assert_eq!(plant.trait_value(kind), i as u32 + 1);
            plant.set_trait_value(kind, 40 + i as u32);
        }
        assert_eq!(
            plant.trait_vector(),
            TraitVector {
                height: 40,
                width: 41,
                life_span: 42,
                shade_tolerance: 43,
            }
        );
    }

    #[test]
    fn validate_rejects_degenerate_plants() {
        assert!(Plant::seeding(8, 3, 20, 50).validate().is_ok());
        assert!(Plant::seeding(0, 3, 20, 50).validate().is_err());
        assert!(Plant::seeding(8, 0, 20, 50).validate().is_err());
        assert!(Plant::seeding(8, 3, 0, 50).validate().is_err());
        assert!(Plant::seeding(8, 3, 20, 101).validate().is_err());

        let mut plant = Plant::seeding(8, 3, 20, 50);
        plant.sunlight = -1.0;
        assert!(plant.validate().is_err());
        plant.sunlight = f64::NAN;
        assert!(plant.validate().is_err());
    }

    #[test]
    fn status_string_conversions() {
        for status in [PlantStatus::Seed, PlantStatus::Germinating, PlantStatus::Seeding] {
            let s: &str = status.into();
            assert_eq!(PlantStatus::try_from(s), Ok(status));
        }
        assert!(PlantStatus::try_from("dead").is_err());
    }

    #[test]
    fn serializes_status_as_snake_case() {
        let json = serde_json::to_value(Plant::seeding(8, 3, 20, 50)).unwrap();
        assert_eq!(json["status"], "seeding");
        assert_eq!(json["life_span"], 20);
    }
}
