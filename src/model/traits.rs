use serde::{Deserialize, Serialize};

/// The four heritable traits that take part in mutation trade-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    Height,
    Width,
    LifeSpan,
    ShadeTolerance,
}

impl TraitKind {
    /// Every trait, in the order mutation draws index into.
    pub const ALL: [TraitKind; 4] = [
        TraitKind::Height,
        TraitKind::Width,
        TraitKind::LifeSpan,
        TraitKind::ShadeTolerance,
    ];

    /// The scale record for this trait.
    pub fn scale(self) -> &'static TraitScale {
        match self {
            TraitKind::Height => &HEIGHT_SCALE,
            TraitKind::Width => &WIDTH_SCALE,
            TraitKind::LifeSpan => &LIFE_SPAN_SCALE,
            TraitKind::ShadeTolerance => &SHADE_TOLERANCE_SCALE,
        }
    }
}

impl From<TraitKind> for &'static str {
    fn from(kind: TraitKind) -> Self {
        kind.scale().name
    }
}

/// Maps a trait between native units and the shared trade-off scale.
///
/// Scores are logarithmic, so a fixed score delta is a fixed multiplicative
/// change in native units. `min`/`max` bound the native value after rounding.
#[derive(Debug)]
pub struct TraitScale {
    pub kind: TraitKind,
    pub name: &'static str,
    pub score: fn(f64) -> f64,
    pub inverse_score: fn(f64) -> f64,
    pub min: u32,
    pub max: u32,
}

impl TraitScale {
    pub fn score_of(&self, value: u32) -> f64 {
        (self.score)(f64::from(value))
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Move `value` by `delta` on the score scale, round back to native
    /// units and clamp into the trait's range.
    pub fn shift(&self, value: u32, delta: f64) -> u32 {
        let native = (self.inverse_score)(self.score_of(value) + delta);
        native.round().clamp(f64::from(self.min), f64::from(self.max)) as u32
    }
}

fn log_score(value: f64) -> f64 {
    value.log2()
}

fn log_inverse(score: f64) -> f64 {
    score.exp2()
}

// Shade tolerance starts at 0, so it is shifted by one before taking the log.
fn shifted_log_score(value: f64) -> f64 {
    (value + 1.0).log2()
}

fn shifted_log_inverse(score: f64) -> f64 {
    score.exp2() - 1.0
}

pub const HEIGHT_SCALE: TraitScale = TraitScale {
    kind: TraitKind::Height,
    name: "height",
    score: log_score,
    inverse_score: log_inverse,
    min: 1,
    max: u32::MAX,
};

pub const WIDTH_SCALE: TraitScale = TraitScale {
    kind: TraitKind::Width,
    name: "width",
    score: log_score,
    inverse_score: log_inverse,
    min: 1,
    max: u32::MAX,
};

pub const LIFE_SPAN_SCALE: TraitScale = TraitScale {
    kind: TraitKind::LifeSpan,
    name: "life_span",
    score: log_score,
    inverse_score: log_inverse,
    min: 1,
    max: u32::MAX,
};

pub const SHADE_TOLERANCE_SCALE: TraitScale = TraitScale {
    kind: TraitKind::ShadeTolerance,
    name: "shade_tolerance",
    score: shifted_log_score,
    inverse_score: shifted_log_inverse,
    min: 0,
    max: 100,
};
