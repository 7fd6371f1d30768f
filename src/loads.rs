//src/loads.rs

/// Weights and set counts for one exercise across the three intensity
/// tiers of a session: warm-up (50%), preparation (70%) and valid (100%).
/// Weights are whole kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesLoad {
    pub warmup: u32,
    pub warmup_sets: u32,
    pub preparation: u32,
    pub preparation_sets: u32,
    pub valid: u32,
    pub valid_sets: u32,
}

impl Default for SeriesLoad {
    fn default() -> Self {
        Self {
            warmup: 0,
            warmup_sets: 1,
            preparation: 0,
            preparation_sets: 1,
            valid: 0,
            valid_sets: 3,
        }
    }
}

/// Partial edit of a row's load. Warm-up and preparation weights are
/// derived from the valid weight and cannot be set independently; set
/// counts can.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadUpdate {
    pub warmup_sets: Option<u32>,
    pub preparation_sets: Option<u32>,
    pub valid: Option<f64>,
    pub valid_sets: Option<u32>,
}

/// Given the valid-series weight (100%), derives warm-up (50%) and
/// preparation (70%) weights; set counts pass through from `current`
/// (defaulting to 1/1/3 when absent).
///
/// Rounding is `f64::round`, i.e. half away from zero, so 2.5 kg rounds
/// to 3 and a 5 kg valid weight yields a 4 kg preparation (3.5 rounded).
/// Negative inputs clamp to zero.
#[must_use]
pub fn compute_loads(valid_weight: f64, current: Option<&SeriesLoad>) -> SeriesLoad {
    let valid = valid_weight.round().max(0.0) as u32;
    let preparation = (f64::from(valid) * 0.7).round() as u32;
    let warmup = (f64::from(valid) * 0.5).round() as u32;
    SeriesLoad {
        warmup,
        warmup_sets: current.map_or(1, |c| c.warmup_sets),
        preparation,
        preparation_sets: current.map_or(1, |c| c.preparation_sets),
        valid,
        valid_sets: current.map_or(3, |c| c.valid_sets),
    }
}
