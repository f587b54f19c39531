use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage;

/// localStorage key for the persisted store blob.
pub const STORE_KEY: &str = "farming-assistant-store";

/// Static farm configuration collected during onboarding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmInputs {
    pub crop_type: String,
    pub region: String,
    pub soil_type: String,
    /// Farm size in acres.
    pub farm_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_yield: Option<f64>,
}

impl FarmInputs {
    /// Onboarding has run once the crop is set.
    pub fn is_configured(&self) -> bool {
        !self.crop_type.is_empty()
    }
}

/// Hypothetical perturbations applied on top of the farm configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    /// Percent, -50..=50.
    pub rainfall_change: f64,
    /// Percent, 0..=100.
    pub soil_nutrient_level: f64,
    /// Degrees Celsius, -5..=5.
    pub temperature_change: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            rainfall_change: 0.0,
            soil_nutrient_level: 50.0,
            temperature_change: 0.0,
        }
    }
}

impl ScenarioInputs {
    /// Copy with every field forced into its documented range. Used for
    /// values arriving from untrusted sources such as URL parameters;
    /// slider callbacks already stay in range.
    pub fn clamped(&self) -> Self {
        Self {
            rainfall_change: self.rainfall_change.clamp(-50.0, 50.0),
            soil_nutrient_level: self.soil_nutrient_level.clamp(0.0, 100.0),
            temperature_change: self.temperature_change.clamp(-5.0, 5.0),
        }
    }
}

/// Partial update for [`FarmInputs`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FarmInputsPatch {
    pub crop_type: Option<String>,
    pub region: Option<String>,
    pub soil_type: Option<String>,
    pub farm_size: Option<f64>,
    pub previous_yield: Option<f64>,
}

/// Partial update for [`ScenarioInputs`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ScenarioPatch {
    pub rainfall_change: Option<f64>,
    pub soil_nutrient_level: Option<f64>,
    pub temperature_change: Option<f64>,
}

/// Immutable snapshot of everything the user has entered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub inputs: FarmInputs,
    pub scenario: ScenarioInputs,
}

impl StoreState {
    /// New snapshot with the patch merged into the farm inputs.
    pub fn with_inputs(&self, patch: FarmInputsPatch) -> Self {
        let mut next = self.clone();
        if let Some(crop_type) = patch.crop_type {
            next.inputs.crop_type = crop_type;
        }
        if let Some(region) = patch.region {
            next.inputs.region = region;
        }
        if let Some(soil_type) = patch.soil_type {
            next.inputs.soil_type = soil_type;
        }
        if let Some(farm_size) = patch.farm_size {
            next.inputs.farm_size = farm_size;
        }
        if let Some(previous_yield) = patch.previous_yield {
            next.inputs.previous_yield = Some(previous_yield);
        }
        next
    }

    /// New snapshot with the patch merged into the scenario.
    pub fn with_scenario(&self, patch: ScenarioPatch) -> Self {
        let mut next = self.clone();
        if let Some(rainfall_change) = patch.rainfall_change {
            next.scenario.rainfall_change = rainfall_change;
        }
        if let Some(soil_nutrient_level) = patch.soil_nutrient_level {
            next.scenario.soil_nutrient_level = soil_nutrient_level;
        }
        if let Some(temperature_change) = patch.temperature_change {
            next.scenario.temperature_change = temperature_change;
        }
        next
    }
}

/// Reactive wrapper around [`StoreState`], provided as context at the app
/// root. Mutations swap in a new snapshot; persistence is an explicit
/// `save()` call made by the mutating caller.
#[derive(Clone, Copy)]
pub struct StoreContext {
    state: RwSignal<StoreState>,
}

impl StoreContext {
    pub fn new(initial: StoreState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    /// Restore the persisted snapshot, or start from defaults when there
    /// is none (or it fails to parse).
    pub fn load() -> Self {
        let initial = storage::get_item(STORE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self::new(initial)
    }

    /// Current farm inputs (reactive read).
    pub fn inputs(&self) -> FarmInputs {
        self.state.with(|s| s.inputs.clone())
    }

    /// Current scenario (reactive read).
    pub fn scenario(&self) -> ScenarioInputs {
        self.state.with(|s| s.scenario.clone())
    }

    /// Farm inputs without registering a reactive dependency. For event
    /// handlers and effects that must not re-run on store changes.
    pub fn inputs_untracked(&self) -> FarmInputs {
        self.state.with_untracked(|s| s.inputs.clone())
    }

    /// Scenario without registering a reactive dependency.
    pub fn scenario_untracked(&self) -> ScenarioInputs {
        self.state.with_untracked(|s| s.scenario.clone())
    }

    pub fn set_inputs(&self, patch: FarmInputsPatch) {
        self.state.update(|s| *s = s.with_inputs(patch));
    }

    pub fn set_scenario(&self, patch: ScenarioPatch) {
        self.state.update(|s| *s = s.with_scenario(patch));
    }

    /// Discard all prior values and restore documented defaults.
    pub fn reset(&self) {
        self.state.set(StoreState::default());
    }

    /// Write the current snapshot to localStorage. Last writer wins when
    /// several tabs save concurrently.
    pub fn save(&self) {
        let json = self.state.with_untracked(|s| serde_json::to_string(s));
        if let Ok(json) = json {
            storage::set_item(STORE_KEY, &json);
        }
    }
}
