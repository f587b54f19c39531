//! Projection engine: a pure transform from (farm inputs, scenario) to
//! the full dashboard result set. Everything except the two randomized
//! channels (`water_usage`, `recommended`) is fully determined by the
//! inputs and the start date.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::store::{FarmInputs, ScenarioInputs};

/// Length of the forecast series, in days starting at "today".
pub const FORECAST_DAYS: usize = 30;

/// Source of uniform randoms in `[0, 1)`. The engine takes this as a
/// parameter so tests can pin the randomized channels.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by `Math.random`.
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// One day of the 30-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "yield")]
    pub yield_tons: i64,
    pub water_usage: i64,
    pub recommended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedSavings {
    pub water: f64,
    pub fertilizer: f64,
    /// May be negative when a recommendation costs extra labor.
    pub labor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub expected_savings: ExpectedSavings,
    /// Percent.
    pub confidence: i64,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsLine {
    pub saved: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsEstimate {
    pub water: SavingsLine,
    pub fertilizer: SavingsLine,
    pub labor: SavingsLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub expected_yield: i64,
    pub daily_savings: f64,
    /// Number of high-severity recommendations.
    pub alerts: usize,
}

/// Full derived result set for one (inputs, scenario) pair. Recomputed on
/// demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub predicted_yield: Vec<PredictionPoint>,
    pub recommendations: Vec<Recommendation>,
    pub savings_estimate: SavingsEstimate,
    pub quick_stats: QuickStats,
}

/// Unknown crops fall back to a neutral multiplier rather than erroring.
pub fn crop_multiplier(crop_type: &str) -> f64 {
    match crop_type {
        "wheat" => 1.0,
        "rice" => 1.2,
        "tomato" => 0.8,
        _ => 1.0,
    }
}

/// Unknown soils fall back to a neutral multiplier rather than erroring.
pub fn soil_multiplier(soil_type: &str) -> f64 {
    match soil_type {
        "clay" => 1.1,
        "sandy" => 0.9,
        "loamy" => 1.2,
        _ => 1.0,
    }
}

fn scenario_effect(scenario: &ScenarioInputs) -> f64 {
    1.0 + scenario.rainfall_change / 100.0 + (scenario.soil_nutrient_level - 50.0) / 100.0
}

fn recommendations(scenario: &ScenarioInputs) -> Vec<Recommendation> {
    let nutrients = scenario.soil_nutrient_level;
    vec![
        Recommendation {
            id: "1".into(),
            title: "Reduce Water Usage".into(),
            description: format!(
                "Reduce irrigation by {}% today based on soil moisture levels",
                20.0 + scenario.rainfall_change
            ),
            severity: Severity::Medium,
            expected_savings: ExpectedSavings {
                water: 150.0,
                fertilizer: 0.0,
                labor: 0.0,
            },
            confidence: (85.0 + nutrients / 10.0).round() as i64,
            explanation: "Current soil moisture is optimal. Excess watering may lead to \
                          nutrient leaching."
                .into(),
        },
        Recommendation {
            id: "2".into(),
            title: "Fertilizer Application".into(),
            description: "Delay nitrogen fertilizer application by 2-3 days".into(),
            severity: Severity::Low,
            expected_savings: ExpectedSavings {
                water: 0.0,
                fertilizer: 25.0,
                labor: 10.0,
            },
            confidence: (75.0 + nutrients / 5.0).round() as i64,
            explanation: "Weather forecast shows rain in 48 hours, which will enhance \
                          nutrient absorption."
                .into(),
        },
        Recommendation {
            id: "3".into(),
            title: "Pest Monitoring".into(),
            description: "Increase pest surveillance in the next 48 hours".into(),
            severity: Severity::High,
            expected_savings: ExpectedSavings {
                water: 0.0,
                fertilizer: 0.0,
                labor: -5.0,
            },
            confidence: 90,
            explanation: "Weather conditions are favorable for pest activity. Early \
                          detection prevents major losses."
                .into(),
        },
    ]
}

/// Compute the dashboard for one snapshot of the store. The caller owns
/// both inputs; nothing here mutates or retains them.
pub fn project(
    inputs: &FarmInputs,
    scenario: &ScenarioInputs,
    start: NaiveDate,
    rng: &mut dyn RandomSource,
) -> DashboardData {
    let base_yield = 100.0 * crop_multiplier(&inputs.crop_type) * soil_multiplier(&inputs.soil_type);
    let effect = scenario_effect(scenario);

    let predicted_yield = (0..FORECAST_DAYS)
        .map(|i| {
            let date = start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(start)
                .to_string();
            let wave = 1.0 + (i as f64 / 7.0).sin() * 0.1;
            PredictionPoint {
                date,
                yield_tons: (base_yield * effect * wave).round() as i64,
                water_usage: (50.0 + rng.next_f64() * 30.0).round() as i64,
                recommended: rng.next_f64() > 0.3,
            }
        })
        .collect();

    let recommendations = recommendations(scenario);
    let daily_savings = 150.0 + scenario.rainfall_change * 2.0;
    let alerts = recommendations
        .iter()
        .filter(|r| r.severity == Severity::High)
        .count();

    DashboardData {
        predicted_yield,
        recommendations,
        savings_estimate: SavingsEstimate {
            water: SavingsLine {
                saved: daily_savings,
                cost: 750.0,
            },
            fertilizer: SavingsLine {
                saved: 25.0,
                cost: 500.0,
            },
            labor: SavingsLine {
                saved: 5.0,
                cost: 250.0,
            },
        },
        quick_stats: QuickStats {
            expected_yield: (base_yield * effect).round() as i64,
            daily_savings,
            alerts,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FarmInputsPatch, StoreState};

    /// Cycles through a fixed sequence, so randomized channels are pinned.
    struct SeqRandom {
        values: Vec<f64>,
        at: usize,
    }

    impl SeqRandom {
        fn new(values: Vec<f64>) -> Self {
            Self { values, at: 0 }
        }
    }

    impl RandomSource for SeqRandom {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.at % self.values.len()];
            self.at += 1;
            v
        }
    }

    fn inputs(crop: &str, soil: &str) -> FarmInputs {
        StoreState::default()
            .with_inputs(FarmInputsPatch {
                crop_type: Some(crop.into()),
                soil_type: Some(soil.into()),
                region: Some("north-india".into()),
                farm_size: Some(5.0),
                ..Default::default()
            })
            .inputs
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
    }

    fn run(crop: &str, soil: &str, scenario: ScenarioInputs) -> DashboardData {
        project(
            &inputs(crop, soil),
            &scenario,
            start(),
            &mut SeqRandom::new(vec![0.0, 0.5, 0.99]),
        )
    }

    #[test]
    fn known_multipliers_match_lookup_tables() {
        for (crop, expected) in [("wheat", 1.0), ("rice", 1.2), ("tomato", 0.8)] {
            assert_eq!(crop_multiplier(crop), expected, "crop {crop}");
        }
        for (soil, expected) in [("clay", 1.1), ("sandy", 0.9), ("loamy", 1.2)] {
            assert_eq!(soil_multiplier(soil), expected, "soil {soil}");
        }
    }

    #[test]
    fn unknown_categories_fall_back_to_neutral() {
        assert_eq!(crop_multiplier("barley"), 1.0);
        assert_eq!(crop_multiplier(""), 1.0);
        assert_eq!(soil_multiplier("peat"), 1.0);
        assert_eq!(soil_multiplier(""), 1.0);
    }

    #[test]
    fn base_yield_is_product_for_all_known_pairs() {
        for crop in ["wheat", "rice", "tomato"] {
            for soil in ["clay", "sandy", "loamy"] {
                let data = run(crop, soil, ScenarioInputs::default());
                // Default scenario effect is 1, so expected_yield == base_yield.
                let base = 100.0 * crop_multiplier(crop) * soil_multiplier(soil);
                assert_eq!(
                    data.quick_stats.expected_yield,
                    base.round() as i64,
                    "{crop}/{soil}"
                );
            }
        }
    }

    #[test]
    fn documented_example_scenario() {
        // rice + loamy, rainfall +10, nutrients 60:
        // base 144, effect 1.2, expected yield round(172.8) = 173.
        let data = run(
            "rice",
            "loamy",
            ScenarioInputs {
                rainfall_change: 10.0,
                soil_nutrient_level: 60.0,
                temperature_change: 0.0,
            },
        );
        assert_eq!(data.quick_stats.expected_yield, 173);
    }

    #[test]
    fn forecast_has_30_strictly_increasing_dates_from_start() {
        let data = run("wheat", "clay", ScenarioInputs::default());
        assert_eq!(data.predicted_yield.len(), FORECAST_DAYS);
        assert_eq!(data.predicted_yield[0].date, "2025-03-01");
        for pair in data.predicted_yield.windows(2) {
            assert!(
                pair[0].date < pair[1].date,
                "dates not increasing: {} then {}",
                pair[0].date,
                pair[1].date
            );
        }
        assert_eq!(data.predicted_yield[29].date, "2025-03-30");
    }

    #[test]
    fn yield_curve_follows_the_sine_shape() {
        let data = run("wheat", "clay", ScenarioInputs::default());
        let base = 100.0 * crop_multiplier("wheat") * soil_multiplier("clay");
        for (i, point) in data.predicted_yield.iter().enumerate() {
            let expected = (base * (1.0 + (i as f64 / 7.0).sin() * 0.1)).round() as i64;
            assert_eq!(point.yield_tons, expected, "day {i}");
        }
    }

    #[test]
    fn randomized_channels_stay_in_range() {
        let data = run("tomato", "sandy", ScenarioInputs::default());
        for point in &data.predicted_yield {
            assert!(
                (50..=80).contains(&point.water_usage),
                "water usage {} out of range",
                point.water_usage
            );
        }
    }

    #[test]
    fn injected_sequence_pins_randomized_channels() {
        // Per point the engine draws water first, then recommended.
        let mut rng = SeqRandom::new(vec![0.0, 0.5]);
        let data = project(
            &inputs("wheat", "clay"),
            &ScenarioInputs::default(),
            start(),
            &mut rng,
        );
        assert_eq!(data.predicted_yield[0].water_usage, 50);
        assert!(data.predicted_yield[0].recommended, "0.5 > 0.3");
    }

    #[test]
    fn exactly_three_fixed_recommendations() {
        let data = run("wheat", "clay", ScenarioInputs::default());
        let recs = &data.recommendations;
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].id, "1");
        assert_eq!(recs[1].id, "2");
        assert_eq!(recs[2].id, "3");
        assert_eq!(recs[0].title, "Reduce Water Usage");
        assert_eq!(recs[1].title, "Fertilizer Application");
        assert_eq!(recs[2].title, "Pest Monitoring");
        assert_eq!(recs[0].severity, Severity::Medium);
        assert_eq!(recs[1].severity, Severity::Low);
        assert_eq!(recs[2].severity, Severity::High);
        assert_eq!(recs[2].expected_savings.labor, -5.0);
    }

    #[test]
    fn confidence_tracks_nutrient_level() {
        let data = run(
            "wheat",
            "clay",
            ScenarioInputs {
                rainfall_change: 0.0,
                soil_nutrient_level: 60.0,
                temperature_change: 0.0,
            },
        );
        assert_eq!(data.recommendations[0].confidence, 91); // 85 + 60/10
        assert_eq!(data.recommendations[1].confidence, 87); // 75 + 60/5
        assert_eq!(data.recommendations[2].confidence, 90); // constant
    }

    #[test]
    fn irrigation_description_tracks_rainfall() {
        let data = run(
            "wheat",
            "clay",
            ScenarioInputs {
                rainfall_change: 10.0,
                soil_nutrient_level: 50.0,
                temperature_change: 0.0,
            },
        );
        assert!(
            data.recommendations[0]
                .description
                .starts_with("Reduce irrigation by 30%"),
            "got: {}",
            data.recommendations[0].description
        );
    }

    #[test]
    fn savings_track_rainfall_across_the_range() {
        for rainfall in [-50.0, -15.0, 0.0, 25.0, 50.0] {
            let data = run(
                "wheat",
                "clay",
                ScenarioInputs {
                    rainfall_change: rainfall,
                    soil_nutrient_level: 50.0,
                    temperature_change: 0.0,
                },
            );
            let expected = 150.0 + rainfall * 2.0;
            assert_eq!(data.savings_estimate.water.saved, expected);
            assert_eq!(data.quick_stats.daily_savings, expected);
            assert_eq!(data.savings_estimate.water.cost, 750.0);
            // Fertilizer and labor lines are input-independent constants.
            assert_eq!(data.savings_estimate.fertilizer.saved, 25.0);
            assert_eq!(data.savings_estimate.fertilizer.cost, 500.0);
            assert_eq!(data.savings_estimate.labor.saved, 5.0);
            assert_eq!(data.savings_estimate.labor.cost, 250.0);
        }
    }

    #[test]
    fn alerts_count_high_severity_entries() {
        let data = run("rice", "loamy", ScenarioInputs::default());
        assert_eq!(data.quick_stats.alerts, 1);
    }

    #[test]
    fn dashboard_serializes_with_original_field_names() {
        let data = run("wheat", "clay", ScenarioInputs::default());
        let json = serde_json::to_string(&data).expect("serialize");
        assert!(json.contains("\"predictedYield\""));
        assert!(json.contains("\"yield\":"));
        assert!(json.contains("\"waterUsage\""));
        assert!(json.contains("\"expectedSavings\""));
        assert!(json.contains("\"severity\":\"medium\""));
        assert!(json.contains("\"quickStats\""));
    }
}
