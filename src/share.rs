//! Shareable-link encoding: the seven query parameters `crop, region,
//! soil, size, rainfall, nutrients, temp` carry one (inputs, scenario)
//! pair. Decoding is lenient: the four farm parameters must all be
//! present to touch input state, while scenario parameters default
//! individually.

use crate::store::{FarmInputs, FarmInputsPatch, ScenarioInputs};

/// Outcome of decoding query parameters. `None` means "leave that part
/// of the store unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedParams {
    pub inputs: Option<FarmInputsPatch>,
    pub scenario: Option<ScenarioInputs>,
}

impl DecodedParams {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_none() && self.scenario.is_none()
    }
}

fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Query string (no leading `?`) for one store snapshot.
pub fn query_string(inputs: &FarmInputs, scenario: &ScenarioInputs) -> String {
    let pairs = [
        ("crop", inputs.crop_type.clone()),
        ("region", inputs.region.clone()),
        ("soil", inputs.soil_type.clone()),
        ("size", inputs.farm_size.to_string()),
        ("rainfall", scenario.rainfall_change.to_string()),
        ("nutrients", scenario.soil_nutrient_level.to_string()),
        ("temp", scenario.temperature_change.to_string()),
    ];
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Full dashboard link for the given origin, e.g.
/// `https://example.com/dashboard?crop=wheat&...`.
pub fn share_url(origin: &str, inputs: &FarmInputs, scenario: &ScenarioInputs) -> String {
    format!("{origin}/dashboard?{}", query_string(inputs, scenario))
}

/// Decode already-percent-decoded query parameters via `get`. Farm inputs
/// are produced only when `crop`, `region`, `soil` and a numeric `size`
/// are all present; a scenario is produced when any of `rainfall`,
/// `nutrients`, `temp` is present, with absent fields at their defaults
/// and all values clamped to their declared ranges.
pub fn decode(get: impl Fn(&str) -> Option<String>) -> DecodedParams {
    let mut decoded = DecodedParams::default();

    let crop = get("crop");
    let region = get("region");
    let soil = get("soil");
    let size = get("size").and_then(|s| s.parse::<f64>().ok());
    if let (Some(crop), Some(region), Some(soil), Some(size)) = (crop, region, soil, size) {
        decoded.inputs = Some(FarmInputsPatch {
            crop_type: Some(crop),
            region: Some(region),
            soil_type: Some(soil),
            farm_size: Some(size),
            previous_yield: None,
        });
    }

    let rainfall = get("rainfall").and_then(|s| s.parse::<f64>().ok());
    let nutrients = get("nutrients").and_then(|s| s.parse::<f64>().ok());
    let temp = get("temp").and_then(|s| s.parse::<f64>().ok());
    if rainfall.is_some() || nutrients.is_some() || temp.is_some() {
        decoded.scenario = Some(
            ScenarioInputs {
                rainfall_change: rainfall.unwrap_or(0.0),
                soil_nutrient_level: nutrients.unwrap_or(50.0),
                temperature_change: temp.unwrap_or(0.0),
            }
            .clamped(),
        );
    }

    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreState;
    use std::collections::HashMap;

    fn sample_state() -> StoreState {
        let state = StoreState::default();
        let state = state.with_inputs(FarmInputsPatch {
            crop_type: Some("rice".into()),
            region: Some("south-india".into()),
            soil_type: Some("loamy".into()),
            farm_size: Some(12.5),
            previous_yield: None,
        });
        state.with_scenario(crate::store::ScenarioPatch {
            rainfall_change: Some(10.0),
            soil_nutrient_level: Some(60.0),
            temperature_change: Some(-1.5),
        })
    }

    fn parse_query(query: &str) -> HashMap<String, String> {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn query_string_uses_the_seven_fixed_names() {
        let state = sample_state();
        let query = query_string(&state.inputs, &state.scenario);
        let pairs = parse_query(&query);
        assert_eq!(pairs.len(), 7);
        assert_eq!(pairs["crop"], "rice");
        assert_eq!(pairs["region"], "south-india");
        assert_eq!(pairs["soil"], "loamy");
        assert_eq!(pairs["size"], "12.5");
        assert_eq!(pairs["rainfall"], "10");
        assert_eq!(pairs["nutrients"], "60");
        assert_eq!(pairs["temp"], "-1.5");
    }

    #[test]
    fn round_trip_reproduces_inputs_and_scenario() {
        let state = sample_state();
        let query = query_string(&state.inputs, &state.scenario);
        let pairs = parse_query(&query);

        let decoded = decode(|key| pairs.get(key).cloned());
        let restored = StoreState::default()
            .with_inputs(decoded.inputs.expect("inputs decoded"))
            .with_scenario(crate::store::ScenarioPatch::default());

        assert_eq!(restored.inputs, state.inputs);
        assert_eq!(decoded.scenario, Some(state.scenario));
    }

    #[test]
    fn share_url_targets_the_dashboard() {
        let state = sample_state();
        let url = share_url("https://farm.example", &state.inputs, &state.scenario);
        assert!(url.starts_with("https://farm.example/dashboard?crop=rice&"));
    }

    #[test]
    fn incomplete_farm_params_leave_inputs_untouched() {
        let mut pairs = HashMap::new();
        pairs.insert("crop".to_string(), "wheat".to_string());
        pairs.insert("region".to_string(), "north-india".to_string());
        // soil and size missing
        let decoded = decode(|key| pairs.get(key).cloned());
        assert!(decoded.inputs.is_none());
        assert!(decoded.scenario.is_none());
        assert!(decoded.is_empty());
    }

    #[test]
    fn non_numeric_size_leaves_inputs_untouched() {
        let mut pairs = HashMap::new();
        pairs.insert("crop".to_string(), "wheat".to_string());
        pairs.insert("region".to_string(), "north-india".to_string());
        pairs.insert("soil".to_string(), "clay".to_string());
        pairs.insert("size".to_string(), "five".to_string());
        let decoded = decode(|key| pairs.get(key).cloned());
        assert!(decoded.inputs.is_none());
    }

    #[test]
    fn absent_scenario_params_default_individually() {
        let mut pairs = HashMap::new();
        pairs.insert("rainfall".to_string(), "20".to_string());
        let decoded = decode(|key| pairs.get(key).cloned());
        let scenario = decoded.scenario.expect("scenario decoded");
        assert_eq!(scenario.rainfall_change, 20.0);
        assert_eq!(scenario.soil_nutrient_level, 50.0);
        assert_eq!(scenario.temperature_change, 0.0);
    }

    #[test]
    fn decoded_scenario_is_clamped() {
        let mut pairs = HashMap::new();
        pairs.insert("rainfall".to_string(), "400".to_string());
        pairs.insert("nutrients".to_string(), "-3".to_string());
        pairs.insert("temp".to_string(), "-40".to_string());
        let decoded = decode(|key| pairs.get(key).cloned());
        let scenario = decoded.scenario.expect("scenario decoded");
        assert_eq!(scenario.rainfall_change, 50.0);
        assert_eq!(scenario.soil_nutrient_level, 0.0);
        assert_eq!(scenario.temperature_change, -5.0);
    }

    #[test]
    fn no_params_decodes_to_empty() {
        let decoded = decode(|_| None);
        assert!(decoded.is_empty());
    }

    #[test]
    fn values_are_percent_encoded() {
        assert_eq!(encode_component("north india"), "north%20india");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("north-india"), "north-india");
    }
}
