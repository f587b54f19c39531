//! Simulated service facade. There is no backend: each call sleeps for a
//! fixed interval to imitate network latency, then generates its result
//! locally. Every call works on its own snapshot of the inputs, so
//! overlapping requests for different keys cannot interfere.

use chrono::{Days, Utc};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::engine::{self, DashboardData, JsRandom, RandomSource};
use crate::store::{FarmInputs, ScenarioInputs};

const DASHBOARD_DELAY_MS: i32 = 500;
const HISTORY_DELAY_MS: i32 = 300;

/// One past day shown on the history page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u32,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Recommendations generated that day.
    pub recommendations: u32,
    /// Total savings in rupees.
    pub savings: i64,
    pub crop_type: String,
}

/// Resolve after `ms` via `window.setTimeout`; resolves immediately when
/// no window is available.
pub(crate) async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|w| w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms));
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Compute the dashboard for the given snapshot after the simulated
/// round-trip delay. Cannot fail; the `Result` keeps the signature shaped
/// like a real service call for the UI layer.
pub async fn get_dashboard_data(
    inputs: &FarmInputs,
    scenario: &ScenarioInputs,
) -> Result<DashboardData, String> {
    let inputs = inputs.clone();
    let scenario = scenario.clone();
    sleep_ms(DASHBOARD_DELAY_MS).await;
    let today = Utc::now().date_naive();
    Ok(engine::project(&inputs, &scenario, today, &mut JsRandom))
}

/// Ten most recent history entries, newest first.
pub async fn get_historical_data() -> Result<Vec<HistoryEntry>, String> {
    sleep_ms(HISTORY_DELAY_MS).await;
    let today = Utc::now().date_naive();
    Ok(historical(today, &mut JsRandom))
}

fn historical(today: chrono::NaiveDate, rng: &mut dyn RandomSource) -> Vec<HistoryEntry> {
    const CROPS: [&str; 3] = ["wheat", "rice", "tomato"];
    (0..10)
        .map(|i| {
            let date = today
                .checked_sub_days(Days::new(i as u64))
                .unwrap_or(today)
                .to_string();
            let crop_index = ((rng.next_f64() * 3.0) as usize).min(CROPS.len() - 1);
            HistoryEntry {
                id: i + 1,
                date,
                recommendations: (rng.next_f64() * 5.0) as u32 + 1,
                savings: (rng.next_f64() * 500.0) as i64 + 100,
                crop_type: CROPS[crop_index].to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct SeqRandom(Vec<f64>, usize);

    impl RandomSource for SeqRandom {
        fn next_f64(&mut self) -> f64 {
            let v = self.0[self.1 % self.0.len()];
            self.1 += 1;
            v
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
    }

    #[test]
    fn history_has_ten_entries_counting_back_from_today() {
        let entries = historical(today(), &mut SeqRandom(vec![0.2, 0.6, 0.9], 0));
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].date, "2025-03-10");
        assert_eq!(entries[9].date, "2025-03-01");
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.id, i as u32 + 1);
        }
    }

    #[test]
    fn history_values_stay_in_documented_ranges() {
        // Sweep the random channel across its whole span.
        let seq: Vec<f64> = (0..30).map(|i| i as f64 / 30.0).collect();
        let entries = historical(today(), &mut SeqRandom(seq, 0));
        for entry in &entries {
            assert!(
                (1..=5).contains(&entry.recommendations),
                "recommendations {}",
                entry.recommendations
            );
            assert!(
                (100..=599).contains(&entry.savings),
                "savings {}",
                entry.savings
            );
            assert!(
                ["wheat", "rice", "tomato"].contains(&entry.crop_type.as_str()),
                "crop {}",
                entry.crop_type
            );
        }
    }
}
