//! The calculator state a front-end keeps between key presses and sessions.

pub mod storage;

use crate::interpreter::scientific::AngleUnit;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// History keeps at most this many entries; the oldest are dropped first.
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

/// One finished calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: u64,
    pub expression: String,
    pub result: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl HistoryItem {
    /// Creates an item stamped with the current time, which also serves as its id.
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> HistoryItem {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        HistoryItem {
            id: timestamp,
            expression: expression.into(),
            result: result.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// The expression built so far, e.g. `12 + 5 * `.
    pub expression: String,
    /// The number currently being typed.
    pub current_number: String,
    pub result: Option<String>,
    /// Newest first.
    pub history: Vec<HistoryItem>,
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_degree: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scientific: Option<bool>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState {
            expression: String::new(),
            current_number: String::new(),
            result: None,
            history: Vec::new(),
            theme: Theme::System,
            is_degree: Some(true),
            is_scientific: Some(false),
        }
    }
}

impl CalculatorState {
    pub fn new() -> CalculatorState {
        CalculatorState::default()
    }

    pub fn toggle_scientific_mode(&mut self) {
        self.is_scientific = Some(!self.is_scientific_mode());
    }

    pub fn is_scientific_mode(&self) -> bool {
        self.is_scientific.unwrap_or(false)
    }

    pub fn toggle_angle_unit(&mut self) {
        self.is_degree = Some(!self.is_degree_mode());
    }

    /// A state that never recorded the angle unit counts as degrees.
    pub fn is_degree_mode(&self) -> bool {
        self.is_degree != Some(false)
    }

    pub fn angle_unit(&self) -> AngleUnit {
        AngleUnit::from_degrees_flag(self.is_degree_mode())
    }

    pub fn add_history(&mut self, item: HistoryItem) {
        self.history.insert(0, item);
        self.history.truncate(MAX_HISTORY);
    }

    pub fn remove_history(&mut self, id: u64) {
        self.history.retain(|item| item.id != id);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Back to the initial state, except for the theme.
    pub fn reset(&mut self) {
        *self = CalculatorState {
            theme: self.theme,
            ..CalculatorState::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: u64) -> HistoryItem {
        HistoryItem {
            id,
            expression: format!("{} + 1", id),
            result: format!("{}", id + 1),
            timestamp: id,
        }
    }

    #[test]
    fn new_state_uses_defaults() {
        let state = CalculatorState::new();

        assert_eq!(state.expression, "");
        assert_eq!(state.current_number, "");
        assert_eq!(state.result, None);
        assert!(state.history.is_empty());
        assert_eq!(state.theme, Theme::System);
        assert!(state.is_degree_mode());
        assert!(!state.is_scientific_mode());
    }

    #[test]
    fn toggles_flip_modes() {
        let mut state = CalculatorState::new();

        state.toggle_scientific_mode();
        state.toggle_angle_unit();

        assert!(state.is_scientific_mode());
        assert!(!state.is_degree_mode());
        assert_eq!(state.angle_unit(), AngleUnit::Radians);

        state.toggle_angle_unit();
        assert_eq!(state.angle_unit(), AngleUnit::Degrees);
    }

    #[test]
    fn missing_angle_unit_counts_as_degrees() {
        let state = CalculatorState {
            is_degree: None,
            ..CalculatorState::default()
        };

        assert!(state.is_degree_mode());
    }

    #[test]
    fn history_is_newest_first() {
        let mut state = CalculatorState::new();

        state.add_history(item(1));
        state.add_history(item(2));

        let ids: Vec<u64> = state.history.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn history_is_capped() {
        let mut state = CalculatorState::new();

        for id in 0..(MAX_HISTORY as u64 + 5) {
            state.add_history(item(id));
        }

        assert_eq!(state.history.len(), MAX_HISTORY);
        assert_eq!(state.history[0].id, MAX_HISTORY as u64 + 4);
        assert_eq!(state.history[MAX_HISTORY - 1].id, 5);
    }

    #[test]
    fn remove_history_drops_only_matching_item() {
        let mut state = CalculatorState::new();
        state.add_history(item(1));
        state.add_history(item(2));

        state.remove_history(1);

        assert_eq!(state.history, vec![item(2)]);
    }

    #[test]
    fn clear_history_empties_history() {
        let mut state = CalculatorState::new();
        state.add_history(item(1));

        state.clear_history();

        assert!(state.history.is_empty());
    }

    #[test]
    fn reset_keeps_theme() {
        let mut state = CalculatorState::new();
        state.theme = Theme::Dark;
        state.expression = "1 + ".to_string();
        state.result = Some("2".to_string());
        state.add_history(item(1));
        state.toggle_scientific_mode();

        state.reset();

        assert_eq!(
            state,
            CalculatorState {
                theme: Theme::Dark,
                ..CalculatorState::default()
            }
        );
    }

    #[test]
    fn new_history_item_is_stamped() {
        let item = HistoryItem::new("1 + 1", "2");

        assert_eq!(item.id, item.timestamp);
        assert!(item.timestamp > 0);
    }

    #[test]
    fn state_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(CalculatorState::new()).unwrap();

        assert_eq!(json["currentNumber"], "");
        assert_eq!(json["theme"], "system");
        assert_eq!(json["isDegree"], true);
        assert!(json["result"].is_null());
    }
}
