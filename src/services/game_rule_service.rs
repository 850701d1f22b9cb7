use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::GameRule;

/// (id, name, main_min, main_max, main_count, bonus_min, bonus_max, bonus_label)
type RuleRow = (&'static str, &'static str, u32, u32, u32, u32, u32, &'static str);

const BUILTIN_RULES: &[RuleRow] = &[
    ("powerball", "Powerball", 1, 69, 5, 1, 26, "Powerball"),
    ("megamillions", "Mega Millions", 1, 70, 5, 1, 25, "Mega Ball"),
];

/// Read-only registry of supported games.
#[derive(Clone)]
pub struct GameRuleService {
    rules: Arc<Vec<GameRule>>,
}

impl Default for GameRuleService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRuleService {
    /// Registry populated from the built-in table
    pub fn new() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(
                |&(id, name, main_min, main_max, main_count, bonus_min, bonus_max, bonus_label)| {
                    GameRule {
                        id: id.to_string(),
                        name: name.to_string(),
                        main_min,
                        main_max,
                        main_count,
                        bonus_min,
                        bonus_max,
                        bonus_label: bonus_label.to_string(),
                    }
                },
            )
            .collect();
        Self::with_rules(rules)
    }

    pub fn with_rules(rules: Vec<GameRule>) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// All games, in table order
    pub fn list(&self) -> Vec<GameRule> {
        self.rules.as_ref().clone()
    }

    pub fn lookup(&self, id: &str) -> AppResult<GameRule> {
        self.rules
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::UnknownGame(id.to_string()))
    }
}
