use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Number ranges and cardinalities of one lottery game.
///
/// Both ranges are inclusive. Rules are built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GameRule {
    /// Registry key, e.g. `powerball`
    #[schema(example = "powerball")]
    pub id: String,
    /// Display name
    #[schema(example = "Powerball")]
    pub name: String,
    #[schema(example = 1)]
    pub main_min: u32,
    #[schema(example = 69)]
    pub main_max: u32,
    /// Main numbers per ticket
    #[schema(example = 5)]
    pub main_count: u32,
    #[schema(example = 1)]
    pub bonus_min: u32,
    #[schema(example = 26)]
    pub bonus_max: u32,
    /// Name of the bonus ball, e.g. `Mega Ball`
    #[schema(example = "Powerball")]
    pub bonus_label: String,
}

impl GameRule {
    /// Number of distinct values in the main range.
    pub fn main_range_width(&self) -> u64 {
        u64::from(self.main_max.saturating_sub(self.main_min)) + 1
    }

    /// Rejects rules that sampling could never satisfy.
    ///
    /// Must run before the first draw: with `dedup_main` set and fewer
    /// distinct values than `main_count`, distinct sampling would spin forever.
    pub fn validate(&self, dedup_main: bool) -> AppResult<()> {
        if self.main_count == 0 {
            return Err(AppError::InvalidRule(format!(
                "{}: main_count must be positive",
                self.id
            )));
        }
        if self.main_min >= self.main_max {
            return Err(AppError::InvalidRule(format!(
                "{}: main range [{}, {}] is empty or degenerate",
                self.id, self.main_min, self.main_max
            )));
        }
        if self.bonus_min > self.bonus_max {
            return Err(AppError::InvalidRule(format!(
                "{}: bonus range [{}, {}] is empty",
                self.id, self.bonus_min, self.bonus_max
            )));
        }
        if dedup_main && u64::from(self.main_count) > self.main_range_width() {
            return Err(AppError::InvalidRule(format!(
                "{}: cannot draw {} distinct numbers from [{}, {}]",
                self.id, self.main_count, self.main_min, self.main_max
            )));
        }
        Ok(())
    }
}
