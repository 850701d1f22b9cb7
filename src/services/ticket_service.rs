use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

use crate::config::GeneratorConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    BatchResult, DedupKey, GameRule, GenerateTicketsRequest, GenerateTicketsResponse, Ticket,
    TicketRequest, TicketResponse,
};
use crate::services::GameRuleService;
use crate::utils::{
    RandomSource, UniformSource, format_batch, format_ticket, sample_distinct, sample_independent,
};

/// Hard ceiling on tickets per batch
pub const MAX_TICKETS_PER_BATCH: u32 = 50;

const MIN_ATTEMPTS_CAP: u32 = 3000;
const ATTEMPTS_PER_TICKET: u32 = 300;

/// Draw budget for a batch of `count` tickets.
pub fn attempts_cap(count: u32) -> u32 {
    MIN_ATTEMPTS_CAP.max(count.saturating_mul(ATTEMPTS_PER_TICKET))
}

/// Fills a batch by rejection sampling.
///
/// Every loop iteration is one attempt: draw the main numbers, optionally
/// sort them for display, draw the bonus, and keep the ticket unless its
/// [`DedupKey`] was already produced in this batch. The loop stops when the
/// batch is full or [`attempts_cap`] is reached; running out of attempts is
/// reported through `exhausted`, never as an error.
///
/// Uniqueness is scoped to this call only. Nothing is remembered between
/// batches.
pub fn generate<R: RandomSource + ?Sized>(
    rule: &GameRule,
    request: &TicketRequest,
    rng: &mut R,
) -> AppResult<BatchResult> {
    if request.count == 0 || request.count > MAX_TICKETS_PER_BATCH {
        return Err(AppError::InvalidRequest(format!(
            "Ticket count must be between 1 and {MAX_TICKETS_PER_BATCH}, got {}",
            request.count
        )));
    }
    rule.validate(request.dedup_main)?;

    let wanted = request.count as usize;
    let cap = attempts_cap(request.count);
    let mut seen: HashSet<DedupKey> = HashSet::with_capacity(wanted);
    let mut tickets: Vec<Ticket> = Vec::with_capacity(wanted);
    let mut attempts = 0;

    while tickets.len() < wanted && attempts < cap {
        attempts += 1;

        let mut main = if request.dedup_main {
            sample_distinct(rng, rule.main_min, rule.main_max, rule.main_count)
        } else {
            sample_independent(rng, rule.main_min, rule.main_max, rule.main_count)
        };
        if request.sort_main {
            main.sort_unstable();
        }

        let bonus = rng.rand(rule.bonus_min, rule.bonus_max);

        if request.dedup_batch && !seen.insert(DedupKey::new(&rule.id, &main, bonus)) {
            continue;
        }

        tickets.push(Ticket {
            index: tickets.len() as u32 + 1,
            main,
            bonus,
            game_id: rule.id.clone(),
        });
    }

    let exhausted = tickets.len() < wanted;
    if exhausted {
        log::warn!(
            "{}: only {} of {} unique tickets after {} attempts",
            rule.id,
            tickets.len(),
            wanted,
            attempts
        );
    } else {
        log::debug!(
            "{}: generated {} tickets in {}/{} attempts",
            rule.id,
            wanted,
            attempts,
            cap
        );
    }

    Ok(BatchResult {
        tickets,
        attempts,
        attempts_cap: cap,
        exhausted,
    })
}

#[derive(Clone)]
pub struct TicketService {
    games: GameRuleService,
    limits: GeneratorConfig,
}

impl TicketService {
    pub fn new(games: GameRuleService, limits: GeneratorConfig) -> Self {
        Self { games, limits }
    }

    /// Resolves the game, applies request defaults and runs [`generate`].
    pub fn generate_batch(&self, req: &GenerateTicketsRequest) -> AppResult<GenerateTicketsResponse> {
        let rule = self.games.lookup(&req.game_id)?;

        let count = req.count.unwrap_or(self.limits.default_count);
        if count > self.limits.max_count {
            return Err(AppError::InvalidRequest(format!(
                "At most {} tickets per batch, got {count}",
                self.limits.max_count
            )));
        }

        let request = TicketRequest {
            count,
            dedup_main: req.dedup_main.unwrap_or(true),
            sort_main: req.sort_main.unwrap_or(true),
            dedup_batch: true,
        };

        let batch = match req.seed {
            Some(seed) => generate(&rule, &request, &mut UniformSource::seeded(seed))?,
            None => generate(&rule, &request, &mut UniformSource::thread())?,
        };

        Ok(GenerateTicketsResponse {
            batch_id: Uuid::new_v4(),
            game_id: rule.id.clone(),
            game_name: rule.name.clone(),
            bonus_label: rule.bonus_label.clone(),
            export_text: format_batch(&rule, &batch.tickets),
            tickets: batch
                .tickets
                .iter()
                .map(|t| TicketResponse {
                    index: t.index,
                    main: t.main.clone(),
                    bonus: t.bonus,
                    formatted: format_ticket(&rule, t),
                })
                .collect(),
            requested: count,
            attempts: batch.attempts,
            attempts_cap: batch.attempts_cap,
            exhausted: batch.exhausted,
            generated_at: Utc::now(),
        })
    }
}
