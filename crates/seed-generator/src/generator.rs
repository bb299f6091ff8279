//! Main generator for producing CRM rows.

use crate::generators::{
    generate_address, generate_amount, generate_bool, generate_company_name, generate_email,
    generate_int_range, generate_person_name, random_day_in_window,
};
use crate::rows::{
    AccountRow, InteractionRow, LeadRow, OpportunityRow, OrderRow, ACCOUNT_DESCRIPTION,
};
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Inclusive bounds of the account credit-hold score.
pub const CREDIT_ON_HOLD_RANGE: (i64, i64) = (0, 100);

/// Inclusive bounds of an opportunity's size.
pub const OPPORTUNITY_SIZE_RANGE: (i64, i64) = (1_000, 100_000);

/// Inclusive bounds of an order amount.
pub const ORDER_AMOUNT_RANGE: (f64, f64) = (10.0, 10_000.0);

/// Chance that an opportunity traces back to a lead.
pub const CONVERSION_PROBABILITY: f64 = 0.5;

/// Activity kinds used for interaction descriptions.
pub const INTERACTION_KINDS: &[&str] = &[
    "Introductory call",
    "Product demo",
    "Follow-up email",
    "Pricing discussion",
    "Support ticket",
    "Quarterly review",
    "On-site visit",
];

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// No candidate account to attach a row to
    #[error("No accounts available to reference")]
    NoAccounts,

    /// Date arithmetic left chrono's supported range
    #[error("Date out of range: {start} + {days} days")]
    DateOutOfRange { start: NaiveDateTime, days: u32 },
}

/// Generator that produces CRM rows from fake-data providers.
///
/// Built with a seed the output is reproducible; built from entropy it is
/// not, which matches how a normal seeding run behaves.
pub struct CrmGenerator {
    /// Random number generator shared by every field
    rng: StdRng,
    /// Identifier handed to the next lead
    next_lead_id: i64,
}

impl CrmGenerator {
    /// Create a deterministic generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator from an optional seed.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            next_lead_id: 1,
        }
    }

    /// Identifier the next generated lead will receive.
    pub fn next_lead_id(&self) -> i64 {
        self.next_lead_id
    }

    /// Generate one account.
    pub fn account(&mut self) -> AccountRow {
        let (min, max) = CREDIT_ON_HOLD_RANGE;
        AccountRow {
            name: generate_company_name(&mut self.rng),
            credit_on_hold: generate_int_range(&mut self.rng, min, max),
            follow_email: generate_bool(&mut self.rng),
            description: ACCOUNT_DESCRIPTION.to_string(),
            address: generate_address(&mut self.rng),
        }
    }

    /// Generate `count` accounts.
    pub fn accounts(&mut self, count: u64) -> impl Iterator<Item = AccountRow> + '_ {
        (0..count).map(move |_| self.account())
    }

    /// Generate one lead owned by a uniformly chosen account.
    ///
    /// The lead identifier is taken from a running counter, so it stays unique
    /// even when the number of leads per day changes.
    pub fn lead(
        &mut self,
        account_ids: &[i64],
        date_generated: NaiveDateTime,
    ) -> Result<LeadRow, GeneratorError> {
        let account_id = self.pick(account_ids)?;
        let lead_id = self.next_lead_id;
        self.next_lead_id += 1;

        Ok(LeadRow {
            lead_id,
            account_id,
            date_generated,
            email: generate_email(&mut self.rng),
        })
    }

    /// Generate one opportunity somewhere in `[start, start + day_count days)`.
    pub fn opportunity(
        &mut self,
        account_ids: &[i64],
        lead_ids: &[i64],
        start: NaiveDateTime,
        day_count: u32,
    ) -> Result<OpportunityRow, GeneratorError> {
        let account_id = self.pick(account_ids)?;
        let date_created = self.random_date(start, day_count)?;

        let converted_from = if !lead_ids.is_empty() && self.rng.gen_bool(CONVERSION_PROBABILITY)
        {
            lead_ids.choose(&mut self.rng).copied()
        } else {
            None
        };

        let (min, max) = OPPORTUNITY_SIZE_RANGE;
        Ok(OpportunityRow {
            account_id,
            date_created,
            converted_from,
            size: generate_int_range(&mut self.rng, min, max),
        })
    }

    /// Generate one interaction for the given account.
    pub fn interaction(
        &mut self,
        account_id: i64,
        start: NaiveDateTime,
        day_count: u32,
    ) -> Result<InteractionRow, GeneratorError> {
        let date = self.random_date(start, day_count)?;
        let kind = INTERACTION_KINDS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Interaction");
        let contact = generate_person_name(&mut self.rng);

        Ok(InteractionRow {
            account_id,
            date,
            description: format!("{kind} with {contact}"),
        })
    }

    /// Generate one order for the given account.
    pub fn order(
        &mut self,
        account_id: i64,
        start: NaiveDateTime,
        day_count: u32,
    ) -> Result<OrderRow, GeneratorError> {
        let date = self.random_date(start, day_count)?;
        let (min, max) = ORDER_AMOUNT_RANGE;

        Ok(OrderRow {
            account_id,
            date,
            amount: generate_amount(&mut self.rng, min, max),
        })
    }

    /// Random count in `0..=max`, used for per-account fan-out.
    pub fn fan_out(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }

    fn pick(&mut self, ids: &[i64]) -> Result<i64, GeneratorError> {
        ids.choose(&mut self.rng)
            .copied()
            .ok_or(GeneratorError::NoAccounts)
    }

    fn random_date(
        &mut self,
        start: NaiveDateTime,
        day_count: u32,
    ) -> Result<NaiveDateTime, GeneratorError> {
        random_day_in_window(&mut self.rng, start, day_count).ok_or(
            GeneratorError::DateOutOfRange {
                start,
                days: day_count,
            },
        )
    }
}
