//! Plain row types produced by the generator.
//!
//! Identifiers are left to storage where it assigns them (`Account_ID`,
//! `Opportunity_ID`, ...). Leads carry an explicit identifier because the
//! seeding run numbers them itself.

use chrono::NaiveDateTime;

/// Fixed description stored on every generated account.
pub const ACCOUNT_DESCRIPTION: &str = "This is a random description for a company.";

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub name: String,
    /// Credit-hold score in `0..=100`.
    pub credit_on_hold: i64,
    pub follow_email: bool,
    pub description: String,
    /// `"<street address>, <city>"`.
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadRow {
    pub lead_id: i64,
    pub account_id: i64,
    pub date_generated: NaiveDateTime,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityRow {
    pub account_id: i64,
    pub date_created: NaiveDateTime,
    /// Lead this opportunity was converted from, if any.
    pub converted_from: Option<i64>,
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRow {
    pub account_id: i64,
    pub date: NaiveDateTime,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub account_id: i64,
    pub date: NaiveDateTime,
    pub amount: f64,
}
