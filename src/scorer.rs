// 🎯 Points Engine - Reward points for validated receipts
// Seven independent rules, each contributing zero or a derived amount.
// Scoring is pure: the same receipt always earns the same total.

use crate::money::{is_quarter_multiple, is_whole_dollars, parse_cents};
use crate::receipt::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

/// Inclusive afternoon bonus window, in minutes since midnight
const AFTERNOON_START_MIN: u32 = 14 * 60;
const AFTERNOON_END_MIN: u32 = 16 * 60;

// ============================================================================
// RULE AWARDS
// ============================================================================

/// RuleAward - Points one rule contributed to a receipt's total
#[derive(Debug, Clone, Serialize)]
pub struct RuleAward {
    /// Stable rule name for display and diagnostics
    pub rule: &'static str,
    pub points: u64,
}

// ============================================================================
// SCORER
// ============================================================================

/// Total points for a validated receipt
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).iter().map(|award| award.points).sum()
}

/// Per-rule breakdown of a receipt's points; sums to `score`
pub fn breakdown(receipt: &Receipt) -> Vec<RuleAward> {
    vec![
        RuleAward {
            rule: "retailer_alphanumerics",
            points: retailer_points(&receipt.retailer),
        },
        RuleAward {
            rule: "round_dollar_total",
            points: round_total_points(&receipt.total),
        },
        RuleAward {
            rule: "quarter_multiple_total",
            points: quarter_total_points(&receipt.total),
        },
        RuleAward {
            rule: "item_pairs",
            points: item_pair_points(&receipt.items),
        },
        RuleAward {
            rule: "item_descriptions",
            points: description_points(&receipt.items),
        },
        RuleAward {
            rule: "odd_purchase_day",
            points: odd_day_points(&receipt.purchase_date),
        },
        RuleAward {
            rule: "afternoon_purchase",
            points: afternoon_points(&receipt.purchase_time),
        },
    ]
}

// ============================================================================
// INDIVIDUAL RULES
// ============================================================================

/// One point per ASCII letter or digit in the retailer name
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points when the total is a round dollar amount with no cents
fn round_total_points(total: &str) -> u64 {
    match parse_cents(total) {
        Some(cents) if is_whole_dollars(cents) => 50,
        _ => 0,
    }
}

/// 25 points when the total is a multiple of 0.25
fn quarter_total_points(total: &str) -> u64 {
    match parse_cents(total) {
        Some(cents) if is_quarter_multiple(cents) => 25,
        _ => 0,
    }
}

/// 5 points for every two items
fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * 5
}

/// For each item whose trimmed description length is a positive multiple of
/// three: ceil(price * 0.2), counted only when that bonus is positive
fn description_points(items: &[Item]) -> u64 {
    items.iter().map(item_description_points).sum()
}

fn item_description_points(item: &Item) -> u64 {
    let trimmed_len = item.short_description.trim().len();
    if trimmed_len == 0 || trimmed_len % 3 != 0 {
        return 0;
    }

    let Some(cents) = parse_cents(&item.price) else {
        return 0;
    };

    // ceil(cents * 0.2 / 100) in integer arithmetic
    let bonus = cents.saturating_add(499) / 500;
    if bonus > 0 {
        bonus as u64
    } else {
        0
    }
}

/// 6 points when the day of the purchase date is odd. A date that does not
/// parse as a real calendar date earns nothing, matching how the original
/// service treated invalid dates.
fn odd_day_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points when the purchase time falls inside [14:00, 16:00], bounds
/// inclusive. An unparseable time earns nothing.
fn afternoon_points(purchase_time: &str) -> u64 {
    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) => {
            let minutes = time.hour() * 60 + time.minute();
            if (AFTERNOON_START_MIN..=AFTERNOON_END_MIN).contains(&minutes) {
                10
            } else {
                0
            }
        }
        Err(_) => 0,
    }
}

// ============================================================================
// TESTS
// ============================================================================
