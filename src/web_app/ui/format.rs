// ui/format.rs - Display formatting shared by cards and detail pages

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Average reading speed used when a post has no stored read time
const WORDS_PER_MINUTE: usize = 200;

pub fn format_price(amount: Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Whole-number discount, only when `original` is above `price`
pub fn discount_percent(price: Decimal, original: Decimal) -> Option<u32> {
    if original <= price || original <= Decimal::ZERO {
        return None;
    }
    let percent = (original - price) / original * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

/// "March 5, 2025"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn read_time_label(read_time: Option<u32>, content: &str) -> String {
    let minutes = read_time.filter(|m| *m > 0).unwrap_or_else(|| {
        let words = strip_html(content).split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
    });
    format!("{} min read", minutes)
}

/// Drop tags and collapse whitespace, for excerpts and meta descriptions
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed value, or `None` when blank
pub fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Cut at a character boundary, appending "..." when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}

/// snake_case / kebab-case specification keys to Title Case
pub fn humanize_key(key: &str) -> String {
    key.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut c = word.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn spec_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(true) => "Yes".to_string(),
        serde_json::Value::Bool(false) => "No".to_string(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Full, half and empty star counts for a 0-5 rating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarCounts {
    pub full: usize,
    pub half: bool,
    pub empty: usize,
}

pub fn star_counts(rating: f64) -> StarCounts {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = (rating - rating.floor()) >= 0.5;
    StarCounts {
        full,
        half,
        empty: 5 - full - usize::from(half),
    }
}
