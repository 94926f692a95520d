//! Display formatting for rupee amounts (en-IN conventions).

use rust_decimal::{Decimal, RoundingStrategy};

const RUPEE: char = '₹';

/// `₹1,00,000.00`: two decimals, Indian digit grouping.
pub fn format_inr(value: Decimal) -> String {
    format_inr_dp(value, 2)
}

/// `₹1,00,000`: rounded to whole rupees.
pub fn format_inr_whole(value: Decimal) -> String {
    format_inr_dp(value, 0)
}

/// `3.75%`: at most two decimals, trailing zeros dropped.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", rounded.normalize())
}

fn format_inr_dp(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.*}", dp as usize, rounded.abs());
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = format!("{sign}{RUPEE}{}", group_indian(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Last three digits form one group, then groups of two: 12,34,567.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = vec![tail];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    groups.join(",")
}
