//! Money helpers shared by the draft and the presentation layer.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Tax rate applied to `subtotal - discount`.
pub const TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Largest amount a draft accepts for a discount, a line total or a subtotal (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Formats an amount as `<symbol><amount>` with exactly two decimals.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{symbol}{rounded}")
}

/// Parses a user-typed amount. Anything that is not a number yields zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

/// Negative discounts and discounts above [`MAX_AMOUNT`] count as zero.
pub fn sanitize_discount(value: Decimal) -> Decimal {
    if value.is_sign_negative() || value > MAX_AMOUNT {
        Decimal::ZERO
    } else {
        value
    }
}

/// A discount as the user entered it.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountInput {
    Text(String),
    Amount(Decimal),
}

impl DiscountInput {
    /// Resolves to a usable discount. Invalid, empty, negative or out-of-range input is zero.
    pub fn resolve(&self) -> Decimal {
        match self {
            DiscountInput::Text(raw) => sanitize_discount(parse_amount(raw)),
            DiscountInput::Amount(value) => sanitize_discount(*value),
        }
    }
}

impl From<&str> for DiscountInput {
    fn from(raw: &str) -> Self {
        DiscountInput::Text(raw.to_string())
    }
}

impl From<String> for DiscountInput {
    fn from(raw: String) -> Self {
        DiscountInput::Text(raw)
    }
}

impl From<Decimal> for DiscountInput {
    fn from(value: Decimal) -> Self {
        DiscountInput::Amount(value)
    }
}
