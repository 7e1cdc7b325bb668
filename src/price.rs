//! Currency rendering for product prices.
//!
//! Output follows en-US conventions: narrow currency symbol in front, `,`
//! thousands grouping and the currency's own number of fraction digits.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, StorefrontError};

const NBSP: char = '\u{a0}';

/// ISO 4217 currency code, stored upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(StorefrontError::InvalidCurrencyCode {
                code: code.to_string(),
            });
        }
        Ok(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Narrow symbol for well-known currencies. The three-digit dinar
    /// currencies have none and render with their code.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self.as_str() {
            "USD" | "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" | "TWD" | "CLP" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" | "CNY" => "¥",
            "KRW" => "₩",
            "INR" => "₹",
            "BRL" => "R$",
            "ILS" => "₪",
            "PLN" => "zł",
            "SEK" | "NOK" | "DKK" | "ISK" => "kr",
            "VND" => "₫",
            "HUF" => "Ft",
            "THB" => "฿",
            "RUB" => "₽",
            "CHF" => "CHF",
            _ => return None,
        };
        Some(symbol)
    }

    /// Number of minor-unit digits shown.
    pub fn fraction_digits(&self) -> u32 {
        match self.as_str() {
            "JPY" | "KRW" | "CLP" | "VND" | "ISK" | "HUF" => 0,
            "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Price {
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Parses a decimal amount string such as `"29.99"` together with its
    /// currency code.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self> {
        let currency = CurrencyCode::parse(currency_code)?;
        let amount = Decimal::from_str(amount.trim()).map_err(|_| {
            StorefrontError::InvalidAmount {
                amount: amount.to_string(),
            }
        })?;
        Ok(Self::new(amount, currency))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Formatted amount, e.g. `$1,999.99` or `¥1,500`.
    pub fn formatted(&self) -> String {
        let digits = self.currency.fraction_digits();
        let mut rounded = self
            .amount
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(digits);

        // The sign follows the amount itself, so -0.001 shows as -$0.00.
        let negative = self.amount.is_sign_negative() && !self.amount.is_zero();
        let number = group_thousands(&rounded.abs().to_string(), digits);

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        let symbol = self.currency.symbol().unwrap_or(self.currency.as_str());
        out.push_str(symbol);
        // Letter symbols are kept apart from the digits.
        if symbol.ends_with(char::is_alphabetic) {
            out.push(NBSP);
        }
        out.push_str(&number);
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.formatted(), self.currency)
    }
}

/// Formats `amount` in `currency_code` for display.
pub fn format_price(amount: &str, currency_code: &str) -> Result<String> {
    Ok(Price::parse(amount, currency_code)?.formatted())
}

/// Groups the integer part of `plain` and pads its fraction to
/// `fraction_digits`; `rescale` cannot add scale near `Decimal::MAX`.
fn group_thousands(plain: &str, fraction_digits: u32) -> String {
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if fraction_digits > 0 {
        let fraction = fraction.unwrap_or_default();
        grouped.push('.');
        grouped.push_str(fraction);
        for _ in fraction.len()..fraction_digits as usize {
            grouped.push('0');
        }
    }
    grouped
}
