//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`, `--days`)
//! 2. Environment variables (`RENTAL_*`)
//! 3. Defaults (this file)

use std::path::PathBuf;

use rental_core::Money;

/// Longest availability strip the views will render.
pub const MAX_CALENDAR_DAYS: u32 = 62;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database file. `None` means the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Currency symbol shown before prices
    pub currency_symbol: String,

    /// Days shown in availability strips
    pub calendar_days: u32,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Database: platform data directory
    /// - Currency: ₹
    /// - Calendar: 14 days
    fn default() -> Self {
        AppConfig {
            db_path: None,
            currency_symbol: "₹".to_string(),
            calendar_days: 14,
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RENTAL_DB_PATH`: Database file path
    /// - `RENTAL_CURRENCY_SYMBOL`: Currency symbol
    /// - `RENTAL_CALENDAR_DAYS`: Availability strip length (1-62)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("RENTAL_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("RENTAL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(days) = lookup("RENTAL_CALENDAR_DAYS").and_then(|d| d.trim().parse::<u32>().ok()) {
            config.calendar_days = clamp_days(days);
        }

        config
    }

    /// Formats an amount with the currency symbol and thousands separators.
    /// Fractional amounts show two decimal places.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_money(Money::new(15000)), "₹15,000");
    /// assert_eq!(config.format_money(Money::new(1499.5)), "₹1,499.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let value = amount.amount();
        let paise = (value.abs() * 100.0).round();
        let whole = (paise / 100.0).trunc() as u64;
        let cents = (paise % 100.0) as u64;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if cents != 0 {
            grouped.push_str(&format!(".{:02}", cents));
        }

        format!(
            "{}{}{}",
            if value < 0.0 && paise > 0.0 { "-" } else { "" },
            self.currency_symbol,
            grouped
        )
    }
}

/// Keeps a requested strip length within `1..=MAX_CALENDAR_DAYS`.
pub fn clamp_days(days: u32) -> u32 {
    days.clamp(1, MAX_CALENDAR_DAYS)
}
