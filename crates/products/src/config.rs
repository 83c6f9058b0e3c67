//! Store configuration, read from the environment.

use core::num::NonZeroUsize;

use thiserror::Error;

use crate::format::{self, DEFAULT_LOW_STOCK_THRESHOLD};

pub const ITEMS_PER_PAGE_VAR: &str = "STOCKBOARD_ITEMS_PER_PAGE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKBOARD_LOW_STOCK_THRESHOLD";

const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Settings fixed for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub items_per_page: NonZeroUsize,
    pub low_stock_threshold: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StoreConfig {
    pub fn with_items_per_page(mut self, items_per_page: NonZeroUsize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Whether a row with `stock` units gets the low-stock highlight.
    pub fn is_low_stock(&self, stock: i64) -> bool {
        format::is_low_stock(stock, self.low_stock_threshold)
    }

    /// Read overrides from the process environment; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`StoreConfig::from_env`], with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ITEMS_PER_PAGE_VAR) {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid(ITEMS_PER_PAGE_VAR, &value, "expected a positive integer"))?;
            config.items_per_page = NonZeroUsize::new(parsed)
                .ok_or_else(|| invalid(ITEMS_PER_PAGE_VAR, &value, "must be greater than 0"))?;
        }

        if let Some(value) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            config.low_stock_threshold = value
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid(LOW_STOCK_THRESHOLD_VAR, &value, "expected an integer"))?;
        }

        Ok(config)
    }
}

fn invalid(var: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason,
    }
}
