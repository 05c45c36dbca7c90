//! Decoder for the SR vendor date encoding.
//!
//! The upstream API encodes publication times as a Microsoft-style JSON
//! date such as `\Date(1591958562162+0200)`: an epoch-millisecond value
//! wrapped in literal text, optionally followed by a timezone offset.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, AppResult};

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Extracts the epoch-millisecond value embedded in a vendor date string.
///
/// The contract is deliberately permissive: the first maximal run of
/// decimal digits anywhere in the string is the value, and the
/// surrounding literal text (including the `\Date(` wrapper and any
/// offset suffix) is never validated. Tightening this would break
/// compatibility with minor upstream format variations.
pub fn parse_epoch_millis(raw: &str) -> AppResult<i64> {
    let run = DIGIT_RUN.find(raw).ok_or_else(|| AppError::MalformedDate {
        value: raw.to_string(),
    })?;

    run.as_str()
        .parse::<i64>()
        .map_err(|_| AppError::MalformedDate {
            value: raw.to_string(),
        })
}
