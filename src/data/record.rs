use serde::Deserialize;

use crate::error::RowError;

/// A raw tabular record as it comes off the dataset file.
///
/// Every field is optional because the source data has holes; cleaning is
/// the preparer's job. Extra columns in the source file are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub location: Option<String>,
    /// Free-text like "3 BHK" or "2 Bedroom".
    pub size: Option<String>,
    /// Free-text: a plain number, a range like "1000-1200", or a
    /// unit-suffixed value like "34.46Sq. Meter".
    pub total_sqft: Option<String>,
    pub bath: Option<f64>,
    /// Target column; only meaningful at training time.
    pub price: Option<f64>,
}

impl RawRecord {
    pub fn new(
        location: impl Into<String>,
        size: impl Into<String>,
        total_sqft: impl Into<String>,
        bath: f64,
        price: f64,
    ) -> Self {
        Self {
            location: Some(location.into()),
            size: Some(size.into()),
            total_sqft: Some(total_sqft.into()),
            bath: Some(bath),
            price: Some(price),
        }
    }

    /// Cleans this record into a fully numeric-parseable form.
    ///
    /// # Errors
    /// Returns a [`RowError`] naming the first offending field. The caller
    /// decides whether to skip the row or abort.
    pub fn clean(&self) -> Result<CleanRecord, RowError> {
        let location = self
            .location
            .as_deref()
            .ok_or(RowError::MissingField("location"))?;
        let size = self.size.as_deref().ok_or(RowError::MissingField("size"))?;
        let sqft_raw = self
            .total_sqft
            .as_deref()
            .ok_or(RowError::MissingField("total_sqft"))?;
        let bath = self.bath.ok_or(RowError::MissingField("bath"))?;
        let price = self.price.ok_or(RowError::MissingField("price"))?;

        let total_sqft =
            parse_sqft(sqft_raw).ok_or_else(|| RowError::MalformedSqft(sqft_raw.to_string()))?;
        let bhk = parse_bhk(size).ok_or_else(|| RowError::MalformedSize(size.to_string()))?;

        Ok(CleanRecord {
            location: location.to_string(),
            total_sqft,
            bath,
            bhk,
            price,
        })
    }
}

/// A record that passed cleaning: all fields present and numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub location: String,
    pub total_sqft: f64,
    pub bath: f64,
    pub bhk: u32,
    pub price: f64,
}

/// Parses `total_sqft`, accepting only plain numbers.
///
/// A value passes if, after removing at most one decimal point, every
/// remaining character is an ASCII digit and at least one remains. Ranges
/// ("1000-1200") and unit-suffixed values fail this test and are rejected
/// rather than guessed at.
fn parse_sqft(raw: &str) -> Option<f64> {
    let digits = raw.replacen('.', "", 1);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parses `bhk` as the leading space-separated token of `size`.
fn parse_bhk(size: &str) -> Option<u32> {
    size.split(' ').next()?.parse().ok()
}
