//! Field-level validation rules for book records.
//!
//! # Responsibility
//! - Decide whether a prospective record is acceptable for the store.
//! - Report the first failing field with user-facing message copy.
//!
//! # Invariants
//! - Rules are evaluated in canonical field order: title, author,
//!   publisher, published date, ISBN, price, quantity, overview.
//! - Rules are independent per field; no cross-field interaction.
//! - Store-assigned fields (`id`, timestamps) are never validated here.

use crate::model::book::BookDraft;
use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[a-zA-Z0-9\s\-_.,!?'"()]+$"#).expect("valid title regex"));
static AUTHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("valid author regex"));
static PUBLISHER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s\-_.,&]+$").expect("valid publisher regex"));
// 9 digits each optionally followed by one hyphen or space, then a digit or X.
static ISBN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d[- ]?){9}[\dXx]$").expect("valid isbn regex"));

const PRICE_MAX: f64 = 10_000.0;
const QUANTITY_MAX: u32 = 10_000;

static PUBLISHED_DATE_MIN: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid minimum date"));

/// First-failure validation error, carrying the offending wire field.
#[derive(Debug, Clone, PartialEq)]
pub enum BookValidationError {
    /// Text field shorter than its minimum character count.
    TooShort { field: &'static str, min: usize },
    /// Text field longer than its maximum character count.
    TooLong { field: &'static str, max: usize },
    /// Text field contains characters outside its allowed set.
    InvalidCharset { field: &'static str },
    /// Published date earlier than 1900-01-01.
    DateBeforeMinimum(NaiveDate),
    /// Published date later than the current UTC date.
    DateInFuture(NaiveDate),
    /// ISBN does not match the 10-digit pattern.
    IsbnFormat,
    /// ISBN matches the pattern but fails the mod-11 checksum.
    IsbnChecksum,
    /// Price outside 0..=10000.
    PriceOutOfRange(f64),
    /// Price carries more than two fractional digits.
    PriceScale(f64),
    /// Quantity above 10000.
    QuantityTooLarge(u32),
}

impl BookValidationError {
    /// Wire name of the field that failed, for API error payloads.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::InvalidCharset { field } => field,
            Self::DateBeforeMinimum(_) | Self::DateInFuture(_) => "publishedDate",
            Self::IsbnFormat | Self::IsbnChecksum => "isbn",
            Self::PriceOutOfRange(_) | Self::PriceScale(_) => "price",
            Self::QuantityTooLarge(_) => "quantity",
        }
    }
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {min} characters", noun(field))
            }
            Self::TooLong { field, max } => {
                write!(f, "{} must not exceed {max} characters", noun(field))
            }
            Self::InvalidCharset { field } => {
                if *field == "author" {
                    write!(
                        f,
                        "Author name can only contain letters, spaces, hyphens, and apostrophes"
                    )
                } else {
                    write!(f, "{} contains invalid characters", noun(field))
                }
            }
            Self::DateBeforeMinimum(_) => write!(f, "Published date cannot be before 1900"),
            Self::DateInFuture(_) => write!(f, "Published date cannot be in the future"),
            Self::IsbnFormat => {
                write!(f, "ISBN must be in the format: XXXXXXXXXX or XXXX-XXXX-X")
            }
            Self::IsbnChecksum => write!(f, "Invalid ISBN"),
            Self::PriceOutOfRange(value) => {
                if *value < 0.0 {
                    write!(f, "Price must be positive")
                } else {
                    write!(f, "Price cannot exceed $10,000")
                }
            }
            Self::PriceScale(_) => write!(f, "Price can have up to 2 decimal places"),
            Self::QuantityTooLarge(_) => write!(f, "Quantity cannot exceed 10,000"),
        }
    }
}

impl Error for BookValidationError {}

/// User-facing noun for a wire field name.
fn noun(field: &str) -> &'static str {
    match field {
        "title" => "Title",
        "author" => "Author name",
        "publisher" => "Publisher name",
        "overview" => "Overview",
        _ => "Field",
    }
}

/// Validates every caller-supplied field of a prospective record.
///
/// # Contract
/// - Returns the first failing field's error in canonical field order.
/// - A draft that passes is acceptable for store insertion as-is.
pub fn validate_draft(draft: &BookDraft) -> Result<(), BookValidationError> {
    validate_text("title", &draft.title, 2, 100, &TITLE_RE)?;
    validate_text("author", &draft.author, 2, 50, &AUTHOR_RE)?;
    validate_text("publisher", &draft.publisher, 2, 50, &PUBLISHER_RE)?;
    validate_published_date(draft.published_date)?;
    validate_isbn(&draft.isbn)?;
    validate_price(draft.price)?;
    validate_quantity(draft.quantity)?;
    validate_text("overview", &draft.overview, 50, 2000, &TITLE_RE)?;
    Ok(())
}

fn validate_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    charset: &Regex,
) -> Result<(), BookValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(BookValidationError::TooShort { field, min });
    }
    if len > max {
        return Err(BookValidationError::TooLong { field, max });
    }
    if !charset.is_match(value) {
        return Err(BookValidationError::InvalidCharset { field });
    }
    Ok(())
}

fn validate_published_date(date: NaiveDate) -> Result<(), BookValidationError> {
    if date < *PUBLISHED_DATE_MIN {
        return Err(BookValidationError::DateBeforeMinimum(date));
    }
    if date > Utc::now().date_naive() {
        return Err(BookValidationError::DateInFuture(date));
    }
    Ok(())
}

fn validate_isbn(isbn: &str) -> Result<(), BookValidationError> {
    if !ISBN_RE.is_match(isbn) {
        return Err(BookValidationError::IsbnFormat);
    }
    if !isbn10_checksum_ok(isbn) {
        return Err(BookValidationError::IsbnChecksum);
    }
    Ok(())
}

/// Mod-11 weighted-digit check for 10-character ISBNs.
///
/// # Contract
/// - Hyphens and spaces are stripped before checking.
/// - The stripped form must be exactly 10 characters.
/// - Position `i` (0..=8) contributes `digit * (10 - i)`; the tenth
///   character contributes 10 when it is `X`/`x`, its digit value otherwise.
/// - Valid iff the sum is divisible by 11.
pub fn isbn10_checksum_ok(isbn: &str) -> bool {
    let stripped: Vec<char> = isbn
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();
    if stripped.len() != 10 {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in stripped.iter().enumerate() {
        let value = if i == 9 && (*c == 'X' || *c == 'x') {
            10
        } else {
            match c.to_digit(10) {
                Some(digit) => digit,
                None => return false,
            }
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

fn validate_price(price: f64) -> Result<(), BookValidationError> {
    if !(0.0..=PRICE_MAX).contains(&price) {
        return Err(BookValidationError::PriceOutOfRange(price));
    }
    // Scale check is independent of the range check: reject a third
    // fractional digit even inside the range.
    let cents = price * 100.0;
    if (cents - cents.round()).abs() > 1e-6 {
        return Err(BookValidationError::PriceScale(price));
    }
    Ok(())
}

fn validate_quantity(quantity: u32) -> Result<(), BookValidationError> {
    if quantity > QUANTITY_MAX {
        return Err(BookValidationError::QuantityTooLarge(quantity));
    }
    Ok(())
}
