// 📐 Receipt Validation - Format checks for submitted receipts
// Checks presence and shape of every field, in a fixed order, stopping at
// the first failure. Character classes are explicit predicates so the
// accepted inputs do not depend on a pattern-matching library.

use crate::receipt::{Item, RawItem, RawReceipt, Receipt};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// ValidationError - First failed check for a submitted receipt
///
/// Each variant carries the message the caller sees; the ordering of checks
/// in `validate` is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidRetailer,
    InvalidDate,
    InvalidTime,
    InvalidItems,
    MissingItemFields,
    InvalidItemDescription,
    InvalidItemPrice,
    InvalidTotal,
}

impl ValidationError {
    /// Human-readable message reported to the submitter
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Invalid receipt data. Missing required fields.",
            ValidationError::InvalidRetailer => "Invalid retailer name format.",
            ValidationError::InvalidDate => {
                "Invalid purchase date format. Expected format: YYYY-MM-DD."
            }
            ValidationError::InvalidTime => {
                "Invalid purchase time format. Expected format: HH:mm."
            }
            ValidationError::InvalidItems => "Invalid items array. Expected a non-empty array.",
            ValidationError::MissingItemFields => "Invalid item data. Missing required fields.",
            ValidationError::InvalidItemDescription => "Invalid item description format.",
            ValidationError::InvalidItemPrice => "Invalid item price format. Expected format: X.XX.",
            ValidationError::InvalidTotal => "Invalid total amount format. Expected format: X.XX.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// PATTERN PREDICATES
// ============================================================================

/// Characters allowed in a retailer name: word chars, whitespace, '-', '&'
fn is_retailer_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '&' || c.is_whitespace()
}

/// Characters allowed in an item description: the retailer set minus '&'
fn is_description_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace()
}

/// One or more retailer characters
pub fn is_valid_retailer(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_retailer_char)
}

/// One or more description characters
pub fn is_valid_description(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_description_char)
}

/// Exactly YYYY-MM-DD. Shape only: calendar validity is not enforced, so
/// "2022-13-40" passes here and the scorer tolerates it.
pub fn is_valid_date(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 10
        && b[..4].iter().all(|c| c.is_ascii_digit())
        && b[4] == b'-'
        && b[5..7].iter().all(|c| c.is_ascii_digit())
        && b[7] == b'-'
        && b[8..10].iter().all(|c| c.is_ascii_digit())
}

/// Exactly HH:mm (two digits, colon, two digits)
pub fn is_valid_time(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 5
        && b[..2].iter().all(|c| c.is_ascii_digit())
        && b[2] == b':'
        && b[3..5].iter().all(|c| c.is_ascii_digit())
}

/// One or more digits, a dot, exactly two digits
pub fn is_valid_money(text: &str) -> bool {
    match text.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty()
                && cents.len() == 2
                && dollars.bytes().all(|b| b.is_ascii_digit())
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validate a submitted receipt, producing the typed `Receipt` on success.
///
/// Pure function of its input. Checks run in a fixed order and stop at the
/// first failure:
/// 1. presence of all top-level fields
/// 2. retailer charset
/// 3. purchase date shape
/// 4. purchase time shape
/// 5. items non-empty
/// 6. per item: presence, description charset, price shape
/// 7. total shape
pub fn validate(raw: RawReceipt) -> Result<Receipt, ValidationError> {
    let RawReceipt {
        retailer: Some(retailer),
        purchase_date: Some(purchase_date),
        purchase_time: Some(purchase_time),
        items: Some(items),
        total: Some(total),
    } = raw
    else {
        return Err(ValidationError::MissingFields);
    };

    // An empty string is as missing as an absent field. An empty items array
    // is present, so it falls through to the dedicated check below.
    if retailer.is_empty() || purchase_date.is_empty() || purchase_time.is_empty() || total.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_retailer(&retailer) {
        return Err(ValidationError::InvalidRetailer);
    }
    if !is_valid_date(&purchase_date) {
        return Err(ValidationError::InvalidDate);
    }
    if !is_valid_time(&purchase_time) {
        return Err(ValidationError::InvalidTime);
    }
    if items.is_empty() {
        return Err(ValidationError::InvalidItems);
    }

    let mut checked = Vec::with_capacity(items.len());
    for item in items {
        let RawItem {
            short_description: Some(short_description),
            price: Some(price),
        } = item
        else {
            return Err(ValidationError::MissingItemFields);
        };

        if short_description.is_empty() || price.is_empty() {
            return Err(ValidationError::MissingItemFields);
        }
        if !is_valid_description(&short_description) {
            return Err(ValidationError::InvalidItemDescription);
        }
        if !is_valid_money(&price) {
            return Err(ValidationError::InvalidItemPrice);
        }

        checked.push(Item {
            short_description,
            price,
        });
    }

    if !is_valid_money(&total) {
        return Err(ValidationError::InvalidTotal);
    }

    Ok(Receipt {
        retailer,
        purchase_date,
        purchase_time,
        items: checked,
        total,
    })
}

// ============================================================================
// TESTS
// ============================================================================
