// 🧾 Receipt Model - Submitted receipts and their line items
// Raw (untrusted) and validated shapes for the submission pipeline

use serde::{Deserialize, Serialize};

// ============================================================================
// RAW SHAPES (as submitted)
// ============================================================================

/// RawReceipt - Receipt payload exactly as it arrived, before any checks
///
/// Every field is optional so that a missing field becomes a validation
/// failure with its own message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<RawItem>>,
    #[serde(default)]
    pub total: Option<String>,
}

/// RawItem - One line entry as submitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl RawItem {
    /// Convenience constructor for callers assembling receipts in code
    pub fn new(short_description: &str, price: &str) -> Self {
        RawItem {
            short_description: Some(short_description.to_string()),
            price: Some(price.to_string()),
        }
    }
}

// ============================================================================
// VALIDATED SHAPES
// ============================================================================

/// Receipt - A purchase receipt that passed every format check
///
/// Immutable once produced by the validator; the scorer and the store only
/// ever read it. Monetary fields stay as the submitted strings so the stored
/// receipt echoes the submission exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// YYYY-MM-DD (shape-checked; calendar validity is not enforced)
    pub purchase_date: String,
    /// HH:mm, 24-hour
    pub purchase_time: String,
    /// Non-empty, in submission order
    pub items: Vec<Item>,
    /// D+.DD
    pub total: String,
}

/// Item - One validated line entry (description + price)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    /// D+.DD
    pub price: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_receipt_tolerates_missing_fields() {
        let raw: RawReceipt = serde_json::from_str(r#"{"retailer": "Target"}"#)
            .expect("partial payload should deserialize");

        assert_eq!(raw.retailer.as_deref(), Some("Target"));
        assert!(raw.purchase_date.is_none());
        assert!(raw.purchase_time.is_none());
        assert!(raw.items.is_none());
        assert!(raw.total.is_none());
    }

    #[test]
    fn test_raw_receipt_camel_case_field_names() {
        let raw: RawReceipt = serde_json::from_str(
            r#"{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}],
                "total": "6.49"
            }"#,
        )
        .expect("full payload should deserialize");

        assert_eq!(raw.purchase_date.as_deref(), Some("2022-01-01"));
        assert_eq!(raw.purchase_time.as_deref(), Some("13:01"));
        let items = raw.items.expect("items present");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].short_description.as_deref(), Some("Mountain Dew 12PK"));
    }

    #[test]
    fn test_receipt_serializes_to_wire_names() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
            total: "6.49".to_string(),
        };

        let json = serde_json::to_value(&receipt).expect("receipt serializes");
        assert_eq!(json["purchaseDate"], "2022-01-01");
        assert_eq!(json["items"][0]["shortDescription"], "Mountain Dew 12PK");
    }
}
