//! Structured-list codec
//!
//! Lists of records live in the content map as JSON strings. Decoding never
//! fails: absent, empty, malformed, non-array or ill-shaped input yields the
//! caller's fallback so one bad override cannot break a page.

use super::entities::{
    BudgetRange, DeliveryOption, FaqEntry, FooterLink, LogoItem, ServiceOffering, TeamMember,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Decode a stored list, falling back on any failure
pub fn decode<T>(raw: Option<&str>, fallback: &[T]) -> Vec<T>
where
    T: DeserializeOwned + Clone,
{
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return fallback.to_vec(),
    };

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            debug!("List decode: invalid JSON, using fallback: {}", e);
            return fallback.to_vec();
        }
    };

    if !value.is_array() {
        debug!("List decode: stored value is not an array, using fallback");
        return fallback.to_vec();
    }

    match serde_json::from_value::<Vec<T>>(value) {
        Ok(items) => items,
        Err(e) => {
            debug!("List decode: element shape mismatch, using fallback: {}", e);
            fallback.to_vec()
        }
    }
}

/// Like [`decode`], but an empty stored array also yields the fallback
pub fn decode_non_empty<T>(raw: Option<&str>, fallback: &[T]) -> Vec<T>
where
    T: DeserializeOwned + Clone,
{
    let items = decode(raw, fallback);
    if items.is_empty() {
        fallback.to_vec()
    } else {
        items
    }
}

/// Encode a list for storage under its content key
pub fn encode<T: Serialize>(items: &[T]) -> String {
    // Plain string/number records cannot fail to serialize
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Entity shape tag for a list-valued key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Logos,
    TeamMembers,
    FooterLinks,
    Faqs,
    BudgetRanges,
    DeliveryOptions,
    ServiceOfferings,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Logos => "logos",
            ListKind::TeamMembers => "team_members",
            ListKind::FooterLinks => "footer_links",
            ListKind::Faqs => "faqs",
            ListKind::BudgetRanges => "budget_ranges",
            ListKind::DeliveryOptions => "delivery_options",
            ListKind::ServiceOfferings => "service_offerings",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed list value, one variant per entity shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum ListValue {
    Logos(Vec<LogoItem>),
    TeamMembers(Vec<TeamMember>),
    FooterLinks(Vec<FooterLink>),
    Faqs(Vec<FaqEntry>),
    BudgetRanges(Vec<BudgetRange>),
    DeliveryOptions(Vec<DeliveryOption>),
    ServiceOfferings(Vec<ServiceOffering>),
}

impl ListValue {
    pub fn kind(&self) -> ListKind {
        match self {
            ListValue::Logos(_) => ListKind::Logos,
            ListValue::TeamMembers(_) => ListKind::TeamMembers,
            ListValue::FooterLinks(_) => ListKind::FooterLinks,
            ListValue::Faqs(_) => ListKind::Faqs,
            ListValue::BudgetRanges(_) => ListKind::BudgetRanges,
            ListValue::DeliveryOptions(_) => ListKind::DeliveryOptions,
            ListValue::ServiceOfferings(_) => ListKind::ServiceOfferings,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListValue::Logos(v) => v.len(),
            ListValue::TeamMembers(v) => v.len(),
            ListValue::FooterLinks(v) => v.len(),
            ListValue::Faqs(v) => v.len(),
            ListValue::BudgetRanges(v) => v.len(),
            ListValue::DeliveryOptions(v) => v.len(),
            ListValue::ServiceOfferings(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode `raw` as this value's kind, with `self` as the fallback
    ///
    /// Empty arrays fall back too: every list rendered on the site ships a
    /// non-empty default.
    pub fn decode_or(&self, raw: Option<&str>) -> ListValue {
        match self {
            ListValue::Logos(fb) => ListValue::Logos(decode_non_empty(raw, fb)),
            ListValue::TeamMembers(fb) => ListValue::TeamMembers(decode_non_empty(raw, fb)),
            ListValue::FooterLinks(fb) => ListValue::FooterLinks(decode_non_empty(raw, fb)),
            ListValue::Faqs(fb) => ListValue::Faqs(decode_non_empty(raw, fb)),
            ListValue::BudgetRanges(fb) => ListValue::BudgetRanges(decode_non_empty(raw, fb)),
            ListValue::DeliveryOptions(fb) => {
                ListValue::DeliveryOptions(decode_non_empty(raw, fb))
            }
            ListValue::ServiceOfferings(fb) => {
                ListValue::ServiceOfferings(decode_non_empty(raw, fb))
            }
        }
    }

    /// Decode `raw` exactly as stored, with `self` as the fallback
    ///
    /// Unlike [`decode_or`](Self::decode_or) a stored empty array stays empty.
    /// Editing starts from this view so the stored list is never padded with
    /// defaults.
    pub fn decode_stored_or(&self, raw: Option<&str>) -> ListValue {
        match self {
            ListValue::Logos(fb) => ListValue::Logos(decode(raw, fb)),
            ListValue::TeamMembers(fb) => ListValue::TeamMembers(decode(raw, fb)),
            ListValue::FooterLinks(fb) => ListValue::FooterLinks(decode(raw, fb)),
            ListValue::Faqs(fb) => ListValue::Faqs(decode(raw, fb)),
            ListValue::BudgetRanges(fb) => ListValue::BudgetRanges(decode(raw, fb)),
            ListValue::DeliveryOptions(fb) => ListValue::DeliveryOptions(decode(raw, fb)),
            ListValue::ServiceOfferings(fb) => ListValue::ServiceOfferings(decode(raw, fb)),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            ListValue::Logos(v) => encode(v),
            ListValue::TeamMembers(v) => encode(v),
            ListValue::FooterLinks(v) => encode(v),
            ListValue::Faqs(v) => encode(v),
            ListValue::BudgetRanges(v) => encode(v),
            ListValue::DeliveryOptions(v) => encode(v),
            ListValue::ServiceOfferings(v) => encode(v),
        }
    }

    /// Items as plain JSON, for rendering and API responses
    pub fn items_json(&self) -> serde_json::Value {
        let encoded = match self {
            ListValue::Logos(v) => serde_json::to_value(v),
            ListValue::TeamMembers(v) => serde_json::to_value(v),
            ListValue::FooterLinks(v) => serde_json::to_value(v),
            ListValue::Faqs(v) => serde_json::to_value(v),
            ListValue::BudgetRanges(v) => serde_json::to_value(v),
            ListValue::DeliveryOptions(v) => serde_json::to_value(v),
            ListValue::ServiceOfferings(v) => serde_json::to_value(v),
        };
        encoded.unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
    }
}

/// Typed view of one content key's value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentValue {
    Scalar(String),
    List(ListValue),
}

impl ContentValue {
    /// Storage form written back into the content map
    pub fn encode(&self) -> String {
        match self {
            ContentValue::Scalar(s) => s.clone(),
            ContentValue::List(list) => list.encode(),
        }
    }

    /// Render form: strings stay strings, lists become JSON arrays
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ContentValue::Scalar(s) => serde_json::Value::String(s.clone()),
            ContentValue::List(list) => list.items_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_logos() -> Vec<LogoItem> {
        vec![LogoItem {
            name: "Default".to_string(),
            src: "/logos/default.png".to_string(),
        }]
    }

    #[test]
    fn test_decode_single_logo() {
        let raw = r#"[{"name":"Acme","src":"/a.png"}]"#;
        let logos = decode(Some(raw), &fallback_logos());
        assert_eq!(logos.len(), 1);
        assert_eq!(logos[0].name, "Acme");
        assert_eq!(logos[0].src, "/a.png");
    }

    #[test]
    fn test_decode_round_trip() {
        let faqs = vec![
            FaqEntry {
                question: "How far ahead should we book?".to_string(),
                answer: "Eight weeks \"ideally\".".to_string(),
            },
            FaqEntry {
                question: "Virtual?".to_string(),
                answer: "Yes".to_string(),
            },
        ];
        let decoded: Vec<FaqEntry> = decode(Some(&encode(&faqs)), &[]);
        assert_eq!(decoded, faqs);
    }

    #[test]
    fn test_decode_failures_return_fallback() {
        let fallback = fallback_logos();
        for raw in ["{not json", "", "   ", "null", "42", "{}", "\"text\"", "true"] {
            assert_eq!(decode(Some(raw), &fallback), fallback, "input: {:?}", raw);
        }
        assert_eq!(decode::<LogoItem>(None, &fallback), fallback);
    }

    #[test]
    fn test_decode_shape_mismatch_returns_fallback() {
        let fallback = fallback_logos();
        let raw = r#"[{"name":"Acme"}]"#;
        assert_eq!(decode(Some(raw), &fallback), fallback);
        assert_eq!(decode(Some("[1, 2]"), &fallback), fallback);
    }

    #[test]
    fn test_decode_keeps_empty_array_but_non_empty_variant_does_not() {
        let fallback = fallback_logos();
        assert!(decode(Some("[]"), &fallback).is_empty());
        assert_eq!(decode_non_empty(Some("[]"), &fallback), fallback);
    }

    #[test]
    fn test_list_value_decode_or_keeps_kind() {
        let default = ListValue::Logos(fallback_logos());
        let decoded = default.decode_or(Some(r#"[{"name":"A","src":"a"},{"name":"B","src":"b"}]"#));
        assert_eq!(decoded.kind(), ListKind::Logos);
        assert_eq!(decoded.len(), 2);

        let broken = default.decode_or(Some("oops"));
        assert_eq!(broken, default);
    }

    #[test]
    fn test_decode_stored_or_keeps_empty_array() {
        let default = ListValue::Logos(fallback_logos());
        assert!(default.decode_stored_or(Some("[]")).is_empty());
        assert_eq!(default.decode_or(Some("[]")), default);

        assert_eq!(default.decode_stored_or(None), default);
        assert_eq!(default.decode_stored_or(Some("{not json")), default);
    }

    #[test]
    fn test_content_value_to_json() {
        let scalar = ContentValue::Scalar("Hi".to_string());
        assert_eq!(scalar.to_json(), serde_json::json!("Hi"));

        let list = ContentValue::List(ListValue::Logos(fallback_logos()));
        assert_eq!(
            list.to_json(),
            serde_json::json!([{"name": "Default", "src": "/logos/default.png"}])
        );
    }
}
