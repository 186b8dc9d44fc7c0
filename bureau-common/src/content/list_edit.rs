//! Structured list editing
//!
//! The capability set shared by every list editor control: add, edit,
//! remove and reorder. Items arrive as untyped JSON and are checked against
//! the list's entity shape before anything changes.

use super::codec::ListValue;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One edit applied to a structured list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ListEdit {
    /// Append an item
    Add { item: serde_json::Value },
    /// Replace the item at `index`
    Update { index: usize, item: serde_json::Value },
    Remove { index: usize },
    /// Move the item at `from` so it ends up at `to`
    Move { from: usize, to: usize },
}

fn parse_item<T: DeserializeOwned>(item: serde_json::Value) -> Result<T> {
    serde_json::from_value(item)
        .map_err(|e| Error::InvalidInput(format!("Item does not fit list entity shape: {}", e)))
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::InvalidInput(format!(
            "List index {} out of range (length {})",
            index, len
        )));
    }
    Ok(())
}

/// Apply `edit` to a typed list; on error the list is unchanged
pub fn apply_edit<T: DeserializeOwned>(items: &mut Vec<T>, edit: ListEdit) -> Result<()> {
    match edit {
        ListEdit::Add { item } => {
            items.push(parse_item(item)?);
        }
        ListEdit::Update { index, item } => {
            check_index(index, items.len())?;
            items[index] = parse_item(item)?;
        }
        ListEdit::Remove { index } => {
            check_index(index, items.len())?;
            items.remove(index);
        }
        ListEdit::Move { from, to } => {
            check_index(from, items.len())?;
            check_index(to, items.len())?;
            let item = items.remove(from);
            items.insert(to, item);
        }
    }
    Ok(())
}

impl ListValue {
    pub fn apply(&mut self, edit: ListEdit) -> Result<()> {
        match self {
            ListValue::Logos(v) => apply_edit(v, edit),
            ListValue::TeamMembers(v) => apply_edit(v, edit),
            ListValue::FooterLinks(v) => apply_edit(v, edit),
            ListValue::Faqs(v) => apply_edit(v, edit),
            ListValue::BudgetRanges(v) => apply_edit(v, edit),
            ListValue::DeliveryOptions(v) => apply_edit(v, edit),
            ListValue::ServiceOfferings(v) => apply_edit(v, edit),
        }
    }
}
