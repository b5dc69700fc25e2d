use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Field, SlotValue};

/// Committed slot values for one underwriting session, ordered by field declaration.
///
/// Only the validation pipeline writes to the store, so every value held here has
/// already passed its field's validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotStore {
    slots: BTreeMap<Field, SlotValue>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&SlotValue> {
        self.slots.get(&field)
    }

    pub fn number(&self, field: Field) -> Option<f64> {
        self.get(field).and_then(SlotValue::as_number)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(SlotValue::as_text)
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.slots.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Committed slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &SlotValue)> {
        self.slots.iter().map(|(field, value)| (*field, value))
    }

    /// First field in collection order that has no committed value.
    pub fn next_unset(&self) -> Option<Field> {
        Field::collection_order()
            .into_iter()
            .find(|field| !self.is_set(*field))
    }

    pub fn view(&self) -> SlotStoreView {
        SlotStoreView {
            slots: Field::ordered()
                .into_iter()
                .map(|field| (field, self.get(field).cloned()))
                .collect(),
        }
    }

    pub(crate) fn commit(&mut self, field: Field, value: SlotValue) {
        self.slots.insert(field, value);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

/// Serializable snapshot listing every field, with `null` for unset slots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotStoreView {
    #[serde(flatten)]
    pub slots: BTreeMap<Field, Option<SlotValue>>,
}
