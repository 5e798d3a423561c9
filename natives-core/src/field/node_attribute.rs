use std::{fmt, iter};

use strum::IntoEnumIterator;

use crate::category::Category;
use super::NativeField;

/// Per-node attribute keys. Every key this category once carried has been
/// retired, so nothing resolves here; the category stays so decoders can
/// keep addressing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttributeField {}

impl NativeField for NodeAttributeField {
    const CATEGORY: Category = Category::NodeAttribute;
}

impl IntoEnumIterator for NodeAttributeField {
    type Iterator = iter::Empty<NodeAttributeField>;

    fn iter() -> Self::Iterator {
        iter::empty()
    }
}

impl From<NodeAttributeField> for &'static str {
    fn from(value: NodeAttributeField) -> Self {
        match value {}
    }
}

impl fmt::Display for NodeAttributeField {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
