use std::str::FromStr;

use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::{
    errors::Error,
    field::{
        FieldId, JobField, NativeField, NodeAttributeField, NodeField, StorageField, VmField,
    },
    types,
};

/// Resource kind a wire attribute belongs to. Tokens are only ever
/// resolved within a single category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(serialize = "job")]
    Job,

    #[strum(serialize = "node")]
    Node,

    #[strum(serialize = "node_attribute")]
    NodeAttribute,

    #[strum(serialize = "storage")]
    Storage,

    #[strum(serialize = "vm")]
    Vm,
}

impl Category {
    pub fn all() -> impl Iterator<Item = Category> {
        Self::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn parse_name(value: &str) -> types::Result<Self> {
        Self::from_str(value).map_err(|_| Error::UnknownCategory {
            value: value.to_string(),
        })
    }

    /// Every registered field of this category, in declaration order.
    pub fn fields(self) -> Vec<FieldId> {
        match self {
            Category::Job => collect_fields::<JobField>(),
            Category::Node => collect_fields::<NodeField>(),
            Category::NodeAttribute => collect_fields::<NodeAttributeField>(),
            Category::Storage => collect_fields::<StorageField>(),
            Category::Vm => collect_fields::<VmField>(),
        }
    }
}

fn collect_fields<F: NativeField>() -> Vec<FieldId> {
    F::iter().map(Into::<FieldId>::into).collect()
}
