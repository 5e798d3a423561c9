mod job;
mod node;
mod node_attribute;
mod storage;
mod vm;

use std::{fmt, hash::Hash};

use strum::IntoEnumIterator;

use crate::category::Category;

pub use self::{
    job::JobField, node::NodeField, node_attribute::NodeAttributeField, storage::StorageField,
    vm::VmField,
};

/// A closed set of wire attributes for one category, each variant bound to
/// its canonical lowercase wiki key.
///
/// Lookup is a linear scan in declaration order, so if two variants ever
/// shared a key the first one declared would win.
pub trait NativeField:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + IntoEnumIterator
    + Into<&'static str>
    + Into<FieldId>
    + 'static
{
    const CATEGORY: Category;

    fn wiki_key(self) -> &'static str {
        Into::<&'static str>::into(self)
    }

    fn wiki_key_display(self) -> String {
        self.wiki_key().to_ascii_uppercase()
    }

    /// Matches `attribute` against the registered keys ignoring ASCII case.
    /// Absent and empty attributes never match.
    fn parse_wiki_attribute<'a>(attribute: impl Into<Option<&'a str>>) -> Option<Self> {
        let attribute = attribute.into().filter(|value| !value.is_empty())?;

        Self::iter().find(|field| field.wiki_key().eq_ignore_ascii_case(attribute))
    }
}

/// A recognized attribute of any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Job(JobField),
    Node(NodeField),
    NodeAttribute(NodeAttributeField),
    Storage(StorageField),
    Vm(VmField),
}

impl FieldId {
    pub fn category(&self) -> Category {
        match self {
            FieldId::Job(_) => JobField::CATEGORY,
            FieldId::Node(_) => NodeField::CATEGORY,
            FieldId::NodeAttribute(_) => NodeAttributeField::CATEGORY,
            FieldId::Storage(_) => StorageField::CATEGORY,
            FieldId::Vm(_) => VmField::CATEGORY,
        }
    }

    pub fn wiki_key(&self) -> &'static str {
        match *self {
            FieldId::Job(field) => field.wiki_key(),
            FieldId::Node(field) => field.wiki_key(),
            FieldId::NodeAttribute(field) => field.wiki_key(),
            FieldId::Storage(field) => field.wiki_key(),
            FieldId::Vm(field) => field.wiki_key(),
        }
    }

    pub fn wiki_key_display(&self) -> String {
        self.wiki_key().to_ascii_uppercase()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wiki_key())
    }
}

macro_rules! impl_from_field {
    ($field:ty, $variant:ident) => {
        impl From<$field> for FieldId {
            fn from(value: $field) -> Self {
                FieldId::$variant(value)
            }
        }
    };
}

impl_from_field!(JobField, Job);
impl_from_field!(NodeField, Node);
impl_from_field!(NodeAttributeField, NodeAttribute);
impl_from_field!(StorageField, Storage);
impl_from_field!(VmField, Vm);
