use crate::{
    category::Category,
    field::{
        FieldId, JobField, NativeField, NodeAttributeField, NodeField, StorageField, VmField,
    },
};

/// Resolves a wire token within `category`. Unknown, empty and absent
/// tokens all yield `None`.
pub fn resolve<'a>(category: Category, token: impl Into<Option<&'a str>>) -> Option<FieldId> {
    let token = token.into();

    match category {
        Category::Job => JobField::parse_wiki_attribute(token).map(FieldId::from),
        Category::Node => NodeField::parse_wiki_attribute(token).map(FieldId::from),
        Category::NodeAttribute => {
            NodeAttributeField::parse_wiki_attribute(token).map(FieldId::from)
        }
        Category::Storage => StorageField::parse_wiki_attribute(token).map(FieldId::from),
        Category::Vm => VmField::parse_wiki_attribute(token).map(FieldId::from),
    }
}

pub fn encode(id: FieldId) -> &'static str {
    id.wiki_key()
}

pub fn display_encode(id: FieldId) -> String {
    id.wiki_key_display()
}
