use crate::category::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // attribute errors
    #[error("unrecognized attribute '{attribute}' in category '{category}'")]
    UnknownAttribute {
        category: Category,
        attribute: String,
    },

    // category errors
    #[error("unrecognized category name '{value}'")]
    UnknownCategory { value: String },
}
