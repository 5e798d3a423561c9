use std::collections::HashMap;

use serde::Deserialize;

use crate::{category::Category, resolver::UnknownAttributePolicy};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Resolver {
    #[serde(default)]
    pub unknown_attribute_policy: UnknownAttributePolicy,

    #[serde(default)]
    pub category_policies: HashMap<Category, UnknownAttributePolicy>,
}
