use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    category::Category, config, constants::MetricLabel, errors::Error, field::FieldId, metric,
    registry, types,
};

/// What to do with an attribute the registry does not recognize.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnknownAttributePolicy {
    #[default]
    Ignore,
    Warn,
    Reject,
}

/// Resolves decoded attribute names, applying the configured policy to the
/// ones no category registers.
#[derive(Debug, Clone, Default)]
pub struct AttributeResolver {
    default_policy: UnknownAttributePolicy,
    category_policies: HashMap<Category, UnknownAttributePolicy>,
}

impl AttributeResolver {
    pub fn new(config: &config::resolver::Resolver) -> Self {
        Self {
            default_policy: config.unknown_attribute_policy,
            category_policies: config.category_policies.clone(),
        }
    }

    pub fn policy(&self, category: Category) -> UnknownAttributePolicy {
        self.category_policies
            .get(&category)
            .copied()
            .unwrap_or(self.default_policy)
    }

    pub fn resolve<'a>(
        &self,
        category: Category,
        attribute: impl Into<Option<&'a str>>,
    ) -> types::Result<Option<FieldId>> {
        let attribute = attribute.into();

        if let Some(id) = registry::resolve(category, attribute) {
            record_outcome(category, MetricLabel::Resolved);

            return Ok(Some(id));
        }

        record_outcome(category, MetricLabel::Unknown);

        let attribute = attribute.unwrap_or_default();

        match self.policy(category) {
            UnknownAttributePolicy::Ignore => {
                tracing::debug!(
                    "ignoring unrecognized attribute '{}' in category '{}'",
                    attribute,
                    category
                );

                Ok(None)
            }
            UnknownAttributePolicy::Warn => {
                tracing::warn!(
                    "unrecognized attribute '{}' in category '{}'",
                    attribute,
                    category
                );

                Ok(None)
            }
            UnknownAttributePolicy::Reject => Err(Error::UnknownAttribute {
                category,
                attribute: attribute.to_string(),
            }),
        }
    }
}

fn record_outcome(category: Category, outcome: MetricLabel) {
    let outcome = outcome.to_string();

    metric::attribute_resolution_count_metric()
        .with_label_values(&[category.name(), outcome.as_str()])
        .inc();
}
