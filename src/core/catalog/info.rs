//! Catalog wire types, matching the backend's `/api/models` response:
//! `{ "models": { "<provider>": [ {id, name, max_tokens}, ... ] }, "default_model": string? }`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One selectable model as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    /// Raw model name (e.g. "gpt-4o"); display formatting lives in `labels`.
    pub name: String,
    pub max_tokens: u32,
}

/// A provider and its models, in the order the backend listed them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderModels {
    pub provider: String,
    pub models: Vec<ModelInfo>,
}

/// The full catalog for one fetch. Replaced wholesale on every fetch, never merged.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ModelCatalog {
    /// Provider groups in the backend's own ordering. The wire format is a JSON
    /// object; a plain map type would lose or re-sort that ordering, so the
    /// entries are collected into a Vec as they stream in.
    #[serde(rename = "models", deserialize_with = "provider_groups_in_order")]
    pub providers: Vec<ProviderModels>,
    #[serde(default)]
    pub default_model: Option<String>,
}

impl ModelCatalog {
    /// Total number of models across all providers.
    pub fn model_count(&self) -> usize {
        self.providers.iter().map(|g| g.models.len()).sum()
    }

    /// True when no provider lists any model.
    pub fn is_empty(&self) -> bool {
        self.model_count() == 0
    }
}

fn provider_groups_in_order<'de, D>(deserializer: D) -> Result<Vec<ProviderModels>, D::Error>
where
    D: Deserializer<'de>,
{
    struct GroupVisitor;

    impl<'de> Visitor<'de> for GroupVisitor {
        type Value = Vec<ProviderModels>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of provider name to a list of models")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((provider, models)) = map.next_entry::<String, Vec<ModelInfo>>()? {
                groups.push(ProviderModels { provider, models });
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(GroupVisitor)
}
