//! Token metadata documents for minted bonsai.

use super::MintingDomainError;
use crate::garden::domain::{GrowthStage, Species};
use crate::tree::domain::TreeId;
use minijinja::Environment;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Template for the pinned token metadata document.
///
/// The image field names the model asset the garden renders for the tree,
/// keyed `{specimen}-{stage}.glb`.
const METADATA_TEMPLATE: &str = r#"{
  "name": {{ name | tojson }},
  "description": {{ description | tojson }},
  "image": {{ image | tojson }},
  "attributes": [
    {"trait_type": "Species", "value": {{ species | tojson }}},
    {"trait_type": "Growth Stage", "value": {{ stage | tojson }}},
    {"trait_type": "Task Tree", "value": {{ tree_id | tojson }}}
  ]
}"#;

/// Parsed token metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenMetadata {
    /// Display name of the token.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Model asset reference rendered for the token.
    pub image: String,
    /// Trait attributes in marketplace convention.
    pub attributes: Vec<TokenAttribute>,
}

/// One trait attribute of a token metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenAttribute {
    /// Attribute name.
    pub trait_type: String,
    /// Attribute value.
    pub value: String,
}

impl TokenMetadata {
    /// Parses a rendered metadata document.
    ///
    /// # Errors
    ///
    /// Returns [`MintingDomainError::InvalidDocument`] when the document
    /// does not match the expected shape.
    pub fn parse(document: &str) -> Result<Self, MintingDomainError> {
        serde_json::from_str(document).map_err(|err| MintingDomainError::InvalidDocument {
            reason: err.to_string(),
        })
    }
}

/// Renders the metadata document for a tree about to be minted.
///
/// The output is validated by parsing it back before it is handed to the
/// pinning layer.
///
/// # Errors
///
/// Returns [`MintingDomainError::TemplateRender`] when the template fails to
/// render and [`MintingDomainError::InvalidDocument`] when the rendered
/// output does not parse back into a metadata document.
pub fn render_token_metadata(
    title: &str,
    species: Species,
    stage: GrowthStage,
    tree_id: &TreeId,
) -> Result<String, MintingDomainError> {
    let environment = Environment::new();
    let context = build_metadata_context(title, species, stage, tree_id);
    let document = environment
        .render_str(METADATA_TEMPLATE, context)
        .map_err(|error| MintingDomainError::TemplateRender {
            reason: error.to_string(),
        })?;
    TokenMetadata::parse(&document)?;
    Ok(document)
}

fn build_metadata_context(
    title: &str,
    species: Species,
    stage: GrowthStage,
    tree_id: &TreeId,
) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert(
        "name".to_owned(),
        Value::String(format!("BloomBonsai: {title}")),
    );
    context.insert(
        "description".to_owned(),
        Value::String(format!(
            "A bonsai that grows as \"{title}\" is completed."
        )),
    );
    context.insert(
        "image".to_owned(),
        Value::String(format!("{}-{}.glb", species.as_str(), stage.as_str())),
    );
    context.insert(
        "species".to_owned(),
        Value::String(species.as_str().to_owned()),
    );
    context.insert("stage".to_owned(), Value::String(stage.as_str().to_owned()));
    context.insert(
        "tree_id".to_owned(),
        Value::String(tree_id.as_str().to_owned()),
    );
    context
}
