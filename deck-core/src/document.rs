//! Serialized deck representation shared by the CLI and editor hosts.

use serde::{Deserialize, Serialize};

use crate::{DeckError, DeckResult, Dimensions, Layer, LayerStack};

/// Canonical deck document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckDocument {
    /// Design size the deck was authored at.
    #[serde(default)]
    pub reference: Dimensions,
    /// Layers in paint order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl DeckDocument {
    /// Build a document from a runtime stack.
    #[must_use]
    pub fn from_stack(reference: Dimensions, stack: &LayerStack) -> Self {
        Self {
            reference,
            layers: stack.layers().to_vec(),
        }
    }

    /// Materialize the layers as a stack ordered by `z_index`.
    ///
    /// Layers with equal z-indices keep their document order.
    #[must_use]
    pub fn into_stack(self) -> LayerStack {
        LayerStack::from_z_indexed(self.layers)
    }

    /// Serialize the document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self).map_err(DeckError::Serialization)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or does not describe a deck.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        serde_json::from_str(json).map_err(DeckError::Serialization)
    }
}
