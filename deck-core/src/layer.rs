//! Deck layers and the caller-owned stack that orders them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::order;

/// Opaque identifier for a layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    /// Create a new unique layer ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can be placed in a z-ordered sequence.
pub trait Layered {
    /// Identifier used to find the item in its sequence.
    fn layer_id(&self) -> &LayerId;
}

impl Layered for LayerId {
    fn layer_id(&self) -> &LayerId {
        self
    }
}

/// A visual layer on a deck slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique identifier.
    pub id: LayerId,
    /// Stacking key; higher paints later.
    #[serde(default)]
    pub z_index: i32,
    /// Human-readable label shown in the layers panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the layer is painted.
    #[serde(default = "Layer::default_visible")]
    pub visible: bool,
}

impl Layer {
    /// Create a visible, unnamed layer with z-index 0.
    #[must_use]
    pub fn new(id: impl Into<LayerId>) -> Self {
        Self {
            id: id.into(),
            z_index: 0,
            name: None,
            visible: true,
        }
    }

    /// Set the z-index.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    const fn default_visible() -> bool {
        true
    }
}

impl Layered for Layer {
    fn layer_id(&self) -> &LayerId {
        &self.id
    }
}

/// Layers in paint order: index 0 is painted first and sits at the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap layers that are already in paint order.
    #[must_use]
    pub fn from_ordered(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Order layers by `z_index`, keeping input order among equal keys.
    #[must_use]
    pub fn from_z_indexed(mut layers: Vec<Layer>) -> Self {
        layers.sort_by_key(|layer| layer.z_index);
        Self { layers }
    }

    /// Layers bottom to top.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Consume the stack, returning layers bottom to top.
    #[must_use]
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    /// Layer IDs bottom to top.
    pub fn ids(&self) -> impl Iterator<Item = &LayerId> {
        self.layers.iter().map(|layer| &layer.id)
    }

    /// Get a layer by ID.
    #[must_use]
    pub fn get(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| &layer.id == id)
    }

    /// Paint position of a layer, 0 being the bottom.
    #[must_use]
    pub fn position(&self, id: &LayerId) -> Option<usize> {
        order::position_of(&self.layers, id)
    }

    /// The layer painted last.
    #[must_use]
    pub fn topmost(&self) -> Option<&Layer> {
        self.layers.last()
    }

    /// The layer painted first.
    #[must_use]
    pub fn bottommost(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// Get the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Swap a layer with the one above it. Returns whether the order changed.
    pub fn bring_forward(&mut self, id: &LayerId) -> bool {
        order::bring_forward_in_place(&mut self.layers, id)
    }

    /// Move a layer to the top. Returns whether the order changed.
    pub fn bring_to_front(&mut self, id: &LayerId) -> bool {
        order::bring_to_front_in_place(&mut self.layers, id)
    }

    /// Swap a layer with the one below it. Returns whether the order changed.
    pub fn send_backward(&mut self, id: &LayerId) -> bool {
        order::send_backward_in_place(&mut self.layers, id)
    }

    /// Move a layer to the bottom. Returns whether the order changed.
    pub fn send_to_back(&mut self, id: &LayerId) -> bool {
        order::send_to_back_in_place(&mut self.layers, id)
    }

    /// Rewrite every `z_index` to match its paint position.
    pub fn normalize_z_indices(&mut self) {
        for (z_index, layer) in (0..).zip(self.layers.iter_mut()) {
            layer.z_index = z_index;
        }
    }
}

impl From<Vec<Layer>> for LayerStack {
    fn from(layers: Vec<Layer>) -> Self {
        Self::from_ordered(layers)
    }
}

impl FromIterator<Layer> for LayerStack {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self::from_ordered(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(ids: &[&str]) -> LayerStack {
        ids.iter().map(|&id| Layer::new(id)).collect()
    }

    fn order(stack: &LayerStack) -> Vec<&str> {
        stack.ids().map(LayerId::as_str).collect()
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(LayerId::new(), LayerId::new());
    }

    #[test]
    fn test_stack_methods_report_change() {
        let mut layers = stack(&["A", "B", "C"]);
        let a = LayerId::from("A");

        assert!(layers.bring_to_front(&a));
        assert_eq!(order(&layers), ["B", "C", "A"]);
        assert!(!layers.bring_to_front(&a));
        assert!(!layers.bring_forward(&a));

        assert!(layers.send_backward(&a));
        assert_eq!(order(&layers), ["B", "A", "C"]);

        assert!(layers.send_to_back(&a));
        assert_eq!(order(&layers), ["A", "B", "C"]);
        assert!(!layers.send_to_back(&a));
    }

    #[test]
    fn test_missing_layer_is_noop() {
        let mut layers = stack(&["A", "B"]);
        let ghost = LayerId::from("ghost");
        assert!(!layers.bring_forward(&ghost));
        assert!(!layers.send_to_back(&ghost));
        assert_eq!(order(&layers), ["A", "B"]);
    }

    #[test]
    fn test_from_z_indexed_is_stable_on_ties() {
        let layers = LayerStack::from_z_indexed(vec![
            Layer::new("title").with_z_index(5),
            Layer::new("background").with_z_index(-1),
            Layer::new("chart").with_z_index(5),
            Layer::new("logo").with_z_index(0),
        ]);
        assert_eq!(order(&layers), ["background", "logo", "title", "chart"]);
    }

    #[test]
    fn test_normalize_z_indices_follows_paint_order() {
        let mut layers = LayerStack::from_z_indexed(vec![
            Layer::new("A").with_z_index(10),
            Layer::new("B").with_z_index(20),
        ]);
        layers.send_to_back(&LayerId::from("B"));
        layers.normalize_z_indices();

        let z: Vec<_> = layers.layers().iter().map(|l| (l.id.as_str(), l.z_index)).collect();
        assert_eq!(z, [("B", 0), ("A", 1)]);
    }

    #[test]
    fn test_position_and_extremes() {
        let layers = stack(&["A", "B", "C"]);
        assert_eq!(layers.position(&LayerId::from("B")), Some(1));
        assert_eq!(layers.position(&LayerId::from("Z")), None);
        assert_eq!(layers.bottommost().map(|l| l.id.as_str()), Some("A"));
        assert_eq!(layers.topmost().map(|l| l.id.as_str()), Some("C"));
        assert_eq!(layers.len(), 3);
    }

    #[test]
    fn test_get_and_into_layers_follow_reorders() {
        let mut layers = LayerStack::from_ordered(vec![
            Layer::new("A").with_name("Backdrop"),
            Layer::new("B"),
        ]);
        let a = LayerId::from("A");

        assert_eq!(layers.get(&a).and_then(|l| l.name.as_deref()), Some("Backdrop"));
        assert!(layers.get(&LayerId::from("Z")).is_none());

        layers.bring_to_front(&a);
        let owned = layers.into_layers();
        let ids: Vec<_> = owned.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
        assert_eq!(owned[1].name.as_deref(), Some("Backdrop"));
    }

    #[test]
    fn test_layer_serde_defaults() {
        let layer: Layer = serde_json::from_str(r#"{"id":"A"}"#).expect("should parse");
        assert_eq!(layer, Layer::new("A"));

        let json = serde_json::to_string(&Layer::new("B").with_name("Logo")).expect("serialize");
        assert_eq!(json, r#"{"id":"B","z_index":0,"name":"Logo","visible":true}"#);
    }
}
