//! Z-order operations over a paint-ordered sequence.
//!
//! Sequences are bottom to top: index 0 is painted first. Every operation
//! targets the first item carrying the given ID and is a no-op when the ID is
//! absent, the item already sits at the relevant end, or the move would only
//! trade places with items carrying the same ID. `bring_to_front` and
//! `send_to_back` converge after one call; `bring_forward` and
//! `send_backward` move one step per call.
//!
//! The free functions return a new `Vec` and leave the input untouched. The
//! `*_in_place` variants mutate a caller-owned `Vec` and report whether the
//! order changed.

use crate::{LayerId, Layered};

/// Paint position of the first item with the given ID.
#[must_use]
pub fn position_of<T: Layered>(layers: &[T], id: &LayerId) -> Option<usize> {
    layers.iter().position(|layer| layer.layer_id() == id)
}

/// Swap the target with the item immediately above it.
#[must_use]
pub fn bring_forward<T: Layered + Clone>(layers: &[T], id: &LayerId) -> Vec<T> {
    let mut reordered = layers.to_vec();
    bring_forward_in_place(&mut reordered, id);
    reordered
}

/// Move the target to the top of the sequence.
#[must_use]
pub fn bring_to_front<T: Layered + Clone>(layers: &[T], id: &LayerId) -> Vec<T> {
    let mut reordered = layers.to_vec();
    bring_to_front_in_place(&mut reordered, id);
    reordered
}

/// Swap the target with the item immediately below it.
#[must_use]
pub fn send_backward<T: Layered + Clone>(layers: &[T], id: &LayerId) -> Vec<T> {
    let mut reordered = layers.to_vec();
    send_backward_in_place(&mut reordered, id);
    reordered
}

/// Move the target to the bottom of the sequence.
#[must_use]
pub fn send_to_back<T: Layered + Clone>(layers: &[T], id: &LayerId) -> Vec<T> {
    let mut reordered = layers.to_vec();
    send_to_back_in_place(&mut reordered, id);
    reordered
}

/// In-place [`bring_forward`]. Returns whether the order changed.
pub fn bring_forward_in_place<T: Layered>(layers: &mut [T], id: &LayerId) -> bool {
    match position_of(layers, id) {
        Some(index) if index + 1 < layers.len() && layers[index + 1].layer_id() != id => {
            layers.swap(index, index + 1);
            tracing::debug!(%id, from = index, to = index + 1, "Brought layer forward");
            true
        }
        _ => {
            tracing::trace!(%id, "Bring forward is a no-op");
            false
        }
    }
}

/// In-place [`bring_to_front`]. Returns whether the order changed.
pub fn bring_to_front_in_place<T: Layered>(layers: &mut Vec<T>, id: &LayerId) -> bool {
    match position_of(layers, id) {
        Some(index) if layers[index + 1..].iter().any(|layer| layer.layer_id() != id) => {
            let layer = layers.remove(index);
            layers.push(layer);
            tracing::debug!(%id, from = index, to = layers.len() - 1, "Brought layer to front");
            true
        }
        _ => {
            tracing::trace!(%id, "Bring to front is a no-op");
            false
        }
    }
}

/// In-place [`send_backward`]. Returns whether the order changed.
pub fn send_backward_in_place<T: Layered>(layers: &mut [T], id: &LayerId) -> bool {
    match position_of(layers, id) {
        Some(index) if index > 0 => {
            layers.swap(index, index - 1);
            tracing::debug!(%id, from = index, to = index - 1, "Sent layer backward");
            true
        }
        _ => {
            tracing::trace!(%id, "Send backward is a no-op");
            false
        }
    }
}

/// In-place [`send_to_back`]. Returns whether the order changed.
pub fn send_to_back_in_place<T: Layered>(layers: &mut Vec<T>, id: &LayerId) -> bool {
    match position_of(layers, id) {
        Some(index) if index > 0 => {
            let layer = layers.remove(index);
            layers.insert(0, layer);
            tracing::debug!(%id, from = index, to = 0, "Sent layer to back");
            true
        }
        _ => {
            tracing::trace!(%id, "Send to back is a no-op");
            false
        }
    }
}
