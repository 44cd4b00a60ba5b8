//! Layer commands issued by the editor's layers panel and context menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{order, DeckError, DeckResult, LayerId, LayerStack, Layered};

/// One of the four z-order operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerCommand {
    /// Swap with the layer above.
    BringForward,
    /// Move to the top.
    BringToFront,
    /// Swap with the layer below.
    SendBackward,
    /// Move to the bottom.
    SendToBack,
}

impl LayerCommand {
    /// All commands, in menu order.
    pub const ALL: [Self; 4] = [
        Self::BringForward,
        Self::BringToFront,
        Self::SendBackward,
        Self::SendToBack,
    ];

    /// Canonical `snake_case` name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BringForward => "bring_forward",
            Self::BringToFront => "bring_to_front",
            Self::SendBackward => "send_backward",
            Self::SendToBack => "send_to_back",
        }
    }

    /// Whether repeating the command after one application changes nothing.
    #[must_use]
    pub const fn converges(self) -> bool {
        matches!(self, Self::BringToFront | Self::SendToBack)
    }

    /// Apply to a sequence, returning the reordered copy.
    #[must_use]
    pub fn apply<T: Layered + Clone>(self, layers: &[T], id: &LayerId) -> Vec<T> {
        match self {
            Self::BringForward => order::bring_forward(layers, id),
            Self::BringToFront => order::bring_to_front(layers, id),
            Self::SendBackward => order::send_backward(layers, id),
            Self::SendToBack => order::send_to_back(layers, id),
        }
    }

    /// Apply to a caller-owned stack. Returns whether the order changed.
    pub fn apply_to_stack(self, stack: &mut LayerStack, id: &LayerId) -> bool {
        match self {
            Self::BringForward => stack.bring_forward(id),
            Self::BringToFront => stack.bring_to_front(id),
            Self::SendBackward => stack.send_backward(id),
            Self::SendToBack => stack.send_to_back(id),
        }
    }
}

impl fmt::Display for LayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerCommand {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "forward" | "bring_forward" => Ok(Self::BringForward),
            "front" | "bring_to_front" => Ok(Self::BringToFront),
            "backward" | "send_backward" => Ok(Self::SendBackward),
            "back" | "send_to_back" => Ok(Self::SendToBack),
            _ => Err(DeckError::UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layer;

    #[test]
    fn test_parse_short_and_long_names() {
        assert_eq!("front".parse::<LayerCommand>().ok(), Some(LayerCommand::BringToFront));
        assert_eq!("Send-To-Back".parse::<LayerCommand>().ok(), Some(LayerCommand::SendToBack));
        for command in LayerCommand::ALL {
            assert_eq!(command.name().parse::<LayerCommand>().ok(), Some(command));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = "sideways".parse::<LayerCommand>().unwrap_err();
        assert!(matches!(err, DeckError::UnknownCommand(name) if name == "sideways"));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&LayerCommand::BringToFront).expect("serialize");
        assert_eq!(json, "\"bring_to_front\"");
        let parsed: LayerCommand = serde_json::from_str("\"send_backward\"").expect("parse");
        assert_eq!(parsed, LayerCommand::SendBackward);
    }

    #[test]
    fn test_apply_matches_stack_dispatch() {
        let layers: Vec<Layer> = ["A", "B", "C", "D"].into_iter().map(Layer::new).collect();
        let target = LayerId::from("B");

        for command in LayerCommand::ALL {
            let copied = command.apply(&layers, &target);
            let mut stack = LayerStack::from_ordered(layers.clone());
            assert!(command.apply_to_stack(&mut stack, &target));
            assert_eq!(stack.layers(), copied.as_slice(), "{command} diverged");
        }
    }

    #[test]
    fn test_only_converging_commands_reach_fixed_point() {
        let layers: Vec<Layer> = ["A", "B", "C", "D", "E"].into_iter().map(Layer::new).collect();
        let target = LayerId::from("C");

        for command in LayerCommand::ALL {
            let once = command.apply(&layers, &target);
            let twice = command.apply(&once, &target);
            assert_ne!(once, layers, "{command} should move the middle layer");
            assert_eq!(once == twice, command.converges(), "{command}");
        }
    }
}
