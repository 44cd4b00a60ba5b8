//! # Deck Core
//!
//! Canvas logic for the pitch deck editor: fitting the fixed design canvas
//! into whatever space the host measures, and restacking slide layers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  deck-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Scaling         │  Layer Order             │
//! │  - Dimensions    │  - LayerStack            │
//! │  - Uniform fit   │  - Forward / to front    │
//! │  - Letterboxing  │  - Backward / to back    │
//! ├─────────────────────────────────────────────┤
//! │  Commands        │  Documents               │
//! │  - LayerCommand  │  - DeckDocument JSON     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Both halves are pure and synchronous. The host owns its layer state and
//! applies at most one reorder at a time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod document;
pub mod error;
pub mod layer;
pub mod order;
pub mod scale;

pub use command::LayerCommand;
pub use document::DeckDocument;
pub use error::{DeckError, DeckResult};
pub use layer::{Layer, LayerId, LayerStack, Layered};
pub use order::{bring_forward, bring_to_front, send_backward, send_to_back};
pub use scale::{compute_scale, Dimensions, ScaleResult, DEFAULT_REFERENCE};

/// Deck core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
