//! # Deck CLI
//!
//! Command-line host for the deck canvas core.
//!
//! ## Components
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `CliConfig` - Resolved reference canvas and the action to run
//! - `run` - Executes an action and returns the JSON to print

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use deck_core::{
    compute_scale, DeckDocument, Dimensions, LayerCommand, LayerId, DEFAULT_REFERENCE,
};
use serde::Serialize;

/// Command-line arguments for deck.
#[derive(Debug, Clone, Parser)]
#[command(name = "deck")]
#[command(about = "Pitch deck canvas scaling and layer ordering")]
#[command(version)]
pub struct CliArgs {
    /// Reference canvas size the deck is designed at (e.g. 1600x800)
    #[arg(long, global = true, env = "DECK_REFERENCE")]
    pub reference: Option<Dimensions>,

    /// Action to run
    #[command(subcommand)]
    pub action: Action,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Compute the uniform scale for a measured container
    Scale {
        /// Measured container size (e.g. 1280x720); omit when unmeasured
        #[arg(long)]
        observed: Option<Dimensions>,
    },
    /// Apply a z-order command to a layer in a deck document
    Reorder {
        /// Path to the deck document JSON
        #[arg(long)]
        file: PathBuf,

        /// Layer ID to move
        #[arg(long)]
        id: String,

        /// One of: forward, front, backward, back
        #[arg(long)]
        command: LayerCommand,

        /// Write the reordered document back to the file
        #[arg(long)]
        write: bool,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Reference canvas size the `scale` action fits.
    pub reference: Dimensions,
    /// Action to run.
    pub action: Action,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            reference: args.reference.unwrap_or(DEFAULT_REFERENCE),
            action: args.action,
        }
    }
}

/// Output of the `scale` action.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleReport {
    /// Uniform scale factor.
    pub scale: f32,
    /// Reference canvas size after scaling.
    pub fitted: Dimensions,
    /// Offset centring the fitted canvas in the container.
    pub offset: [f32; 2],
}

impl ScaleReport {
    /// Build a report for a possibly unmeasured container.
    #[must_use]
    pub fn new(observed: Option<Dimensions>, reference: Dimensions) -> Self {
        let result = compute_scale(observed, reference);
        let (left, top) = observed
            .filter(|observed| observed.is_known())
            .map_or((0.0, 0.0), |observed| {
                result.letterbox_offset(observed, reference)
            });
        Self {
            scale: result.scale,
            fitted: result.apply(reference),
            offset: [left, top],
        }
    }
}

/// Execute the configured action and return the JSON to print.
///
/// # Errors
///
/// Returns an error if the deck document cannot be read, parsed, or written.
pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    match &config.action {
        Action::Scale { observed } => {
            let report = ScaleReport::new(*observed, config.reference);
            tracing::info!(
                scale = report.scale,
                reference = %config.reference,
                "Computed canvas scale"
            );
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Action::Reorder {
            file,
            id,
            command,
            write,
        } => reorder(file, &LayerId::from(id.as_str()), *command, *write),
    }
}

fn reorder(
    file: &Path,
    id: &LayerId,
    command: LayerCommand,
    write: bool,
) -> anyhow::Result<String> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read deck document {}", file.display()))?;
    let document = DeckDocument::from_json(&json)
        .with_context(|| format!("Failed to parse deck document {}", file.display()))?;
    let reference = document.reference;

    let mut stack = document.into_stack();
    if command.apply_to_stack(&mut stack, id) {
        stack.normalize_z_indices();
        tracing::info!(%id, %command, "Reordered layer");
    } else {
        tracing::warn!(%id, %command, "Layer not moved");
    }

    let output = DeckDocument::from_stack(reference, &stack).to_json()?;
    if write {
        std::fs::write(file, &output)
            .with_context(|| format!("Failed to write deck document {}", file.display()))?;
        tracing::debug!("Wrote {}", file.display());
    }
    Ok(output)
}
