//! Uniform scaling of the fixed reference canvas into a measured container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DeckError, DeckResult};

/// Design size every deck is authored at.
pub const DEFAULT_REFERENCE: Dimensions = Dimensions {
    width: 1600.0,
    height: 800.0,
};

/// Width and height in pixels.
///
/// A dimension that is zero, negative or not finite counts as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Dimensions {
    /// Create dimensions from a width and height.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are usable as a divisor or dividend.
    #[must_use]
    pub fn is_known(self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        DEFAULT_REFERENCE
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = DeckError;

    /// Parse `WIDTHxHEIGHT`, e.g. `1600x800`.
    fn from_str(s: &str) -> DeckResult<Self> {
        let invalid = || DeckError::InvalidDimensions(s.to_string());
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = width.trim().parse::<f32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<f32>().map_err(|_| invalid())?;
        Ok(Self::new(width, height))
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// A single multiplier applied equally to both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleResult {
    /// Uniform scale factor.
    pub scale: f32,
}

impl ScaleResult {
    /// The identity scale used when the container has not been measured.
    pub const IDENTITY: Self = Self { scale: 1.0 };

    /// Size of `reference` after scaling.
    #[must_use]
    pub fn apply(self, reference: Dimensions) -> Dimensions {
        Dimensions::new(reference.width * self.scale, reference.height * self.scale)
    }

    /// Offset that centres the scaled reference inside `observed`.
    ///
    /// Zero on an axis where the scaled canvas fills or exceeds the container.
    #[must_use]
    pub fn letterbox_offset(self, observed: Dimensions, reference: Dimensions) -> (f32, f32) {
        let fitted = self.apply(reference);
        let left = ((observed.width - fitted.width) / 2.0).max(0.0);
        let top = ((observed.height - fitted.height) / 2.0).max(0.0);
        (left, top)
    }
}

impl Default for ScaleResult {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compute the uniform scale that fits `reference` entirely inside `observed`.
///
/// Returns [`ScaleResult::IDENTITY`] when `observed` is missing or either of
/// its dimensions is unknown, and likewise for a degenerate `reference`.
#[must_use]
pub fn compute_scale(observed: Option<Dimensions>, reference: Dimensions) -> ScaleResult {
    let Some(observed) = observed.filter(|observed| observed.is_known()) else {
        return ScaleResult::IDENTITY;
    };
    if !reference.is_known() {
        tracing::trace!(%reference, "Reference canvas has no usable size");
        return ScaleResult::IDENTITY;
    }

    let by_width = observed.width / reference.width;
    let by_height = observed.height / reference.height;
    let scale = by_width.min(by_height);

    if scale.is_finite() {
        ScaleResult { scale }
    } else {
        ScaleResult::IDENTITY
    }
}
