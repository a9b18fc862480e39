use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

/// Default series colors, cycled by index.
const DEFAULT_TOKENS: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Fixed ordered list of color tokens.
///
/// Tokens are opaque to the engine; geometry output carries only the palette
/// index so any backend can resolve its own color representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    tokens: Vec<String>,
}

impl Palette {
    pub fn new(tokens: Vec<String>) -> StudioResult<Self> {
        if tokens.is_empty() {
            return Err(StudioError::InvalidData(
                "palette must contain at least one color token".to_owned(),
            ));
        }
        Ok(Self { tokens })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Palette index for the series element at `position`, cycling.
    #[must_use]
    pub fn color_index(&self, position: usize) -> usize {
        position % self.tokens.len()
    }

    #[must_use]
    pub fn token(&self, index: usize) -> &str {
        &self.tokens[index % self.tokens.len()]
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}
