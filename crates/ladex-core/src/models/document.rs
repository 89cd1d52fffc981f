//! Document-text response model.
//!
//! Minimal mirror of the service's block-based text-detection response, used
//! for the lines-only fallback view when a document yields no expense data.

use serde::{Deserialize, Serialize};

/// Block-based text response for one analyzed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentResponse {
    #[serde(rename = "Blocks", default)]
    pub blocks: Vec<Block>,
}

/// One detected block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    /// Block kind, e.g. `PAGE`, `LINE`, `WORD`, `TABLE`.
    #[serde(rename = "BlockType", default)]
    pub block_type: String,

    /// Detected text, present for LINE and WORD blocks.
    #[serde(rename = "Text", default)]
    pub text: String,
}

impl DocumentResponse {
    /// Trimmed, non-empty texts of the LINE blocks, in detection order.
    pub fn text_lines(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter(|b| b.block_type == "LINE")
            .map(|b| b.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}
