//! Heuristic field finders for the three target values.
//!
//! All three share one matching algorithm parameterized by a synonym table;
//! they differ only in the table and the value normalization applied to a
//! match.

pub mod bol;
pub mod card_times;
pub mod synonyms;

pub use bol::find_bol_number;
pub use card_times::{find_card_in, find_card_out};

use super::ExtractionResult;

/// Find the value whose key matches a synonym table entry.
///
/// Matching is case-insensitive substring containment: a synonym matches a
/// key when the synonym occurs anywhere inside the lowercased key. The first
/// synonym in table order wins, then the first key in mapping iteration
/// order; no attempt is made to find a better or longer match. The products
/// pass only runs after the whole summary pass came up empty.
///
/// Table entries must already be lowercase.
pub(crate) fn find_field(result: &ExtractionResult, synonyms: &[&str]) -> Option<String> {
    debug_assert!(
        synonyms.iter().all(|s| !s.chars().any(char::is_uppercase)),
        "synonym tables are maintained in lowercase"
    );

    for synonym in synonyms {
        for (key, value) in &result.summary {
            if key.to_lowercase().contains(synonym) {
                return Some(value.clone());
            }
        }
    }

    for synonym in synonyms {
        for product in &result.products {
            for (key, value) in product {
                if key.to_lowercase().contains(synonym) {
                    return Some(value.clone());
                }
            }
        }
    }

    None
}
