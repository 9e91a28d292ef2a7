//! Interaction intents.
//!
//! The engine never wires taps to game logic. Interactive elements
//! carry a typed intent; the host subscribes to intents through a
//! single handler and decides what they mean.

use serde::{Deserialize, Serialize};

/// What an interactive element means when activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// A slot inside a group was selected.
    SelectSlot {
        /// Owning group id
        group_id: String,
        /// Slot id
        slot_id: String,
    },
    /// A recipe cell was selected (index into the bound catalog).
    SelectRecipe {
        /// Catalog index
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_equality() {
        let a = Intent::SelectSlot {
            group_id: "fuel".into(),
            slot_id: "fuel-0".into(),
        };
        assert_eq!(a.clone(), a);
        assert_ne!(a, Intent::SelectRecipe { index: 0 });
    }
}
