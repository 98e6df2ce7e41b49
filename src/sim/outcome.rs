//! Round outcome determination
//!
//! Pure functions mapping a pair of rolls to a winner and display message.

/// The two player display names, fixed before the loop starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub first: String,
    pub second: String,
}

impl PlayerNames {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}

/// One round's pair of rolls, immutable once produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollResult {
    pub first: u32,
    pub second: u32,
}

/// Who won the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
    Tie,
}

/// A resolved round: winner tag plus the message shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub rolls: RollResult,
    pub winner: Winner,
    pub message: String,
}

/// Determine the round outcome from a pair of rolls. Total over all pairs.
pub fn determine_outcome(rolls: RollResult, players: &PlayerNames) -> RoundOutcome {
    let (winner, message) = if rolls.first > rolls.second {
        (
            Winner::First,
            format!("{} WINS!\nFlawless Victory!", players.first),
        )
    } else if rolls.second > rolls.first {
        (
            Winner::Second,
            format!("{} WINS!\nOutsmarted!", players.second),
        )
    } else {
        (Winner::Tie, "It's a tie!".to_string())
    };

    RoundOutcome {
        rolls,
        winner,
        message,
    }
}
