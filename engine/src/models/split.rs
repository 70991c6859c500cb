//! Split instruction model
//!
//! How an expense total is divided among participants. Modeled as a tagged
//! variant so an invalid mode or a mode/value mismatch cannot be represented:
//! equal mode carries no values, percentage mode carries percents, custom mode
//! carries absolute amounts.
//!
//! Entry order is significant: the split calculator assigns the rounding
//! remainder to a deterministic anchor entry, so the same spec always yields
//! the same shares.

use crate::models::expense::ParticipantId;
use crate::models::money::Money;
use serde::{Deserialize, Serialize};

/// Percentage-mode entry: `percent` out of 100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentEntry {
    pub participant_id: ParticipantId,
    pub percent: f64,
}

/// Custom-mode entry: an absolute share amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountEntry {
    pub participant_id: ParticipantId,
    pub amount: Money,
}

/// Split instruction for one expense
///
/// # Example
/// ```
/// use splitledger_core::SplitSpec;
///
/// let spec = SplitSpec::equal(["alice", "bob", "carol"]);
/// assert_eq!(spec.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SplitSpec {
    /// Divide the total evenly among the listed participants
    Equal { participants: Vec<ParticipantId> },

    /// Divide by percentage; percents must sum to 100 (within 0.5)
    Percentage { entries: Vec<PercentEntry> },

    /// Caller-supplied absolute shares; must sum to the total (within 1.00)
    Custom { entries: Vec<AmountEntry> },
}

impl SplitSpec {
    /// Equal split over an ordered participant list
    pub fn equal<I, S>(participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ParticipantId>,
    {
        SplitSpec::Equal {
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Percentage split from `(participant, percent)` pairs
    pub fn percentage<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<ParticipantId>,
    {
        SplitSpec::Percentage {
            entries: entries
                .into_iter()
                .map(|(participant_id, percent)| PercentEntry {
                    participant_id: participant_id.into(),
                    percent,
                })
                .collect(),
        }
    }

    /// Custom split from `(participant, amount)` pairs
    pub fn custom<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<ParticipantId>,
    {
        SplitSpec::Custom {
            entries: entries
                .into_iter()
                .map(|(participant_id, amount)| AmountEntry {
                    participant_id: participant_id.into(),
                    amount,
                })
                .collect(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        match self {
            SplitSpec::Equal { participants } => participants.len(),
            SplitSpec::Percentage { entries } => entries.len(),
            SplitSpec::Custom { entries } => entries.len(),
        }
    }

    /// True if no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Participant IDs in entry order
    pub fn participant_ids(&self) -> impl Iterator<Item = &ParticipantId> {
        let ids: Vec<&ParticipantId> = match self {
            SplitSpec::Equal { participants } => participants.iter().collect(),
            SplitSpec::Percentage { entries } => {
                entries.iter().map(|e| &e.participant_id).collect()
            }
            SplitSpec::Custom { entries } => entries.iter().map(|e| &e.participant_id).collect(),
        };
        ids.into_iter()
    }
}
