//! Per-session review votes.

use std::collections::BTreeMap;

use electromart_core::ReviewId;
use serde::{Deserialize, Serialize};

/// Helpful (up) or not helpful (down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Parse a form value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// What a vote request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    Changed,
    Unchanged,
}

/// One vote per review per session; voting again in the other direction
/// replaces the earlier vote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewVotes {
    votes: BTreeMap<ReviewId, VoteDirection>,
}

impl ReviewVotes {
    #[must_use]
    pub fn get(&self, review: &ReviewId) -> Option<VoteDirection> {
        self.votes.get(review).copied()
    }

    pub fn cast(&mut self, review: ReviewId, direction: VoteDirection) -> VoteOutcome {
        match self.votes.insert(review, direction) {
            None => VoteOutcome::Recorded,
            Some(previous) if previous == direction => VoteOutcome::Unchanged,
            Some(_) => VoteOutcome::Changed,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_one_vote_per_review() {
        let mut votes = ReviewVotes::default();
        let r1 = ReviewId::new("r1");
        assert_eq!(votes.cast(r1.clone(), VoteDirection::Up), VoteOutcome::Recorded);
        assert_eq!(votes.cast(r1.clone(), VoteDirection::Up), VoteOutcome::Unchanged);
        assert_eq!(votes.cast(r1.clone(), VoteDirection::Down), VoteOutcome::Changed);
        assert_eq!(votes.get(&r1), Some(VoteDirection::Down));
        assert_eq!(votes.get(&ReviewId::new("r2")), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(VoteDirection::parse("up"), Some(VoteDirection::Up));
        assert_eq!(VoteDirection::parse("sideways"), None);
    }
}
