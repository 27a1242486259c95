//! Customer review card.

use electromart_core::ReviewId;

use super::star_rating::StarRating;
use crate::catalog::Review;
use crate::models::VoteDirection;

/// Helpful / not-helpful voting controls for a review.
#[derive(Debug, Clone)]
pub struct ReviewVoting {
    /// Form action for the vote buttons.
    pub action: String,
    /// This session's vote, if it has voted.
    pub current: Option<VoteDirection>,
}

impl ReviewVoting {
    #[must_use]
    pub fn voted_up(&self) -> bool {
        self.current == Some(VoteDirection::Up)
    }

    #[must_use]
    pub fn voted_down(&self) -> bool {
        self.current == Some(VoteDirection::Down)
    }
}

/// Render-ready review.
#[derive(Debug, Clone)]
pub struct ReviewCard {
    pub id: ReviewId,
    pub author_name: String,
    pub avatar_url: Option<String>,
    pub initials: String,
    pub stars: StarRating,
    pub title: Option<String>,
    pub comment: String,
    pub date: String,
    pub is_verified_purchase: bool,
    pub helpful_votes: u32,
    pub not_helpful_votes: u32,
    pub voting: Option<ReviewVoting>,
}

impl ReviewCard {
    #[must_use]
    pub fn new(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            author_name: review.author_name.clone(),
            avatar_url: review.author_avatar_url.clone(),
            initials: initials(&review.author_name, review.author_initials.as_deref()),
            stars: StarRating::new(f64::from(review.rating)).size(16),
            title: review.title.clone(),
            comment: review.comment.clone(),
            date: review.date.format("%B %-d, %Y").to_string(),
            is_verified_purchase: review.is_verified_purchase,
            helpful_votes: review.helpful_votes,
            not_helpful_votes: review.not_helpful_votes,
            voting: None,
        }
    }

    /// Enable voting; this session's vote is added to the stored counts.
    #[must_use]
    pub fn with_voting(mut self, action: impl Into<String>, current: Option<VoteDirection>) -> Self {
        match current {
            Some(VoteDirection::Up) => self.helpful_votes += 1,
            Some(VoteDirection::Down) => self.not_helpful_votes += 1,
            None => {}
        }
        self.voting = Some(ReviewVoting {
            action: action.into(),
            current,
        });
        self
    }

    /// "Yes (10)", or just "Yes" with no votes.
    #[must_use]
    pub fn helpful_label(&self) -> String {
        vote_label("Yes", self.helpful_votes)
    }

    /// "No (2)", or just "No" with no votes.
    #[must_use]
    pub fn not_helpful_label(&self) -> String {
        vote_label("No", self.not_helpful_votes)
    }
}

fn vote_label(word: &str, count: u32) -> String {
    if count == 0 {
        word.to_string()
    } else {
        format!("{word} ({count})")
    }
}

/// Avatar fallback: provided initials, else the first two characters of the
/// name upper-cased.
#[must_use]
pub fn initials(name: &str, provided: Option<&str>) -> String {
    provided
        .filter(|s| !s.trim().is_empty())
        .map_or_else(
            || name.chars().take(2).collect::<String>().to_uppercase(),
            str::to_string,
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn review() -> Review {
        Review {
            id: ReviewId::new("r1"),
            author_name: "Alice Wonderland".to_string(),
            author_avatar_url: None,
            author_initials: None,
            rating: 5,
            title: Some("Absolutely Love It!".to_string()),
            comment: "Great.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            is_verified_purchase: true,
            helpful_votes: 10,
            not_helpful_votes: 0,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alice Wonderland", None), "AL");
        assert_eq!(initials("Bob", Some("BB")), "BB");
        assert_eq!(initials("bo", Some("  ")), "BO");
        assert_eq!(initials("é", None), "É");
    }

    #[test]
    fn test_card_fields() {
        let card = ReviewCard::new(&review());
        assert_eq!(card.date, "July 5, 2024");
        assert_eq!(card.stars.size, 16);
        assert_eq!(card.helpful_label(), "Yes (10)");
        assert_eq!(card.not_helpful_label(), "No");
        assert!(card.voting.is_none());
    }

    #[test]
    fn test_session_vote_is_counted() {
        let card = ReviewCard::new(&review()).with_voting("/vote", Some(VoteDirection::Down));
        assert_eq!(card.not_helpful_label(), "No (1)");
        assert_eq!(card.helpful_votes, 10);
        assert!(card.voting.unwrap().voted_down());
    }
}
