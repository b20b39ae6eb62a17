use quoteboard_errors::AppError;
use serde::{Deserialize, Serialize};

use super::vote::{VoteDirection, VoteTransition};

pub const DEFAULT_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: uuid::Uuid,
    pub text: String,
    pub author: String,
    pub upvotes: i32,
    pub downvotes: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Quote {
    /// Builds a fresh quote with zeroed counters. An empty or
    /// whitespace-only text is rejected; a missing or empty author falls
    /// back to [`DEFAULT_AUTHOR`].
    pub fn new(text: &str, author: Option<&str>) -> Result<Self, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::InvalidArgument("Quote text is required".to_string()));
        }
        let author = author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_AUTHOR);
        Ok(Self {
            id: uuid::Uuid::new_v4(),
            text: text.to_string(),
            author: author.to_string(),
            upvotes: 0,
            downvotes: 0,
            created_at: None,
        })
    }

    /// Applies a resolved transition to the cached counters. Decrements
    /// floor at zero so a drifted counter can never go negative.
    pub fn apply_transition(&mut self, transition: &VoteTransition) {
        match transition {
            VoteTransition::First(direction) => self.bump(*direction),
            VoteTransition::Flip { from, to } => {
                self.drop_floored(*from);
                self.bump(*to);
            }
        }
    }

    fn bump(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Upvote => self.upvotes += 1,
            VoteDirection::Downvote => self.downvotes += 1,
        }
    }

    fn drop_floored(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Upvote => self.upvotes = (self.upvotes - 1).max(0),
            VoteDirection::Downvote => self.downvotes = (self.downvotes - 1).max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(Quote::new("", Some("A")), Err(AppError::InvalidArgument(_))));
        assert!(matches!(Quote::new("   ", None), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn author_defaults_to_unknown() {
        let quote = Quote::new("hi", None).unwrap();
        assert_eq!(quote.author, "Unknown");
        assert_eq!(quote.upvotes, 0);
        assert_eq!(quote.downvotes, 0);

        let quote = Quote::new("hi", Some("")).unwrap();
        assert_eq!(quote.author, "Unknown");

        let quote = Quote::new("hi", Some("Seneca")).unwrap();
        assert_eq!(quote.author, "Seneca");
    }

    #[test]
    fn first_vote_increments_one_counter() {
        let mut quote = Quote::new("q", None).unwrap();
        quote.apply_transition(&VoteTransition::First(VoteDirection::Upvote));
        assert_eq!((quote.upvotes, quote.downvotes), (1, 0));
        quote.apply_transition(&VoteTransition::First(VoteDirection::Downvote));
        assert_eq!((quote.upvotes, quote.downvotes), (1, 1));
    }

    #[test]
    fn flip_moves_exactly_one_count_between_counters() {
        let mut quote = Quote::new("q", None).unwrap();
        quote.upvotes = 3;
        quote.downvotes = 1;
        quote.apply_transition(&VoteTransition::Flip {
            from: VoteDirection::Upvote,
            to: VoteDirection::Downvote,
        });
        assert_eq!((quote.upvotes, quote.downvotes), (2, 2));
        // Net sum unchanged.
        assert_eq!(quote.upvotes + quote.downvotes, 4);
    }

    #[test]
    fn flip_on_a_drifted_zero_counter_floors_at_zero() {
        let mut quote = Quote::new("q", None).unwrap();
        quote.apply_transition(&VoteTransition::Flip {
            from: VoteDirection::Downvote,
            to: VoteDirection::Upvote,
        });
        assert_eq!((quote.upvotes, quote.downvotes), (1, 0));
    }
}
