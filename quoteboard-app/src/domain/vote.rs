use quoteboard_errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }
}

impl FromStr for VoteDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(Self::Upvote),
            "downvote" => Ok(Self::Downvote),
            other => Err(AppError::Internal(format!("unknown vote type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub quote_id: uuid::Uuid,
    pub vote_type: VoteDirection,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Vote {
    pub fn new(user_id: uuid::Uuid, quote_id: uuid::Uuid, vote_type: VoteDirection) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            quote_id,
            vote_type,
            created_at: None,
        }
    }
}

/// Outcome of resolving a caller's requested direction against their prior
/// vote on the same quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// First vote by this user on this quote.
    First(VoteDirection),
    /// Direction change; the old counter goes down, the new one up.
    Flip {
        from: VoteDirection,
        to: VoteDirection,
    },
}

impl VoteTransition {
    /// Resolves the one-vote-per-user state machine. Repeating the same
    /// direction is rejected so no mutation happens downstream.
    pub fn resolve(
        prior: Option<VoteDirection>,
        requested: VoteDirection,
    ) -> Result<Self, AppError> {
        match prior {
            None => Ok(Self::First(requested)),
            Some(existing) if existing == requested => {
                let message = match requested {
                    VoteDirection::Upvote => "User already upvoted",
                    VoteDirection::Downvote => "User already downvoted",
                };
                Err(AppError::DuplicateVote(message.to_string()))
            }
            Some(existing) => Ok(Self::Flip {
                from: existing,
                to: requested,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_vote_creates_a_record_in_the_requested_direction() {
        let transition = VoteTransition::resolve(None, VoteDirection::Upvote).unwrap();
        assert_eq!(transition, VoteTransition::First(VoteDirection::Upvote));
    }

    #[test]
    fn repeating_the_same_direction_is_rejected() {
        let err = VoteTransition::resolve(Some(VoteDirection::Upvote), VoteDirection::Upvote)
            .unwrap_err();
        assert_eq!(err, AppError::DuplicateVote("User already upvoted".to_string()));

        let err = VoteTransition::resolve(Some(VoteDirection::Downvote), VoteDirection::Downvote)
            .unwrap_err();
        assert_eq!(err, AppError::DuplicateVote("User already downvoted".to_string()));
    }

    #[test]
    fn opposite_direction_flips() {
        let transition =
            VoteTransition::resolve(Some(VoteDirection::Downvote), VoteDirection::Upvote).unwrap();
        assert_eq!(
            transition,
            VoteTransition::Flip {
                from: VoteDirection::Downvote,
                to: VoteDirection::Upvote,
            }
        );
    }

    #[test]
    fn direction_round_trips_through_its_storage_form() {
        assert_eq!("upvote".parse::<VoteDirection>().unwrap(), VoteDirection::Upvote);
        assert_eq!("downvote".parse::<VoteDirection>().unwrap(), VoteDirection::Downvote);
        assert!("sideways".parse::<VoteDirection>().is_err());
    }
}
