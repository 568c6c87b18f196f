//! One user's pass through a single election: pick a region, cast at most one vote.

use thiserror::Error;

use crate::model::election::{Candidate, CandidateId, Election, ElectionId, ElectionStatus};

/// States in the session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Initial state; a vote may be cast.
    NotVoted,
    /// Terminal for the session's lifetime.
    Voted { candidate_id: CandidateId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    /// A second vote in a session that has already voted.
    #[error("You have already cast your vote in this election.")]
    AlreadyVoted {
        election_id: ElectionId,
        voted_for: CandidateId,
    },
    /// Sessions are only opened for current elections.
    #[error("Election {election_id} is {status}, voting is not open")]
    NotOpen {
        election_id: ElectionId,
        status: ElectionStatus,
    },
}

/// Ephemeral per-user voting state. Nothing here is persisted; dropping the
/// session (or calling [`VotingSession::end`]) discards it.
#[derive(Debug)]
pub struct VotingSession {
    election_id: ElectionId,
    state: SessionState,
}

impl VotingSession {
    /// Start a session for any election id.
    pub fn new(election_id: impl Into<ElectionId>) -> Self {
        Self {
            election_id: election_id.into(),
            state: SessionState::NotVoted,
        }
    }

    /// Start a session, refusing elections that are not currently open.
    pub fn open(election: &Election) -> Result<Self, VoteError> {
        if election.status != ElectionStatus::Current {
            return Err(VoteError::NotOpen {
                election_id: election.id.clone(),
                status: election.status,
            });
        }
        Ok(Self::new(election.id.clone()))
    }

    pub fn election_id(&self) -> &str {
        &self.election_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn has_voted(&self) -> bool {
        matches!(self.state, SessionState::Voted { .. })
    }

    pub fn voted_candidate_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::NotVoted => None,
            SessionState::Voted { candidate_id } => Some(candidate_id),
        }
    }

    /// Record a vote. Only allowed once; later attempts leave the state
    /// untouched and report [`VoteError::AlreadyVoted`].
    pub fn cast_vote(&mut self, candidate_id: impl Into<CandidateId>) -> Result<(), VoteError> {
        let candidate_id = candidate_id.into();
        if let SessionState::Voted {
            candidate_id: voted_for,
        } = &self.state
        {
            warn!(
                "Rejected second vote in election {} (attempted {candidate_id}, already voted for {voted_for})",
                self.election_id
            );
            return Err(VoteError::AlreadyVoted {
                election_id: self.election_id.clone(),
                voted_for: voted_for.clone(),
            });
        }

        info!(
            "Vote cast in election {} for candidate {candidate_id}",
            self.election_id
        );
        self.state = SessionState::Voted { candidate_id };
        Ok(())
    }

    /// The count to display for a candidate: its authored votes, plus this
    /// session's vote if it went to them.
    pub fn tally_for(&self, candidate: &Candidate) -> u64 {
        match self.voted_candidate_id() {
            Some(id) if id == candidate.id => candidate.votes + 1,
            _ => candidate.votes,
        }
    }

    /// Close the session, returning who (if anyone) it voted for.
    pub fn end(self) -> Option<CandidateId> {
        debug!("Voting session for election {} ended", self.election_id);
        match self.state {
            SessionState::NotVoted => None,
            SessionState::Voted { candidate_id } => Some(candidate_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::region::Region;

    fn init_logging() {
        log4rs_test_utils::test_logging::init_logging_once_for(["rkv_voting"], None, None);
    }

    #[test]
    fn starts_not_voted() {
        let session = VotingSession::new("election-1");
        assert_eq!(session.election_id(), "election-1");
        assert_eq!(session.state(), &SessionState::NotVoted);
        assert!(!session.has_voted());
        assert_eq!(session.voted_candidate_id(), None);
    }

    #[test]
    fn single_vote_is_terminal() {
        init_logging();
        let mut session = VotingSession::new("election-1");
        assert_eq!(session.cast_vote("candidate-1"), Ok(()));
        assert!(session.has_voted());
        assert_eq!(session.voted_candidate_id(), Some("candidate-1"));

        for attempt in ["candidate-2", "candidate-1"] {
            assert_eq!(
                session.cast_vote(attempt),
                Err(VoteError::AlreadyVoted {
                    election_id: "election-1".to_string(),
                    voted_for: "candidate-1".to_string(),
                })
            );
            assert_eq!(
                session.state(),
                &SessionState::Voted {
                    candidate_id: "candidate-1".to_string()
                }
            );
        }
        assert_eq!(session.end(), Some("candidate-1".to_string()));
    }

    #[test]
    fn rejection_message_is_user_facing() {
        let mut session = VotingSession::new("election-1");
        session.cast_vote("A").unwrap();
        let err = session.cast_vote("B").unwrap_err();
        assert_eq!(
            err.to_string(),
            "You have already cast your vote in this election."
        );
    }

    #[test]
    fn open_requires_current_election() {
        assert!(VotingSession::open(&Election::example()).is_ok());

        for status in [ElectionStatus::Past, ElectionStatus::Future] {
            let election = Election::example_with_status("election-2", status);
            match VotingSession::open(&election) {
                Err(VoteError::NotOpen {
                    election_id,
                    status: reported,
                }) => {
                    assert_eq!(election_id, "election-2");
                    assert_eq!(reported, status);
                }
                other => panic!("expected NotOpen, got {other:?}"),
            }
        }
    }

    #[test]
    fn tally_adds_local_vote_only_for_chosen_candidate() {
        let a = Candidate::example("A", 245, Region::example_x());
        let b = Candidate::example("B", 213, Region::example_x());

        let mut session = VotingSession::new("election-1");
        assert_eq!(session.tally_for(&a), 245);

        session.cast_vote("B").unwrap();
        assert_eq!(session.tally_for(&a), 245);
        assert_eq!(session.tally_for(&b), 214);
        // The authored record is untouched.
        assert_eq!(b.votes, 213);
    }

    #[test]
    fn ending_without_voting() {
        assert_eq!(VotingSession::new("election-1").end(), None);
    }
}
