use crate::error::Result;
use crate::model::ensure_unique;

use super::{Candidate, Election, ElectionStatus};

/// The read-only collection of elections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectionCatalog {
    elections: Vec<Election>,
}

impl ElectionCatalog {
    /// Build a catalog, checking that election ids are unique and that
    /// candidate ids are unique within each election.
    pub fn new(elections: Vec<Election>) -> Result<Self> {
        ensure_unique("election", elections.iter().map(|e| e.id.as_str()))?;
        for election in &elections {
            ensure_unique("candidate", election.candidates.iter().map(|c| c.id.as_str()))?;
        }
        Ok(Self { elections })
    }

    /// All elections, in authored order.
    pub fn all(&self) -> &[Election] {
        &self.elections
    }

    /// Exact match on the authored status.
    pub fn by_status(&self, status: ElectionStatus) -> Vec<&Election> {
        self.elections
            .iter()
            .filter(|e| e.status == status)
            .collect()
    }

    pub fn current(&self) -> Vec<&Election> {
        self.by_status(ElectionStatus::Current)
    }

    pub fn past(&self) -> Vec<&Election> {
        self.by_status(ElectionStatus::Past)
    }

    pub fn future(&self) -> Vec<&Election> {
        self.by_status(ElectionStatus::Future)
    }

    pub fn by_id(&self, election_id: &str) -> Option<&Election> {
        self.elections.iter().find(|e| e.id == election_id)
    }

    /// Candidates of an election standing in exactly the given region, in
    /// authored order. Empty if the election is unknown or nobody matches.
    pub fn candidates_in_region(
        &self,
        election_id: &str,
        state_id: &str,
        district_id: &str,
        mandal_id: &str,
    ) -> Vec<&Candidate> {
        match self.by_id(election_id) {
            Some(election) => election.candidates_in_region(state_id, district_id, mandal_id),
            None => {
                debug!("No candidates for unknown election `{election_id}`");
                Vec::new()
            }
        }
    }
}
