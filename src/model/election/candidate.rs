use serde::{Deserialize, Serialize};

use crate::model::region::Region;

use super::CandidateId;

/// A candidate standing in exactly one election and one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate unique ID within the election.
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub age: u32,
    pub qualification: String,
    /// The office sought, e.g. "MP Candidate".
    pub position: String,
    pub image_url: String,
    /// Authored vote count. Only a [`VotingSession`](crate::model::session::VotingSession)
    /// adds to it, and only for display.
    pub votes: u64,
    /// Constituency, stored flat as `stateId`, `districtId`, `mandalId`.
    #[serde(flatten)]
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifesto: Option<String>,
}

impl Candidate {
    pub fn stands_in(&self, state_id: &str, district_id: &str, mandal_id: &str) -> bool {
        self.region.matches(state_id, district_id, mandal_id)
    }
}
