mod catalog;

pub use catalog::RegionCatalog;

use serde::{Deserialize, Serialize};

/// Our state IDs are short slugs, e.g. `ap`.
pub type StateId = String;
/// Our district IDs are slugs, unique within their state.
pub type DistrictId = String;
/// Our mandal IDs are slugs, unique within their district.
pub type MandalId = String;

/// The smallest administrative unit a candidate can stand in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mandal {
    pub id: MandalId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub name: String,
    /// Mandals in authored order.
    pub mandals: Vec<Mandal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    /// Districts in authored order.
    pub districts: Vec<District>,
}

/// A (state, district, mandal) triple identifying a constituency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub state_id: StateId,
    pub district_id: DistrictId,
    pub mandal_id: MandalId,
}

impl Region {
    pub fn new(
        state_id: impl Into<StateId>,
        district_id: impl Into<DistrictId>,
        mandal_id: impl Into<MandalId>,
    ) -> Self {
        Self {
            state_id: state_id.into(),
            district_id: district_id.into(),
            mandal_id: mandal_id.into(),
        }
    }

    /// Exact match on all three ids.
    pub fn matches(&self, state_id: &str, district_id: &str, mandal_id: &str) -> bool {
        self.state_id == state_id && self.district_id == district_id && self.mandal_id == mandal_id
    }
}
