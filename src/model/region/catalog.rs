use crate::error::Result;
use crate::model::ensure_unique;

use super::{District, Mandal, Region, State};

/// The read-only State -> District -> Mandal hierarchy.
///
/// Every lookup is tolerant: an id that does not resolve yields an empty
/// slice, an empty name, or `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionCatalog {
    states: Vec<State>,
}

impl RegionCatalog {
    /// Build a catalog, checking that ids are unique within their parent scope.
    pub fn new(states: Vec<State>) -> Result<Self> {
        ensure_unique("state", states.iter().map(|s| s.id.as_str()))?;
        for state in &states {
            ensure_unique("district", state.districts.iter().map(|d| d.id.as_str()))?;
            for district in &state.districts {
                ensure_unique("mandal", district.mandals.iter().map(|m| m.id.as_str()))?;
            }
        }
        Ok(Self { states })
    }

    /// All states, in authored order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, state_id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == state_id)
    }

    pub fn district(&self, state_id: &str, district_id: &str) -> Option<&District> {
        self.state(state_id)?
            .districts
            .iter()
            .find(|d| d.id == district_id)
    }

    pub fn mandal(&self, state_id: &str, district_id: &str, mandal_id: &str) -> Option<&Mandal> {
        self.district(state_id, district_id)?
            .mandals
            .iter()
            .find(|m| m.id == mandal_id)
    }

    /// Districts of a state in authored order; empty if the state is unknown.
    pub fn districts(&self, state_id: &str) -> &[District] {
        match self.state(state_id) {
            Some(state) => &state.districts,
            None => {
                debug!("No districts for unknown state `{state_id}`");
                &[]
            }
        }
    }

    /// Mandals of a district in authored order; empty if either id is unknown.
    pub fn mandals(&self, state_id: &str, district_id: &str) -> &[Mandal] {
        match self.district(state_id, district_id) {
            Some(district) => &district.mandals,
            None => {
                debug!("No mandals for unknown district `{state_id}/{district_id}`");
                &[]
            }
        }
    }

    pub fn state_name(&self, state_id: &str) -> &str {
        self.state(state_id).map_or("", |s| s.name.as_str())
    }

    pub fn district_name(&self, state_id: &str, district_id: &str) -> &str {
        self.district(state_id, district_id)
            .map_or("", |d| d.name.as_str())
    }

    pub fn mandal_name(&self, state_id: &str, district_id: &str, mandal_id: &str) -> &str {
        self.mandal(state_id, district_id, mandal_id)
            .map_or("", |m| m.name.as_str())
    }

    /// Does the whole triple resolve?
    pub fn contains(&self, region: &Region) -> bool {
        self.mandal(&region.state_id, &region.district_id, &region.mandal_id)
            .is_some()
    }

    /// Human-readable path, e.g. `Andhra Pradesh > YSR Kadapa > Kadapa`.
    /// Unresolved parts render as empty strings.
    pub fn describe(&self, region: &Region) -> String {
        format!(
            "{} > {} > {}",
            self.state_name(&region.state_id),
            self.district_name(&region.state_id, &region.district_id),
            self.mandal_name(&region.state_id, &region.district_id, &region.mandal_id),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<&str> {
        items.iter().map(id).collect()
    }

    #[test]
    fn districts_in_authored_order() {
        let catalog = RegionCatalog::example();
        assert_eq!(
            ids(catalog.districts("ap"), |d| d.id.as_str()),
            vec!["kadapa", "chittoor"]
        );
        assert_eq!(ids(catalog.districts("tg"), |d| d.id.as_str()), vec!["hyderabad"]);
    }

    #[test]
    fn mandals_in_authored_order() {
        let catalog = RegionCatalog::example();
        assert_eq!(
            ids(catalog.mandals("ap", "kadapa"), |m| m.id.as_str()),
            vec!["kadapa-mandal", "proddatur", "rajampet"]
        );
        // A district from another state does not resolve.
        assert!(catalog.mandals("tg", "kadapa").is_empty());
    }

    #[test]
    fn unknown_ids_give_empty_results() {
        let catalog = RegionCatalog::example();
        assert!(catalog.districts("ka").is_empty());
        assert!(catalog.districts("").is_empty());
        assert!(catalog.mandals("ka", "kadapa").is_empty());
        assert!(catalog.mandals("ap", "nellore").is_empty());

        assert_eq!(catalog.state_name("ka"), "");
        assert_eq!(catalog.district_name("ka", "kadapa"), "");
        assert_eq!(catalog.district_name("ap", "nellore"), "");
        assert_eq!(catalog.mandal_name("ka", "kadapa", "rajampet"), "");
        assert_eq!(catalog.mandal_name("ap", "nellore", "rajampet"), "");
        assert_eq!(catalog.mandal_name("ap", "kadapa", "kavali"), "");
    }

    #[test]
    fn names_resolve() {
        let catalog = RegionCatalog::example();
        assert_eq!(catalog.state_name("ap"), "Andhra Pradesh");
        assert_eq!(catalog.district_name("ap", "kadapa"), "YSR Kadapa");
        assert_eq!(catalog.mandal_name("tg", "hyderabad", "charminar"), "Charminar");
    }

    #[test]
    fn describe_and_contains() {
        let catalog = RegionCatalog::example();
        let region = Region::example_x();
        assert!(catalog.contains(&region));
        assert_eq!(
            catalog.describe(&region),
            "Andhra Pradesh > YSR Kadapa > Kadapa"
        );

        let dangling = Region::new("ap", "kadapa", "kavali");
        assert!(!catalog.contains(&dangling));
        assert_eq!(catalog.describe(&dangling), "Andhra Pradesh > YSR Kadapa > ");
    }

    #[test]
    fn duplicate_ids_rejected_per_scope() {
        let mut state = State::example1();
        let repeated = state.districts[1].mandals[0].clone();
        state.districts[1].mandals.push(repeated);
        assert!(matches!(
            RegionCatalog::new(vec![state]),
            Err(Error::DuplicateId { scope: "mandal", .. })
        ));

        assert!(matches!(
            RegionCatalog::new(vec![State::example1(), State::example1()]),
            Err(Error::DuplicateId { scope: "state", .. })
        ));

        // The same mandal id under two different districts is fine.
        let mut state = State::example1();
        state.districts[1].mandals[0].id = "rajampet".to_string();
        assert!(RegionCatalog::new(vec![state]).is_ok());
    }
}
