use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{
    config::Config,
    error::{Error, Result},
    model::{
        election::{Election, ElectionCatalog},
        region::{RegionCatalog, State},
    },
};

/// Seed data compiled into the binary.
const SEED: &str = include_str!("../../data/seed.json");

/// On-disk layout of a seed file.
#[derive(Debug, Deserialize)]
struct Seed {
    states: Vec<State>,
    elections: Vec<Election>,
}

/// The read-only store behind every page: regions and elections, loaded
/// once at start-up and handed to whoever needs them.
#[derive(Debug, Clone)]
pub struct Repository {
    regions: RegionCatalog,
    elections: ElectionCatalog,
}

impl Repository {
    pub fn new(regions: RegionCatalog, elections: ElectionCatalog) -> Self {
        // Candidates outside the hierarchy stay queryable by their exact triple,
        // they just can't be reached through the selectors.
        for election in elections.all() {
            for candidate in &election.candidates {
                if !regions.contains(&candidate.region) {
                    warn!(
                        "Candidate {} in election {} stands in unknown region {}/{}/{}",
                        candidate.id,
                        election.id,
                        candidate.region.state_id,
                        candidate.region.district_id,
                        candidate.region.mandal_id,
                    );
                }
            }
        }
        Self { regions, elections }
    }

    /// Load the seed data embedded at build time.
    pub fn seeded() -> Result<Self> {
        Self::from_json(SEED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(json)?;
        let regions = RegionCatalog::new(seed.states)?;
        let elections = ElectionCatalog::new(seed.elections)?;
        info!(
            "Loaded {} states and {} elections",
            regions.states().len(),
            elections.all().len()
        );
        Ok(Self::new(regions, elections))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading seed data from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Use the configured seed file if there is one, else the embedded seed.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.seed_path() {
            Some(path) => Self::from_path(path),
            None => Self::seeded(),
        }
    }

    pub fn regions(&self) -> &RegionCatalog {
        &self.regions
    }

    pub fn elections(&self) -> &ElectionCatalog {
        &self.elections
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::{
        election::ElectionStatus,
        results::{self, Outcome},
    };

    fn init_logging() {
        log4rs_test_utils::test_logging::init_logging_once_for(["rkv_voting"], None, None);
    }

    fn ids<'a, T: 'a>(items: impl IntoIterator<Item = &'a T>, id: fn(&T) -> &str) -> Vec<&'a str> {
        items.into_iter().map(id).collect()
    }

    #[test]
    fn seed_loads() {
        init_logging();
        let repo = Repository::seeded().unwrap();

        assert_eq!(
            ids(repo.regions().states(), |s| s.id.as_str()),
            vec!["ap", "tg"]
        );
        assert_eq!(
            ids(repo.regions().districts("ap"), |d| d.id.as_str()),
            vec!["kadapa", "chittoor", "anantapur"]
        );
        assert_eq!(
            ids(repo.regions().districts("tg"), |d| d.id.as_str()),
            vec!["hyderabad", "rangareddy"]
        );
        assert_eq!(repo.regions().mandals("tg", "rangareddy").len(), 5);

        assert_eq!(repo.elections().all().len(), 5);
        assert_eq!(
            ids(repo.elections().current(), |e| e.id.as_str()),
            vec!["election-1"]
        );
        assert_eq!(
            ids(repo.elections().past(), |e| e.id.as_str()),
            vec!["election-2", "election-4"]
        );
        assert_eq!(
            ids(repo.elections().future(), |e| e.id.as_str()),
            vec!["election-3", "election-5"]
        );
    }

    #[test]
    fn seeded_region_scenario() {
        let repo = Repository::seeded().unwrap();
        let elections = repo.elections();

        let found = elections.candidates_in_region("election-1", "ap", "kadapa", "kadapa-mandal");
        assert_eq!(
            ids(found.iter().copied(), |c| c.id.as_str()),
            vec!["candidate-1", "candidate-2"]
        );
        let winner = results::winner(found.iter().copied()).unwrap();
        assert_eq!(winner.name, "Rajesh Kumar");
        assert_eq!(winner.votes, 245);

        assert!(elections
            .candidates_in_region("election-1", "ap", "kadapa", "proddatur")
            .is_empty());
        assert!(elections
            .candidates_in_region("election-42", "ap", "kadapa", "kadapa-mandal")
            .is_empty());
    }

    #[test]
    fn seeded_past_results() {
        let repo = Repository::seeded().unwrap();
        let found = repo
            .elections()
            .candidates_in_region("election-2", "ap", "kadapa", "kadapa-mandal");
        // Authored order is 275 then 298.
        assert_eq!(
            ids(found.iter().copied(), |c| c.id.as_str()),
            vec!["candidate-19", "candidate-20"]
        );
        let ranked = results::ranked_by_votes(found.iter().copied());
        assert_eq!(
            ids(ranked, |c| c.id.as_str()),
            vec!["candidate-20", "candidate-19"]
        );
        assert!(matches!(
            results::outcome(found),
            Outcome::Winner(c) if c.id == "candidate-20"
        ));
    }

    #[test]
    fn seeded_candidates_outside_hierarchy_still_match() {
        init_logging();
        let repo = Repository::seeded().unwrap();
        assert!(repo.regions().mandals("tg", "rangareddy").iter().all(|m| m.id != "lb-nagar"));
        assert_eq!(
            repo.elections()
                .candidates_in_region("election-4", "tg", "rangareddy", "lb-nagar")
                .len(),
            4
        );
    }

    #[test]
    fn seeded_status_is_authored_not_derived() {
        let repo = Repository::seeded().unwrap();
        let election = repo.elections().by_id("election-1").unwrap();
        assert_eq!(election.status, ElectionStatus::Current);
        // The authored schedule is long over, but the status stands.
        assert_eq!(election.phase_at(chrono::Utc::now()), ElectionStatus::Past);
        assert!(!election.schedule_agrees(chrono::Utc::now()));
    }

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "states": [{{"id": "ap", "name": "Andhra Pradesh", "districts": []}}],
                "elections": []
            }}"#
        )
        .unwrap();

        let repo = Repository::from_path(file.path()).unwrap();
        assert_eq!(repo.regions().state_name("ap"), "Andhra Pradesh");
        assert!(repo.regions().districts("ap").is_empty());
        assert!(repo.elections().all().is_empty());
    }

    #[test]
    fn load_errors() {
        assert!(matches!(
            Repository::from_path("no/such/seed.json"),
            Err(Error::Io { .. })
        ));
        assert!(matches!(
            Repository::from_json("{\"states\": []}"),
            Err(Error::Seed(_))
        ));
        assert!(matches!(
            Repository::from_json(
                r#"{"states": [
                    {"id": "ap", "name": "A", "districts": []},
                    {"id": "ap", "name": "B", "districts": []}
                ], "elections": []}"#
            ),
            Err(Error::DuplicateId { scope: "state", .. })
        ));
    }

    #[test]
    fn config_selects_seed() {
        let repo = Repository::from_config(&Config::default()).unwrap();
        assert_eq!(repo.elections().all().len(), 5);
    }
}
