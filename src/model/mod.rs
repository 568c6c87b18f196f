//! The voting domain: regions, elections, sessions and results.

use std::collections::HashSet;

use crate::error::{Error, Result};

pub mod election;
pub mod forms;
pub mod region;
pub mod repository;
pub mod results;
pub mod session;

/// Check that no id appears twice within one parent scope.
pub(crate) fn ensure_unique<'a>(
    scope: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId {
                scope,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_reported() {
        assert!(ensure_unique("state", ["ap", "tg"]).is_ok());
        assert!(ensure_unique("state", []).is_ok());

        match ensure_unique("mandal", ["puttur", "tirupati", "puttur"]) {
            Err(Error::DuplicateId { scope, id }) => {
                assert_eq!(scope, "mandal");
                assert_eq!(id, "puttur");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }
}
