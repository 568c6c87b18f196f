//! Winners and rankings over a subset of candidates.
//!
//! Ties are resolved in favour of the candidate met first in iteration
//! order. Callers that care should check [`is_tie`] or use [`outcome`].

use crate::model::election::Candidate;

/// The result of a contest between a set of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    NoCandidates,
    Winner(&'a Candidate),
    /// Several candidates share the top vote count, in input order.
    Tie(Vec<&'a Candidate>),
}

/// The candidate with the most votes, or `None` for an empty input.
pub fn winner<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Option<&'a Candidate> {
    candidates
        .into_iter()
        .fold(None, |best: Option<&'a Candidate>, candidate| match best {
            Some(best) if best.votes >= candidate.votes => Some(best),
            _ => Some(candidate),
        })
}

/// Stable sort, most votes first. Equal counts keep their input order.
pub fn ranked_by_votes<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Vec<&'a Candidate> {
    let mut ranked: Vec<_> = candidates.into_iter().collect();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked
}

/// Every candidate sharing the maximum vote count, in input order.
pub fn leaders<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Vec<&'a Candidate> {
    let candidates: Vec<_> = candidates.into_iter().collect();
    let Some(top) = candidates.iter().map(|c| c.votes).max() else {
        return Vec::new();
    };
    candidates.into_iter().filter(|c| c.votes == top).collect()
}

pub fn is_tie<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> bool {
    leaders(candidates).len() > 1
}

pub fn outcome<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Outcome<'a> {
    let mut leaders = leaders(candidates);
    match leaders.len() {
        0 => Outcome::NoCandidates,
        1 => Outcome::Winner(leaders.remove(0)),
        _ => Outcome::Tie(leaders),
    }
}
