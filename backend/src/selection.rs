//! Exercise selection pipeline
//!
//! Turns a raw, possibly redundant upstream result set into a curated,
//! bounded, varied subset. The pipeline is a fixed sequence of named stages
//! so each one is unit-testable on its own:
//!
//! dedupe -> partition-by-predicate -> shuffle-each -> concatenate-in-priority-order -> truncate

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicates by key, keeping the first occurrence
pub fn dedupe_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Split into (matching, non-matching), preserving relative order
pub fn partition_by<T, F>(items: Vec<T>, predicate: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> bool,
{
    items.into_iter().partition(|item| predicate(item))
}

/// Uniform in-place shuffle with an explicit RNG
pub fn shuffle_with<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Concatenate priority items first, then the rest, truncated to `cap`
pub fn concat_truncate<T>(priority: Vec<T>, rest: Vec<T>, cap: usize) -> Vec<T> {
    priority.into_iter().chain(rest).take(cap).collect()
}

/// Full curation pipeline over a raw result set.
///
/// A fresh random sequence per call; no shared randomness state.
pub fn curate<T, K, KF, PF>(raw: Vec<T>, key: KF, prioritize: PF, cap: usize) -> Vec<T>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    PF: Fn(&T) -> bool,
{
    curate_with(raw, key, prioritize, cap, &mut rand::thread_rng())
}

/// Curation pipeline with an injected RNG, for deterministic tests
pub fn curate_with<T, K, KF, PF, R>(
    raw: Vec<T>,
    key: KF,
    prioritize: PF,
    cap: usize,
    rng: &mut R,
) -> Vec<T>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    PF: Fn(&T) -> bool,
    R: Rng,
{
    let unique = dedupe_by_key(raw, key);
    let (mut priority, mut rest) = partition_by(unique, prioritize);
    shuffle_with(&mut priority, rng);
    shuffle_with(&mut rest, rng);
    concat_truncate(priority, rest, cap)
}
