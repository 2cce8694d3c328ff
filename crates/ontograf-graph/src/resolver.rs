//! Keyword → class resolution by approximate string matching

use crate::config::{ResolverConfig, SimilarityMetric};
use ontograf_core::model::EntityId;
use ontograf_core::store::OntologyStore;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of resolving a keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Resolution {
    Found {
        entity: EntityId,
        name: String,
        score: f64,
    },
    NotFound,
}

impl Resolution {
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Resolution::Found { entity, .. } => Some(*entity),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Ranked candidate name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub name: &'a str,
    pub score: f64,
}

/// Resolves free-text keywords to named classes
#[derive(Debug, Clone, Default)]
pub struct EntityResolver {
    config: ResolverConfig,
}

impl EntityResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Best-matching class for `keyword`, or `NotFound`
    pub fn resolve<S: OntologyStore + ?Sized>(&self, keyword: &str, store: &S) -> Resolution {
        let names = store.class_names();

        let ranked = self.rank(keyword, names.iter().map(String::as_str));
        let Some(best) = ranked.first() else {
            debug!("No class name close to '{}'", keyword);
            return Resolution::NotFound;
        };

        // A name shared by several classes maps to the first of them
        match store.class_named(best.name) {
            Some(entity) => {
                debug!("Resolved '{}' to '{}' (score {:.3})", keyword, best.name, best.score);
                Resolution::Found {
                    entity,
                    name: best.name.to_string(),
                    score: best.score,
                }
            }
            None => Resolution::NotFound,
        }
    }

    /// Candidates above the cutoff, best first
    pub fn rank<'a>(&self, keyword: &str, names: impl IntoIterator<Item = &'a str>) -> Vec<Candidate<'a>> {
        rank_candidates(
            keyword,
            names,
            self.config.max_candidates,
            self.config.cutoff,
            self.config.metric,
        )
    }
}

/// Up to `n` names scoring at least `cutoff` against `word` by sequence ratio,
/// best first
pub fn close_matches<'a>(
    word: &str,
    possibilities: impl IntoIterator<Item = &'a str>,
    n: usize,
    cutoff: f64,
) -> Vec<&'a str> {
    rank_candidates(word, possibilities, n, cutoff, SimilarityMetric::SequenceRatio)
        .into_iter()
        .map(|c| c.name)
        .collect()
}

fn rank_candidates<'a>(
    word: &str,
    possibilities: impl IntoIterator<Item = &'a str>,
    n: usize,
    cutoff: f64,
    metric: SimilarityMetric,
) -> Vec<Candidate<'a>> {
    if n == 0 {
        return Vec::new();
    }

    let word_chars: Vec<char> = word.chars().collect();
    let mut scored: Vec<Candidate<'a>> = possibilities
        .into_iter()
        .filter_map(|name| {
            let score = metric.score(name, word, &word_chars, cutoff)?;
            (score >= cutoff).then_some(Candidate { name, score })
        })
        .collect();

    // Highest score first; equal scores order by name, descending
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.name.cmp(a.name))
    });
    scored.truncate(n);
    scored
}

impl SimilarityMetric {
    /// Score of `candidate` against `word`; `None` when a cheap upper bound
    /// already rules it out
    fn score(&self, candidate: &str, word: &str, word_chars: &[char], cutoff: f64) -> Option<f64> {
        match self {
            SimilarityMetric::SequenceRatio => {
                let candidate_chars: Vec<char> = candidate.chars().collect();
                if real_quick_ratio(&candidate_chars, word_chars) < cutoff
                    || quick_ratio(&candidate_chars, word_chars) < cutoff
                {
                    return None;
                }
                Some(ratio(&candidate_chars, word_chars))
            }
            SimilarityMetric::JaroWinkler => Some(strsim::jaro_winkler(candidate, word)),
            SimilarityMetric::NormalizedLevenshtein => Some(strsim::normalized_levenshtein(candidate, word)),
        }
    }
}

/// Ratcliff/Obershelp similarity: 2·M / T
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

fn ratio_of(matches: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total as f64
    }
}

fn ratio(a: &[char], b: &[char]) -> f64 {
    ratio_of(matching_characters(a, b), a.len() + b.len())
}

/// Upper bound from lengths alone
fn real_quick_ratio(a: &[char], b: &[char]) -> f64 {
    ratio_of(a.len().min(b.len()), a.len() + b.len())
}

/// Upper bound from the character multiset intersection
fn quick_ratio(a: &[char], b: &[char]) -> f64 {
    let mut available: HashMap<char, usize> = HashMap::new();
    for c in b {
        *available.entry(*c).or_insert(0) += 1;
    }
    let mut matches = 0;
    for c in a {
        if let Some(count) = available.get_mut(c) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }
    ratio_of(matches, a.len() + b.len())
}

/// Total size of the matching blocks: longest common run, then recurse on
/// both sides of it
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest common run in `a[alo..ahi]` / `b[blo..bhi]`; earliest in `a`, then
/// earliest in `b`, among equally long runs
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    let width = bhi - blo + 1;
    let mut previous = vec![0usize; width];
    let mut current = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let k = previous[slot - 1] + 1;
                current[slot] = k;
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            } else {
                current[slot] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ratio() {
        assert_eq!(sequence_ratio("Pizza", "Pizza"), 1.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("abc", ""), 0.0);
        // 5 matching of 11 characters
        assert!((sequence_ratio("Pizza", "Pizzza") - 10.0 / 11.0).abs() < 1e-9);
        assert!((sequence_ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_matching_blocks_recurse_both_sides() {
        // "ab" + "cd" around a mismatch
        let a: Vec<char> = "abXcd".chars().collect();
        let b: Vec<char> = "abYcd".chars().collect();
        assert_eq!(matching_characters(&a, &b), 4);
    }

    #[test]
    fn test_close_matches_classic_example() {
        let words = ["ape", "apple", "peach", "puppy"];
        assert_eq!(close_matches("appel", words, 3, 0.6), vec!["apple", "ape"]);
    }

    #[test]
    fn test_close_matches_limits_and_cutoff() {
        let words = ["Pizza", "PizzaBase", "PizzaTopping", "Xyz"];
        assert_eq!(close_matches("Pizza", words, 1, 0.6), vec!["Pizza"]);
        assert!(close_matches("Xyzzy", ["Pizza"], 3, 0.6).is_empty());
        assert!(close_matches("Pizza", words, 0, 0.6).is_empty());
    }

    #[test]
    fn test_ties_prefer_larger_name() {
        let ranked = rank_candidates("ab", ["ac", "ad"], 3, 0.0, SimilarityMetric::SequenceRatio);
        let names: Vec<_> = ranked.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["ad", "ac"]);
    }

    #[test]
    fn test_shared_name_resolves_to_first_class() {
        let mut onto = ontograf_store::MemoryOntology::new();
        let first = onto.add_class_with_iri("http://a.org#Pizza", "Pizza");
        onto.add_class_with_iri("http://b.org#Pizza", "Pizza");

        let resolution = EntityResolver::default().resolve("Piza", &onto);
        assert_eq!(resolution.entity(), Some(first));
    }

    #[test]
    fn test_strsim_metrics() {
        let config = ResolverConfig {
            metric: SimilarityMetric::JaroWinkler,
            ..ResolverConfig::default()
        };
        let resolver = EntityResolver::new(config);
        let ranked = resolver.rank("Pizzza", ["Pizza", "Topping"]);
        assert_eq!(ranked[0].name, "Pizza");

        let config = ResolverConfig {
            metric: SimilarityMetric::NormalizedLevenshtein,
            ..ResolverConfig::default()
        };
        let resolver = EntityResolver::new(config);
        assert!(resolver.rank("Xyzzy", ["Pizza"]).is_empty());
    }
}
