//! Tile matcher: the three-pass word filter

use super::policy::LengthPolicy;
use crate::core::{
    ConstraintError, FrequencyMap, PositionalConstraint, TilePool, normalize, parse_constraints,
};
use log::{debug, trace};

/// Finds the words playable from a tile pool under positional constraints
///
/// The supply available to a word is the tile pool plus one unit of every
/// constrained letter, since a constrained slot is assumed to be coverable.
#[derive(Debug, Clone)]
pub struct Matcher {
    tiles: TilePool,
    constraints: Vec<PositionalConstraint>,
    supply: FrequencyMap,
    policy: LengthPolicy,
    max_length: Option<usize>,
}

impl Matcher {
    /// Create a matcher with the default length policy and no length override
    #[must_use]
    pub fn new(tiles: TilePool, constraints: Vec<PositionalConstraint>) -> Self {
        let supply = tiles
            .letters()
            .iter()
            .copied()
            .chain(constraints.iter().map(PositionalConstraint::letter))
            .collect();

        Self {
            tiles,
            constraints,
            supply,
            policy: LengthPolicy::default(),
            max_length: None,
        }
    }

    /// Build a matcher straight from raw user input
    ///
    /// # Errors
    /// Returns `ConstraintError` if the constraint specification is malformed.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::matcher::Matcher;
    ///
    /// let matcher = Matcher::from_input("cart", Some("t,1")).unwrap();
    /// let words = ["cat", "car", "art", "tar", "cart"];
    /// assert_eq!(matcher.filter(&words), vec!["tar"]);
    /// ```
    pub fn from_input(tiles: &str, constraints: Option<&str>) -> Result<Self, ConstraintError> {
        let constraints = parse_constraints(constraints)?;
        Ok(Self::new(TilePool::parse(tiles), constraints))
    }

    /// Select the length admissibility rule
    #[must_use]
    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the computed length budget
    #[must_use]
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &TilePool {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[PositionalConstraint] {
        &self.constraints
    }

    /// Letters available to a word: tiles plus constraint letters
    #[inline]
    #[must_use]
    pub const fn supply(&self) -> &FrequencyMap {
        &self.supply
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Longest admissible word: the explicit override, else tiles + constraints
    #[must_use]
    pub fn length_budget(&self) -> usize {
        self.max_length
            .unwrap_or(self.tiles.len() + self.constraints.len())
    }

    /// Furthest constrained position, 0 without constraints
    #[must_use]
    pub fn reach(&self) -> usize {
        self.constraints
            .iter()
            .map(PositionalConstraint::position)
            .max()
            .unwrap_or(0)
    }

    /// Check a single word against all three passes
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        let normalized = normalize(word);
        self.admits_length(normalized.len())
            && self.matches_positions(&normalized)
            && self.has_supply(word, &normalized)
    }

    /// Return the playable words, preserving their order in `words`
    ///
    /// Entries are returned as given; normalization only affects comparison.
    pub fn filter<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Vec<&'w str> {
        debug!(
            "Matching {} words: tiles={} constraints={} budget={} reach={} policy={}",
            words.len(),
            self.tiles,
            self.constraints.len(),
            self.length_budget(),
            self.reach(),
            self.policy
        );

        let matches: Vec<&str> = words
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| self.is_match(word))
            .collect();

        debug!("Found {} matches", matches.len());
        matches
    }

    /// Pass 1: length admissibility under the selected policy
    ///
    /// Empty entries are never playable.
    fn admits_length(&self, len: usize) -> bool {
        len > 0 && self.policy.admits(len, self.length_budget(), self.reach())
    }

    /// Pass 2: every constraint that fits inside the word holds
    fn matches_positions(&self, word: &[char]) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied_by(word))
    }

    /// Pass 3: the word's letters are covered by the supply
    fn has_supply(&self, word: &str, normalized: &[char]) -> bool {
        let demand: FrequencyMap = normalized.iter().copied().collect();
        match self.supply.shortfall(&demand) {
            Some(letter) => {
                trace!("'{word}' needs more {letter} tiles than available");
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["cat", "car", "art", "tar", "cart"];

    fn matcher(tiles: &str, constraints: &str) -> Matcher {
        Matcher::from_input(tiles, Some(constraints)).unwrap()
    }

    #[test]
    fn all_words_from_matching_tiles() {
        let result = matcher("cart", "").filter(WORDS);
        assert_eq!(result, vec!["cat", "car", "art", "tar", "cart"]);
    }

    #[test]
    fn first_letter_constraint() {
        let result = matcher("cart", "t,1").filter(WORDS);
        assert_eq!(result, vec!["tar"]);
    }

    #[test]
    fn duplicate_letters_limited_by_supply() {
        let words = ["ab", "aab", "abb", "aabb", "aaab"];
        let m = matcher("aabb", "");
        assert_eq!(m.supply().count('A'), 2);
        assert_eq!(m.supply().count('B'), 2);
        assert_eq!(m.filter(&words), vec!["ab", "aab", "abb", "aabb"]);
    }

    #[test]
    fn constraint_letter_joins_supply() {
        let m = matcher("xyz", "q,2");
        assert_eq!(m.supply().count('Q'), 1);
        assert_eq!(m.length_budget(), 4);
        assert_eq!(m.filter(&["xq", "xqy"]), vec!["xq", "xqy"]);
    }

    #[test]
    fn constraint_letter_used_only_once() {
        // One Q from the constraint, none in the tiles
        let m = matcher("xyz", "q,2");
        assert!(!m.is_match("qq"));
    }

    #[test]
    fn vacuous_constraint_never_disqualifies() {
        // Position 6 is beyond every word in the list
        let result = matcher("cartz", "z,6").filter(WORDS);
        assert_eq!(result, WORDS.to_vec());
    }

    #[test]
    fn case_insensitive_comparison() {
        let words = ["Cat", "TAR", "aRt"];
        let result = matcher("C,A,R,T", "T,1").filter(&words);
        assert_eq!(result, vec!["TAR"]);
        let result = matcher("cart", "").filter(&words);
        assert_eq!(result, vec!["Cat", "TAR", "aRt"]);
    }

    #[test]
    fn missing_letter_rejects_word() {
        assert!(!matcher("cart", "").is_match("cats"));
    }

    #[test]
    fn empty_word_list_and_empty_entries() {
        let empty: [&str; 0] = [];
        assert!(matcher("cart", "").filter(&empty).is_empty());
        assert!(matcher("cart", "").filter(&["", "cat"]) == vec!["cat"]);
    }

    #[test]
    fn no_tiles_matches_nothing() {
        assert!(matcher("", "").filter(WORDS).is_empty());
    }

    #[test]
    fn max_length_override_supersedes_budget() {
        let m = matcher("cart", "").with_max_length(Some(3));
        assert_eq!(m.length_budget(), 3);
        assert_eq!(m.filter(WORDS), vec!["cat", "car", "art", "tar"]);
    }

    #[test]
    fn constraint_reach_policy_rejects_short_words() {
        let words = ["at", "cat", "cart"];
        let m = matcher("cart", "t,3").with_policy(LengthPolicy::ConstraintReach);
        assert_eq!(m.reach(), 3);
        assert_eq!(m.filter(&words), vec!["cat"]);

        // Under the default policy the short word slips through
        let m = matcher("cart", "t,3");
        assert_eq!(m.filter(&words), vec!["at", "cat"]);
    }

    #[test]
    fn both_policy_combines_bounds() {
        let words = ["at", "cat", "cart"];
        let m = matcher("cart", "t,3")
            .with_policy(LengthPolicy::Both)
            .with_max_length(Some(3));
        assert_eq!(m.filter(&words), vec!["cat"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let words: Vec<String> = WORDS.iter().map(ToString::to_string).collect();
        assert_eq!(matcher("cart", "c,1").filter(&words), vec!["cat", "car", "cart"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let m = matcher("cart", "a,2");
        let first = m.filter(WORDS);
        let second = m.filter(WORDS);
        assert_eq!(first, second);
        assert_eq!(m.filter(&first), first);
    }

    #[test]
    fn result_is_ordered_subsequence() {
        let words = ["tar", "zebra", "cart", "rat", "act", "quiz", "cat"];
        let result = matcher("cartz", "").filter(&words);

        let mut remaining = words.iter();
        for word in &result {
            assert!(remaining.any(|w| w == word), "'{word}' out of order");
        }
    }

    #[test]
    fn results_respect_supply_and_constraints() {
        let words = [
            "tact", "attract", "cat", "taco", "act", "tat", "rat", "art", "coat", "cot",
        ];
        let m = matcher("tacto", "a,2,t,3");
        let result = m.filter(&words);
        assert!(!result.is_empty());

        for word in result {
            let normalized = normalize(word);
            for &c in &normalized {
                let needed = normalized.iter().filter(|&&n| n == c).count();
                assert!(needed <= m.supply().count(c), "'{word}' overdraws {c}");
            }
            for constraint in m.constraints() {
                if constraint.applies_to(normalized.len()) {
                    assert_eq!(normalized[constraint.position() - 1], constraint.letter());
                }
            }
        }
    }

    #[test]
    fn filter_agrees_with_single_word_check() {
        let words = [
            "", "cat", "Cart", "tact", "taco", "attract", "quiz", "at", "a", "tat",
        ];
        for m in [
            matcher("tacto", "a,2,t,3"),
            matcher("cart", "t,3").with_policy(LengthPolicy::ConstraintReach),
            matcher("cart", "").with_max_length(Some(2)),
        ] {
            let expected: Vec<&str> = words.iter().copied().filter(|w| m.is_match(w)).collect();
            assert_eq!(m.filter(&words), expected);
        }
    }

    #[test]
    fn malformed_constraints_are_rejected_upfront() {
        assert!(Matcher::from_input("cart", Some("a,1,b")).is_err());
        assert!(Matcher::from_input("cart", None).is_ok());
    }
}
