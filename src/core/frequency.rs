//! Character frequency accounting
//!
//! A `FrequencyMap` counts how often each character occurs in a sequence. The
//! matcher builds one for the available supply (tiles plus constraint letters)
//! and one per candidate word, then checks that supply covers demand.

use rustc_hash::FxHashMap;

/// Mapping from character to exact occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: FxHashMap<char, usize>,
}

impl FrequencyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `c`
    #[inline]
    pub fn add(&mut self, c: char) {
        *self.counts.entry(c).or_insert(0) += 1;
    }

    /// Occurrences of `c` (zero if absent)
    #[inline]
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Check that this supply can satisfy `demand`
    ///
    /// Every character of `demand` must be present here with at least the same
    /// count. A character missing from the supply fails immediately.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::FrequencyMap;
    ///
    /// let supply: FrequencyMap = "AABB".chars().collect();
    /// assert!(supply.covers(&"AAB".chars().collect()));
    /// assert!(!supply.covers(&"AAAB".chars().collect()));
    /// assert!(!supply.covers(&"ABC".chars().collect()));
    /// ```
    #[must_use]
    pub fn covers(&self, demand: &Self) -> bool {
        self.shortfall(demand).is_none()
    }

    /// First character of `demand` this supply cannot cover, if any
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::FrequencyMap;
    ///
    /// let supply: FrequencyMap = "CART".chars().collect();
    /// assert_eq!(supply.shortfall(&"CAT".chars().collect()), None);
    /// assert_eq!(supply.shortfall(&"CATS".chars().collect()), Some('S'));
    /// ```
    #[must_use]
    pub fn shortfall(&self, demand: &Self) -> Option<char> {
        demand
            .counts
            .iter()
            .find(|&(c, &needed)| self.count(*c) < needed)
            .map(|(&c, _)| c)
    }
}

impl FromIterator<char> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Extend<char> for FrequencyMap {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.add(c);
        }
    }
}
