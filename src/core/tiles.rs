//! Tile pool representation and case normalization

use std::fmt;

/// Uppercase a single character, keeping it as-is when its uppercase form
/// expands to more than one character (e.g. `ß`).
///
/// Keeping the mapping one-to-one means positions in a normalized word line up
/// with positions in the original entry.
#[inline]
#[must_use]
pub fn normalize_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Normalize text for comparison against tiles and constraints
///
/// # Examples
/// ```
/// use scrabbler::core::normalize;
///
/// assert_eq!(normalize("Cart"), vec!['C', 'A', 'R', 'T']);
/// ```
#[must_use]
pub fn normalize(text: &str) -> Vec<char> {
    text.chars().map(normalize_char).collect()
}

/// The multiset of letters a player currently holds
///
/// Commas and whitespace in the raw input are ignored; every other character
/// becomes one tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TilePool {
    letters: Vec<char>,
}

impl TilePool {
    /// Parse a free-form tile string such as `"c,a,r,t"` or `"cart"`
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::TilePool;
    ///
    /// let tiles = TilePool::parse("c, a,r t");
    /// assert_eq!(tiles.len(), 4);
    /// assert_eq!(tiles.to_string(), "CART");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let letters = raw
            .chars()
            .filter(|&c| c != ',' && !c.is_whitespace())
            .map(normalize_char)
            .collect();

        Self { letters }
    }

    /// Normalized tiles in input order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of tiles held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for TilePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
