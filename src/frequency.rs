use ahash::AHashMap as HashMap;

/// Occurrence counts for every distinct symbol of a text.
///
/// Every stored count is positive. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<char, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every character of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Adds `count` occurrences of `symbol`. A zero count is ignored.
    pub fn insert(&mut self, symbol: char, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(symbol).or_insert(0) += count;
    }

    /// Adds the counts of `other` into this table.
    ///
    /// Training one code over several corpora this way gives the same table
    /// as counting their concatenation.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (&symbol, &count) in &other.counts {
            self.insert(symbol, count);
        }
    }

    /// Returns the count for `symbol`, if it occurred.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no symbols have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted text in characters.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over `(symbol, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Distinct symbols in ascending order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.counts.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Entries sorted by descending count, ties broken by ascending symbol.
    pub fn most_common(&self) -> Vec<(char, u64)> {
        let mut entries: Vec<(char, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<char> for FrequencyTable {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for symbol in iter {
            *self.counts.entry(symbol).or_insert(0) += 1;
        }
    }
}
