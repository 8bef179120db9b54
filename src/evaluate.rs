//! Measuring a text under a Huffman code against fixed-width baselines.

use crate::code_map::CodeMap;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use ahash::AHashSet as HashSet;
use std::borrow::Cow;

/// Fixed-width encoding a Huffman code is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BaselineMode {
    /// Eight bits per character.
    #[default]
    Fixed8Bit,

    /// The fewest bits that give every distinct character of the text its
    /// own codeword: `ceil(log2(distinct))`, at least one.
    MinimumFixedWidth,
}

impl BaselineMode {
    /// Width in bits of one character for a text with `distinct` symbols.
    pub fn bits_per_symbol(self, distinct: usize) -> u32 {
        match self {
            BaselineMode::Fixed8Bit => 8,
            BaselineMode::MinimumFixedWidth => minimum_fixed_width(distinct),
        }
    }
}

/// `ceil(log2(distinct))`, with a single symbol still taking one bit.
pub fn minimum_fixed_width(distinct: usize) -> u32 {
    match distinct {
        0 => 0,
        1 => 1,
        n => usize::BITS - (n - 1).leading_zeros(),
    }
}

/// Size of `text` under the fixed-width encoding `mode`.
pub fn baseline_bits(text: &str, mode: BaselineMode) -> u64 {
    let distinct: HashSet<char> = text.chars().collect();
    let length = text.chars().count() as u64;
    length * mode.bits_per_symbol(distinct.len()) as u64
}

/// Percentage of `reference` bits saved by using `candidate` bits instead.
///
/// Negative when the candidate is larger; zero when the reference is empty.
pub fn percent_saved(reference: u64, candidate: u64) -> f64 {
    if reference == 0 {
        0.0
    } else {
        (reference as f64 - candidate as f64) / reference as f64 * 100.0
    }
}

/// Computes baseline and Huffman bit counts for texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    mode: BaselineMode,
}

impl Evaluator {
    pub fn new(mode: BaselineMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BaselineMode {
        self.mode
    }

    /// Builds a code map from `text` itself and measures `text` with it.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidInput`] if `text` is empty.
    pub fn evaluate(&self, text: &str) -> Result<Evaluation<'static>> {
        let frequencies = FrequencyTable::from_text(text);
        if frequencies.is_empty() {
            return Err(HuffmanError::InvalidInput);
        }

        let tree = HuffmanTree::build(&frequencies)?;
        let code_map = CodeMap::from_tree(&tree);
        let baseline_bits =
            frequencies.total() * self.mode.bits_per_symbol(frequencies.len()) as u64;

        let evaluation = Evaluation {
            mode: self.mode,
            baseline_bits,
            huffman_bits: tree.encoded_bits(),
            skipped_symbols: 0,
            unencodable: Vec::new(),
            code_map: Cow::Owned(code_map),
        };
        evaluation.log();
        Ok(evaluation)
    }

    /// Measures `text` with a code map trained elsewhere.
    ///
    /// Characters of `text` that have no code in `code_map` add nothing to
    /// the Huffman count but are still counted in the baseline; they are
    /// reported in [`Evaluation::skipped_symbols`] and
    /// [`Evaluation::unencodable`]. The code map is not modified.
    pub fn evaluate_with<'a>(&self, text: &str, code_map: &'a CodeMap) -> Evaluation<'a> {
        let measurement = code_map.measure(text);

        let evaluation = Evaluation {
            mode: self.mode,
            baseline_bits: baseline_bits(text, self.mode),
            huffman_bits: measurement.bits,
            skipped_symbols: measurement.skipped,
            unencodable: measurement.unencodable,
            code_map: Cow::Borrowed(code_map),
        };
        evaluation.log();
        evaluation
    }
}

/// Bit counts of one text under a baseline and a Huffman code.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    /// Baseline the text was measured against
    pub mode: BaselineMode,
    /// Size under the fixed-width baseline
    pub baseline_bits: u64,
    /// Size under the Huffman code, excluding skipped characters
    pub huffman_bits: u64,
    /// Characters left out of `huffman_bits` for lack of a code
    pub skipped_symbols: u64,
    /// Distinct characters without a code, in order of first occurrence
    pub unencodable: Vec<char>,
    code_map: Cow<'a, CodeMap>,
}

impl Evaluation<'_> {
    /// The code map that was applied, built fresh or supplied by the caller.
    pub fn code_map(&self) -> &CodeMap {
        &self.code_map
    }

    /// Takes the applied code map, cloning it if it was borrowed.
    pub fn into_code_map(self) -> CodeMap {
        self.code_map.into_owned()
    }

    /// Baseline bits minus Huffman bits.
    pub fn bits_saved(&self) -> i64 {
        self.baseline_bits as i64 - self.huffman_bits as i64
    }

    /// Share of the baseline saved by the Huffman code, in percent.
    pub fn percent_saved(&self) -> f64 {
        percent_saved(self.baseline_bits, self.huffman_bits)
    }

    fn log(&self) {
        tracing::debug!(
            mode = ?self.mode,
            baseline_bits = self.baseline_bits,
            huffman_bits = self.huffman_bits,
            skipped = self.skipped_symbols,
            "evaluated text"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_fixed_width() {
        assert_eq!(minimum_fixed_width(0), 0);
        assert_eq!(minimum_fixed_width(1), 1);
        assert_eq!(minimum_fixed_width(2), 1);
        assert_eq!(minimum_fixed_width(3), 2);
        assert_eq!(minimum_fixed_width(4), 2);
        assert_eq!(minimum_fixed_width(5), 3);
        assert_eq!(minimum_fixed_width(8), 3);
        assert_eq!(minimum_fixed_width(9), 4);
        assert_eq!(minimum_fixed_width(256), 8);
        assert_eq!(minimum_fixed_width(257), 9);
    }

    #[test]
    fn test_baseline_bits() {
        assert_eq!(baseline_bits("abab", BaselineMode::Fixed8Bit), 32);
        assert_eq!(baseline_bits("abab", BaselineMode::MinimumFixedWidth), 4);
        assert_eq!(baseline_bits("abcdeabcde", BaselineMode::MinimumFixedWidth), 30);
        assert_eq!(baseline_bits("zzzz", BaselineMode::MinimumFixedWidth), 4);
        assert_eq!(baseline_bits("", BaselineMode::MinimumFixedWidth), 0);
        // Characters, not bytes
        assert_eq!(baseline_bits("éé", BaselineMode::Fixed8Bit), 16);
    }

    #[test]
    fn test_classic_scenario() {
        let evaluation = Evaluator::default().evaluate("aaaabbbccd").unwrap();
        assert_eq!(evaluation.baseline_bits, 80);
        assert_eq!(evaluation.huffman_bits, 19);
        assert!(evaluation.huffman_bits < evaluation.baseline_bits);
        assert_eq!(evaluation.code_map().code('a').map(|c| c.len()), Some(1));
        assert_eq!(evaluation.bits_saved(), 61);
    }

    #[test]
    fn test_classic_scenario_minimum_width() {
        let evaluator = Evaluator::new(BaselineMode::MinimumFixedWidth);
        let evaluation = evaluator.evaluate("aaaabbbccd").unwrap();
        assert_eq!(evaluation.baseline_bits, 20);
        assert_eq!(evaluation.huffman_bits, 19);
    }

    #[test]
    fn test_single_symbol_text() {
        let evaluation = Evaluator::default().evaluate("zzzz").unwrap();
        assert_eq!(evaluation.huffman_bits, 4);
        assert_eq!(evaluation.baseline_bits, 32);
        assert_eq!(evaluation.code_map().len(), 1);

        let evaluation = Evaluator::new(BaselineMode::MinimumFixedWidth)
            .evaluate("zzzz")
            .unwrap();
        assert_eq!(evaluation.baseline_bits, 4);
        assert_eq!(evaluation.huffman_bits, 4);
    }

    #[test]
    fn test_empty_text_is_invalid() {
        assert_eq!(
            Evaluator::default().evaluate("").unwrap_err(),
            HuffmanError::InvalidInput
        );
    }

    #[test]
    fn test_evaluate_with_supplied_map() {
        let code_map = CodeMap::from_text("aaaabbbccd").unwrap();
        let evaluation = Evaluator::default().evaluate_with("abcdx", &code_map);

        assert_eq!(evaluation.baseline_bits, 40);
        assert_eq!(evaluation.huffman_bits, 1 + 2 + 3 + 3);
        assert_eq!(evaluation.skipped_symbols, 1);
        assert_eq!(evaluation.unencodable, vec!['x']);
        assert_eq!(evaluation.code_map(), &code_map);
    }

    #[test]
    fn test_evaluate_with_empty_text() {
        let code_map = CodeMap::from_text("ab").unwrap();
        let evaluation = Evaluator::new(BaselineMode::MinimumFixedWidth).evaluate_with("", &code_map);
        assert_eq!(evaluation.baseline_bits, 0);
        assert_eq!(evaluation.huffman_bits, 0);
        assert_eq!(evaluation.percent_saved(), 0.0);
    }

    #[test]
    fn test_matches_supplied_map_from_same_text() {
        let text = "it was the best of times, it was the worst of times";
        let fresh = Evaluator::default().evaluate(text).unwrap();
        let code_map = fresh.code_map().clone();
        let reused = Evaluator::default().evaluate_with(text, &code_map);

        assert_eq!(fresh.baseline_bits, reused.baseline_bits);
        assert_eq!(fresh.huffman_bits, reused.huffman_bits);
        assert_eq!(reused.skipped_symbols, 0);
    }

    #[test]
    fn test_shared_code_over_merged_corpora() {
        let mut frequencies = FrequencyTable::from_text("the cat sat on the mat");
        frequencies.merge(&FrequencyTable::from_text("a dog ate my homework"));
        let shared = CodeMap::from_frequencies(&frequencies).unwrap();

        let text = "the dog sat";
        let specific = Evaluator::default().evaluate(text).unwrap();
        let averaged = Evaluator::default().evaluate_with(text, &shared);

        assert_eq!(averaged.skipped_symbols, 0);
        assert!(specific.huffman_bits <= averaged.huffman_bits);
    }

    #[test]
    fn test_percent_saved() {
        assert_eq!(percent_saved(0, 10), 0.0);
        assert_eq!(percent_saved(80, 20), 75.0);
        assert_eq!(percent_saved(10, 20), -100.0);

        let evaluation = Evaluator::default().evaluate("aaaabbbccd").unwrap();
        let expected = (80.0 - 19.0) / 80.0 * 100.0;
        assert!((evaluation.percent_saved() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_into_code_map() {
        let evaluation = Evaluator::default().evaluate("hello").unwrap();
        let code_map = evaluation.into_code_map();
        assert_eq!(code_map.len(), 4);
    }
}
