use crate::code::Code;
use crate::decode::Decoder;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::node::Node;
use crate::tree::HuffmanTree;
use ahash::{AHashMap as HashMap, AHashSet as HashSet};
use std::collections::BTreeMap;

/// Mapping from symbol to its prefix-free codeword.
///
/// Built once from a tree (or accepted from outside through
/// [`CodeMap::from_codes`]) and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "BTreeMap<char, Code>", try_from = "BTreeMap<char, Code>")
)]
pub struct CodeMap {
    codes: HashMap<char, Code>,
}

impl CodeMap {
    /// Derives the code of every leaf by walking the tree: `0` for each left
    /// branch, `1` for each right branch.
    ///
    /// A tree that is a single leaf gives its symbol the code `0`, since an
    /// empty codeword cannot be written out or decoded.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::default();
        let mut stack = vec![(tree.root(), Code::new())];

        while let Some((key, code)) = stack.pop() {
            match tree[key] {
                Node::Leaf { symbol, .. } => {
                    let code = if code.is_empty() {
                        code.with_bit(false)
                    } else {
                        code
                    };
                    codes.insert(symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    stack.push((right, code.with_bit(true)));
                    stack.push((left, code.with_bit(false)));
                }
            }
        }

        tracing::debug!(symbols = codes.len(), "derived code map");

        Self { codes }
    }

    /// Builds the tree for `frequencies` and derives its code map.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        HuffmanTree::build(frequencies).map(|tree| Self::from_tree(&tree))
    }

    /// Counts `text`, builds its tree and derives its code map.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidInput`] if `text` is empty.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_text(text))
    }

    /// Accepts a code map produced elsewhere, e.g. loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidCodeMap`] if the map is empty, a code is
    /// empty, or the codes are not prefix-free.
    pub fn from_codes<I>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, Code)>,
    {
        let mut map = HashMap::default();
        for (symbol, code) in codes {
            if map.insert(symbol, code).is_some() {
                return Err(HuffmanError::InvalidCodeMap(format!(
                    "symbol {symbol:?} appears twice"
                )));
            }
        }
        if map.is_empty() {
            return Err(HuffmanError::InvalidCodeMap("no codes".to_string()));
        }

        let code_map = Self { codes: map };
        code_map.decoder()?;
        Ok(code_map)
    }

    /// The code for `symbol`, if it has one.
    pub fn code(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over `(symbol, code)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Returns true if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        self.decoder().is_ok()
    }

    /// Builds the decoder for this map.
    pub fn decoder(&self) -> Result<Decoder> {
        Decoder::new(self)
    }

    /// Encodes `text` into a bit stream.
    ///
    /// Symbols without a code are skipped and listed in
    /// [`Encoded::unencodable`]; the stream then decodes to the text with
    /// those symbols removed.
    pub fn encode(&self, text: &str) -> Encoded {
        let mut bits = Vec::new();
        let mut skipped = Skipped::default();

        for symbol in text.chars() {
            match self.codes.get(&symbol) {
                Some(code) => bits.extend_from_slice(code.bits()),
                None => skipped.record(symbol),
            }
        }

        Encoded {
            bits,
            skipped: skipped.count,
            unencodable: skipped.symbols,
        }
    }

    /// Counts the bits [`encode`](Self::encode) would produce, without
    /// building the stream.
    pub fn measure(&self, text: &str) -> Measurement {
        let mut bits = 0u64;
        let mut skipped = Skipped::default();

        for symbol in text.chars() {
            match self.codes.get(&symbol) {
                Some(code) => bits += code.len() as u64,
                None => skipped.record(symbol),
            }
        }

        Measurement {
            bits,
            skipped: skipped.count,
            unencodable: skipped.symbols,
        }
    }
}

impl From<CodeMap> for BTreeMap<char, Code> {
    fn from(code_map: CodeMap) -> Self {
        code_map.codes.into_iter().collect()
    }
}

impl TryFrom<BTreeMap<char, Code>> for CodeMap {
    type Error = HuffmanError;

    fn try_from(codes: BTreeMap<char, Code>) -> Result<Self> {
        Self::from_codes(codes)
    }
}

/// A text encoded with a code map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// Concatenated codewords
    pub bits: Vec<bool>,
    /// Occurrences left out because their symbol has no code
    pub skipped: u64,
    /// Distinct symbols without a code, in order of first occurrence
    pub unencodable: Vec<char>,
}

/// Size of a text under a code map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Sum of the code lengths of every encodable occurrence
    pub bits: u64,
    /// Occurrences left out because their symbol has no code
    pub skipped: u64,
    /// Distinct symbols without a code, in order of first occurrence
    pub unencodable: Vec<char>,
}

#[derive(Default)]
struct Skipped {
    seen: HashSet<char>,
    symbols: Vec<char>,
    count: u64,
}

impl Skipped {
    fn record(&mut self, symbol: char) {
        self.count += 1;
        if self.seen.insert(symbol) {
            tracing::trace!(?symbol, "no code for symbol, skipping");
            self.symbols.push(symbol);
        }
    }
}
