//! Decoding a bit stream back into text.
//!
//! The inverse of a [`CodeMap`] is a binary trie whose leaves are symbols.
//! Building the trie also checks that the codes are prefix-free.

use crate::code::Code;
use crate::code_map::CodeMap;
use crate::error::{HuffmanError, Result};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct TrieKey;
}

#[derive(Debug, Clone, Copy)]
enum TrieNode {
    Branch {
        zero: Option<TrieKey>,
        one: Option<TrieKey>,
    },
    Leaf(char),
}

impl TrieNode {
    fn empty_branch() -> Self {
        TrieNode::Branch {
            zero: None,
            one: None,
        }
    }
}

/// Decodes bit streams produced with a given code map.
#[derive(Debug, Clone)]
pub struct Decoder {
    nodes: SlotMap<TrieKey, TrieNode>,
    root: TrieKey,
}

impl Decoder {
    /// Builds the decoding trie for `codes`.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidCodeMap`] if a code is empty, two
    /// symbols share a code, or one code is a prefix of another.
    pub fn new(codes: &CodeMap) -> Result<Self> {
        Self::from_codes(codes.iter())
    }

    pub(crate) fn from_codes<'a, I>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, &'a Code)>,
    {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(TrieNode::empty_branch());

        for (symbol, code) in codes {
            if code.is_empty() {
                return Err(HuffmanError::InvalidCodeMap(format!(
                    "symbol {symbol:?} has an empty code"
                )));
            }

            let mut current = root;
            for &bit in code.bits() {
                let next = match nodes[current] {
                    TrieNode::Leaf(other) => {
                        return Err(HuffmanError::InvalidCodeMap(format!(
                            "code for {other:?} is a prefix of code {code} for {symbol:?}"
                        )));
                    }
                    TrieNode::Branch { zero, one } => {
                        if bit {
                            one
                        } else {
                            zero
                        }
                    }
                };

                current = match next {
                    Some(key) => key,
                    None => {
                        let key = nodes.insert(TrieNode::empty_branch());
                        if let TrieNode::Branch { zero, one } = &mut nodes[current] {
                            if bit {
                                *one = Some(key);
                            } else {
                                *zero = Some(key);
                            }
                        }
                        key
                    }
                };
            }

            let end = nodes[current];
            match end {
                TrieNode::Leaf(other) => {
                    return Err(HuffmanError::InvalidCodeMap(format!(
                        "{other:?} and {symbol:?} share code {code}"
                    )));
                }
                TrieNode::Branch {
                    zero: None,
                    one: None,
                } => nodes[current] = TrieNode::Leaf(symbol),
                TrieNode::Branch { .. } => {
                    return Err(HuffmanError::InvalidCodeMap(format!(
                        "code {code} for {symbol:?} is a prefix of another code"
                    )));
                }
            }
        }

        Ok(Self { nodes, root })
    }

    /// Decodes `bits` into text.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::UnknownCode`] if the bits leave the trie and
    /// [`HuffmanError::TruncatedCode`] if they end inside a codeword.
    pub fn decode(&self, bits: &[bool]) -> Result<String> {
        let mut text = String::new();
        let mut current = self.root;
        let mut codeword_start = 0;

        for (position, &bit) in bits.iter().enumerate() {
            // Leaves are consumed as soon as they are reached, so `current`
            // is always a branch here.
            let next = match self.nodes[current] {
                TrieNode::Branch { zero, one } => {
                    if bit {
                        one
                    } else {
                        zero
                    }
                }
                TrieNode::Leaf(_) => None,
            };
            let next = next.ok_or(HuffmanError::UnknownCode { position })?;

            if let TrieNode::Leaf(symbol) = self.nodes[next] {
                text.push(symbol);
                current = self.root;
                codeword_start = position + 1;
            } else {
                current = next;
            }
        }

        if current != self.root {
            return Err(HuffmanError::TruncatedCode {
                position: codeword_start,
            });
        }

        Ok(text)
    }
}
