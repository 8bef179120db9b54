//! # Huffman - Prefix Codes and Bit-Count Comparison
//!
//! Builds Huffman codes over the characters of a text and measures how many
//! bits the text takes under them, compared with a fixed-width encoding.
//!
//! The engine has four stages:
//! 1. **Counting**: [`FrequencyTable`] tallies every character
//! 2. **Tree building**: [`HuffmanTree`] repeatedly merges the two lightest nodes
//! 3. **Code derivation**: [`CodeMap`] walks the tree, `0` left and `1` right
//! 4. **Evaluation**: [`Evaluator`] reports baseline and Huffman bit counts
//!
//! ## Example
//!
//! ```
//! use huffman_rs::{BaselineMode, CodeMap, Evaluator};
//!
//! let evaluation = Evaluator::new(BaselineMode::Fixed8Bit)
//!     .evaluate("aaaabbbccd")
//!     .unwrap();
//! assert_eq!(evaluation.baseline_bits, 80);
//! assert_eq!(evaluation.huffman_bits, 19);
//!
//! // A code trained on one text can be applied to another.
//! let trained = CodeMap::from_text("abracadabra").unwrap();
//! let other = Evaluator::default().evaluate_with("cadaver", &trained);
//! assert_eq!(other.unencodable, vec!['v', 'e']);
//! ```
//!
//! ## Performance
//!
//! - O(n) counting and evaluation in the text length
//! - O(k log k) tree building for k distinct characters
//! - Tree and decoder nodes live in a SlotMap arena

mod code;
mod code_map;
mod decode;
mod error;
mod evaluate;
mod frequency;
mod node;
mod tree;


pub use code::Code;
pub use code_map::{CodeMap, Encoded, Measurement};
pub use decode::Decoder;
pub use error::{HuffmanError, Result};
pub use evaluate::{
    baseline_bits, minimum_fixed_width, percent_saved, BaselineMode, Evaluation, Evaluator,
};
pub use frequency::FrequencyTable;
pub use node::{Node, NodeKey};
pub use tree::HuffmanTree;
