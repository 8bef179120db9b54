use huffman_rs::{percent_saved, BaselineMode, CodeMap, Evaluator, FrequencyTable};
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Compares fixed-width and Huffman encodings of a text file.
///
/// Usage: cargo run --example compare <text> [training files...]
///
/// With training files, a shared code is built from all of them and applied
/// to <text> alongside the code built from <text> itself.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <text> [training files...]", args[0]);
        std::process::exit(1);
    }

    let read = |path: &str| {
        fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Cannot read \"{}\": {}", path, e);
            std::process::exit(1);
        })
    };

    let text = read(&args[1]);

    let ascii = Evaluator::new(BaselineMode::Fixed8Bit);
    let minimal = Evaluator::new(BaselineMode::MinimumFixedWidth);

    let specific = match minimal.evaluate(&text) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("Cannot encode \"{}\": {}", args[1], e);
            std::process::exit(1);
        }
    };
    let ascii_bits = huffman_rs::baseline_bits(&text, ascii.mode());
    let minimal_bits = specific.baseline_bits;

    println!("=== {} ===", args[1]);
    println!("8-bit encoding: {}", ascii_bits);
    println!("Minimum bit-length encoding: {}", minimal_bits);

    if args.len() > 2 {
        let mut frequencies = FrequencyTable::new();
        for path in &args[2..] {
            frequencies.merge(&FrequencyTable::from_text(&read(path)));
        }

        match CodeMap::from_frequencies(&frequencies) {
            Ok(shared) => {
                let averaged = minimal.evaluate_with(&text, &shared);
                println!("Huffman (shared) encoding: {}", averaged.huffman_bits);
                if averaged.skipped_symbols > 0 {
                    println!(
                        "  skipped {} characters without a shared code: {:?}",
                        averaged.skipped_symbols, averaged.unencodable
                    );
                }
                println!(
                    "Min bit-length v. Huffman (shared) saved: {:.2}%",
                    averaged.percent_saved()
                );
            }
            Err(e) => eprintln!("Cannot build shared code: {}", e),
        }
    }

    println!("Huffman (text-specific) encoding: {}", specific.huffman_bits);
    println!(
        "8-bit v. Huffman (text-specific) saved: {:.2}%",
        percent_saved(ascii_bits, specific.huffman_bits)
    );
    println!(
        "Min bit-length v. Huffman (text-specific) saved: {:.2}%",
        specific.percent_saved()
    );
}
