//! Build script to embed the curated word lists
//!
//! Reads the word list files under `data/` and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Words the game picks targets from by default
    generate_word_list(
        "data/solutions.txt",
        &Path::new(&out_dir).join("solutions.rs"),
        "SOLUTIONS",
        "Curated puzzle words",
    );

    // Extra guessable words that are never curated targets
    generate_word_list(
        "data/guesses.txt",
        &Path::new(&out_dir).join("guesses.rs"),
        "GUESSES",
        "Additional accepted guesses",
    );

    println!("cargo:rerun-if-changed=data/solutions.txt");
    println!("cargo:rerun-if-changed=data/guesses.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_ascii_uppercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
