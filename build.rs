//! Build script to generate the embedded word set catalog
//!
//! Reads the word set file and generates Rust source code with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_sets(
        "data/word_sets.txt",
        &Path::new(&out_dir).join("word_sets.rs"),
        "WORD_SETS",
        "Built-in themed word sets (id, theme, five 5-letter words)",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/word_sets.txt");
}

fn generate_word_sets(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str, Vec<&str>)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let fields: Vec<&str> = line.split('|').map(str::trim).collect();
            let [id, theme, words] = fields[..] else {
                panic!("Malformed word set line in {input_path}: {line}");
            };
            (id, theme, words.split_whitespace().collect())
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word set catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &[&str])] = &[").unwrap();

    for (id, theme, words) in entries {
        let words = words
            .iter()
            .map(|w| format!("{w:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "    ({id:?}, {theme:?}, &[{words}]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
