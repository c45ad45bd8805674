//! Build script to generate embedded word lists
//!
//! Reads `data/<language>/<length>/{answers,allowed}.txt` and generates Rust
//! source with one const array per list plus a lookup table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (language, letter length, const prefix)
const LISTS: &[(&str, usize, &str)] = &[
    ("english", 3, "EN3"),
    ("english", 4, "EN4"),
    ("english", 5, "EN5"),
    ("english", 6, "EN6"),
    ("arabic", 3, "AR3"),
    ("arabic", 4, "AR4"),
    ("arabic", 5, "AR5"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for &(language, length, prefix) in LISTS {
        for kind in ["answers", "allowed"] {
            let input_path = format!("data/{language}/{length}/{kind}.txt");
            let const_name = format!("{prefix}_{}", kind.to_uppercase());
            let doc_comment = format!("{language} {length}-letter {kind}");
            generate_word_list(&mut output, &input_path, &const_name, &doc_comment);
            println!("cargo:rerun-if-changed={input_path}");
        }
    }

    writeln!(output, "/// (language, length, answers, allowed) for every embedded pair").unwrap();
    writeln!(
        output,
        "pub const TABLE: &[(&str, usize, &[&str], &[&str])] = &["
    )
    .unwrap();
    for &(language, length, prefix) in LISTS {
        writeln!(
            output,
            "    (\"{language}\", {length}, {prefix}_ANSWERS, {prefix}_ALLOWED),"
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
