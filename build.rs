//! Build script embedding the solution dictionary
//!
//! Emits `answers.rs` into `OUT_DIR`: a `&[&str]` of the words in
//! `data/answers.txt` plus their count.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const SOURCE: &str = "data/answers.txt";

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR not set"))?;

    let content = fs::read_to_string(SOURCE)?;
    let words = dictionary_lines(&content);
    emit_dictionary(&out_dir.join("answers.rs"), "ANSWERS", &words)?;

    println!("cargo:rerun-if-changed={SOURCE}");
    Ok(())
}

/// Non-blank lines that are not `#` comments, trimmed
fn dictionary_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn emit_dictionary(path: &Path, name: &str, words: &[&str]) -> io::Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    let count = words.len();

    writeln!(out, "// Generated from {SOURCE}; do not edit")?;
    writeln!(out)?;
    writeln!(out, "/// Embedded solution dictionary ({count} words)")?;
    writeln!(out, "pub const {name}: &[&str] = &[")?;
    for word in words {
        writeln!(out, "    {word:?},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Number of words in [`{name}`]")?;
    writeln!(out, "pub const {name}_COUNT: usize = {count};")?;

    out.flush()
}
