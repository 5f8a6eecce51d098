use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct LexiconData {
    suffixes: Vec<String>,
    surname_prefixes: Vec<String>,
    titles: Vec<String>,
    conjunctions: Vec<String>,
    force_case: Vec<String>,
    mc_case_prefixes: Vec<String>,
    mc_case_exceptions: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/lexicon.json")?;
    let lexicon: LexiconData = serde_json::from_str(&json)?;

    // Lookups are always done on lowercased text, so store lowercase keys
    write_set(&output.join("suffixes.rs"), &lowercased(&lexicon.suffixes))?;
    write_set(
        &output.join("surname_prefixes.rs"),
        &lowercased(&lexicon.surname_prefixes),
    )?;
    write_set(&output.join("titles.rs"), &lowercased(&lexicon.titles))?;
    write_set(
        &output.join("conjunctions.rs"),
        &lowercased(&lexicon.conjunctions),
    )?;

    // Keyed by lowercase form, valued by the canonical spelling; the first
    // spelling listed for a key wins
    let mut force_case = BTreeMap::new();
    for word in &lexicon.force_case {
        force_case
            .entry(word.to_lowercase())
            .or_insert_with(|| word.clone());
    }
    write_map(&output.join("force_case.rs"), &force_case)?;

    write_slice(
        &output.join("mc_case_prefixes.rs"),
        &lowercased(&lexicon.mc_case_prefixes),
    )?;
    let exceptions = lexicon
        .mc_case_exceptions
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>();
    write_set(&output.join("mc_case_exceptions.rs"), &exceptions)?;

    Ok(())
}

fn lowercased(words: &[String]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn write_map(output: &Path, map: &BTreeMap<String, String>) -> Result<()> {
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.as_str(), &format!("{:?}", v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &BTreeSet<String>) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

// Longest prefix first, so callers scanning in order see "mac" before "ma"
fn write_slice(output: &Path, set: &BTreeSet<String>) -> Result<()> {
    let mut items = set.iter().collect::<Vec<_>>();
    items.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    let body = items
        .iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ");
    fs::write(output, format!("&[{}]", body))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
