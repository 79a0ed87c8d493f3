//! Developer tasks (schema generation, golden fixture maintenance).
//!
//! Keeping this separate keeps the library crates free of filesystem code.

use anyhow::{Context, bail};
use canonsig::{DigestAlgorithm, notation, signature_with};
use schemars::schema_for;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root: the parent of the xtask crate.
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the golden fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the CanonsigConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(canonsig_settings::CanonsigConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "canonsig.config.v1.json",
        generate: generate_config_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Golden values recorded next to each fixture input.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Expected {
    notation: String,
    md5: String,
    sha256: String,
}

fn compute_expected(input: &serde_json::Value) -> anyhow::Result<Expected> {
    Ok(Expected {
        notation: notation(input)?,
        md5: signature_with(input, &DigestAlgorithm::Md5)?,
        sha256: signature_with(input, &DigestAlgorithm::Sha256)?,
    })
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Fixture directories (those holding an `input.json`), sorted by name.
fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(fixtures_dir()).context("Failed to list fixtures")? {
        let path = entry?.path();
        if path.join("input.json").exists() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Verify every fixture against its golden values and its reordered twin.
fn check_fixtures() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let actual = compute_expected(&read_json(&dir.join("input.json"))?)?;

        let golden_path = dir.join("expected.json");
        if !golden_path.exists() {
            errors.push(format!("fixture '{}': missing expected.json", name));
            continue;
        }
        let golden: Expected = serde_json::from_value(read_json(&golden_path)?)
            .with_context(|| format!("fixture '{}': bad expected.json", name))?;
        if golden != actual {
            errors.push(format!(
                "fixture '{}': golden {:?} but computed {:?}",
                name, golden, actual
            ));
            continue;
        }

        let reordered_path = dir.join("input.reordered.json");
        if reordered_path.exists() {
            let reordered = compute_expected(&read_json(&reordered_path)?)?;
            if reordered != actual {
                errors.push(format!(
                    "fixture '{}': reordered input signs differently",
                    name
                ));
                continue;
            }
        }

        println!("  ✓ fixture '{}' matches golden values", name);
    }

    if !errors.is_empty() {
        eprintln!("\nFixture errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Fixture validation failed with {} errors", errors.len());
    }

    println!("\n✓ All fixtures match.");
    Ok(())
}

/// Rewrite every `expected.json` from its `input.json`.
fn update_fixtures() -> anyhow::Result<()> {
    for dir in fixture_dirs()? {
        let expected = compute_expected(&read_json(&dir.join("input.json"))?)?;
        let mut json = serde_json::to_string_pretty(&expected)?;
        json.push('\n');
        let path = dir.join("expected.json");
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  check-fixtures    Verify tests/fixtures golden notations and digests");
    eprintln!("  update-fixtures   Regenerate tests/fixtures/*/expected.json");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-fixtures" => check_fixtures(),
        "update-fixtures" => update_fixtures(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
