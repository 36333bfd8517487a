use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

use crate::classifiers::decision_tree::{DegenerateMajorityKind, DegenerateMajorityPolicy};
use crate::core::attributes::Category;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::ExperimentParameters;
use crate::ui::types::schema::{FieldKind, FieldSpec, field_specs, schema_of};

const OPTIONAL_HINT: &str = "(leave blank for none)";

/// Walks the user through every [`ExperimentParameters`] field.
///
/// Scalar fields are prompted for from the JSON schema, in declaration
/// order, with the values of [`ExperimentParameters::default`] as initial
/// answers; the degenerate majority policy gets its own two-step prompt.
pub fn prompt_parameters<D: PromptDriver>(driver: &D) -> Result<ExperimentParameters> {
    let defaults = match serde_json::to_value(ExperimentParameters::default())? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let specs = field_specs(&schema_of::<ExperimentParameters>())?;

    let mut params = Map::new();
    for s in &specs {
        let init = defaults.get(&s.name).cloned().unwrap_or(Value::Null);
        if let Some(val) = prompt_field(driver, s, &init)? {
            params.insert(s.name.clone(), val);
        }
    }

    let policy = prompt_degenerate_majority(driver, ExperimentParameters::default().degenerate_majority)?;
    params.insert("degenerate_majority".into(), serde_json::to_value(policy)?);

    serde_json::from_value(Value::Object(params)).context("wizard answers do not form valid parameters")
}

fn prompt_field<D: PromptDriver>(driver: &D, s: &FieldSpec, init: &Value) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");
    let value = match &s.kind {
        FieldKind::Boolean => {
            let def = init.as_bool().unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::Integer => {
            let def = init.as_u64().unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Choice(options) => {
            let def = init
                .as_str()
                .and_then(|d| options.iter().position(|o| o == d))
                .unwrap_or(0);
            let picked = driver.ask_select(&s.title, help, options, def)?;
            let option = options
                .get(picked)
                .with_context(|| format!("option {picked} out of range for {}", s.title))?;
            Value::String(option.clone())
        }
        FieldKind::String if s.name == "dataset_path" => {
            let def = init.as_str().unwrap_or_default();
            let more_help = if help.is_empty() {
                "Please type the path of an existing dataset file"
            } else {
                help
            };
            let pb = prompt_path_until_ok(driver, &s.title, more_help, def, true, true, &[])?;
            Value::String(pb.to_string_lossy().into_owned())
        }
        FieldKind::String if s.nullable => {
            let def = init.as_str().unwrap_or_default();
            let answer = driver.ask_string(&s.title, &format!("{help}\n{OPTIONAL_HINT}"), def)?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }
            Value::String(answer.to_string())
        }
        FieldKind::String => {
            let def = init.as_str().unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, def)?)
        }
    };
    Ok(Some(value))
}

fn prompt_degenerate_majority<D: PromptDriver>(
    driver: &D,
    default: DegenerateMajorityPolicy,
) -> Result<DegenerateMajorityPolicy> {
    let kinds: Vec<DegenerateMajorityKind> = DegenerateMajorityKind::iter().collect();
    let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
    let def = kinds
        .iter()
        .position(|k| *k == DegenerateMajorityKind::from(default))
        .unwrap_or(0);

    let picked = driver.ask_select(
        "Degenerate Majority",
        "What to do at a leaf with no majority of its own or of an ancestor",
        &names,
        def,
    )?;
    let kind = kinds
        .get(picked)
        .copied()
        .with_context(|| format!("option {picked} out of range for Degenerate Majority"))?;

    match kind {
        DegenerateMajorityKind::Error => Ok(DegenerateMajorityPolicy::Error),
        DegenerateMajorityKind::DefaultLabel => {
            let categories: Vec<Category> = Category::iter().collect();
            let labels: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
            let def = match default {
                DegenerateMajorityPolicy::DefaultLabel(c) => c.index(),
                DegenerateMajorityPolicy::Error => 0,
            };
            let picked = driver.ask_select("Default Label", "Party assigned to such leaves", &labels, def)?;
            let label = categories
                .get(picked)
                .copied()
                .with_context(|| format!("option {picked} out of range for Default Label"))?;
            Ok(DegenerateMajorityPolicy::DefaultLabel(label))
        }
    }
}

fn validate_path_str(
    input: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_be_file && p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, must_exist, must_be_file, allowed_exts) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::ReportFormat;
    use crate::streams::PartitionScheme;
    use crate::tasks::CrossValidationMode;
    use crate::testing::ScriptedDriver;
    use std::fs;

    fn dataset() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votes.tsv");
        fs::write(&path, "a\tD\t+-\n").unwrap();
        (dir, path)
    }

    #[test]
    fn unanswered_prompts_take_the_defaults() {
        let (_dir, path) = dataset();
        let driver = ScriptedDriver::new().text("Dataset Path", path.to_str().unwrap());

        let p = prompt_parameters(&driver).unwrap();
        assert_eq!(p, ExperimentParameters::for_dataset(&path));
    }

    #[test]
    fn every_field_can_be_answered() {
        let (dir, path) = dataset();
        let report = dir.path().join("loo.json");
        let driver = ScriptedDriver::new()
            .text("Dataset Path", path.to_str().unwrap())
            .number("Attribute Count", 2)
            .choose("Partition Scheme", "holdout")
            .flag("Prune", false)
            .choose("Cross Validation", "retrained")
            .text("Report Path", report.to_str().unwrap())
            .choose("Report Format", "json")
            .text("Partition Output Directory", "  ")
            .choose("Degenerate Majority", "default-label")
            .choose("Default Label", "R");

        let p = prompt_parameters(&driver).unwrap();
        assert_eq!(p.attribute_count, 2);
        assert_eq!(p.partition, PartitionScheme::Holdout);
        assert!(!p.prune);
        assert_eq!(p.cross_validation, CrossValidationMode::Retrained);
        assert_eq!(p.report_path, Some(report));
        assert_eq!(p.report_format, ReportFormat::Json);
        assert_eq!(p.partition_output_dir, None);
        assert_eq!(
            p.degenerate_majority,
            DegenerateMajorityPolicy::DefaultLabel(Category::Republican)
        );
    }

    #[test]
    fn missing_dataset_is_asked_again() {
        let (dir, path) = dataset();
        let missing = dir.path().join("nope.tsv");
        let driver = ScriptedDriver::new()
            .text("Dataset Path", missing.to_str().unwrap())
            .text("Dataset Path", path.to_str().unwrap())
            .choose("Degenerate Majority", "error");

        let p = prompt_parameters(&driver).unwrap();
        assert_eq!(p.dataset_path, path);
        assert_eq!(p.degenerate_majority, DegenerateMajorityPolicy::Error);
        assert!(driver.is_exhausted());
    }

    #[test]
    fn path_validation() {
        let (dir, path) = dataset();
        assert!(validate_path_str(path.to_str().unwrap(), true, true, &[]).is_ok());
        assert!(validate_path_str("   ", false, false, &[]).is_err());
        assert!(validate_path_str(dir.path().to_str().unwrap(), true, true, &[]).is_err());
        assert!(validate_path_str(path.to_str().unwrap(), true, true, &["tsv"]).is_ok());
        assert!(validate_path_str(path.to_str().unwrap(), true, true, &["txt"]).is_err());
    }
}
