use std::{
    fs::{self},
    path::Path,
};

use pisc::{interpreter::evaluator::core::Interpreter, tokenize};
use serde_json::json;
use walkdir::WalkDir;

const SAMPLES: &str = "tests/samples";

/// Set to regenerate every golden file from the current behavior.
const UPDATE_VAR: &str = "PISC_UPDATE_GOLDEN";

#[test]
fn samples_match_golden_files() {
    let update = std::env::var_os(UPDATE_VAR).is_some_and(|v| v == "1");
    let mut count = 0;

    for entry in
        WalkDir::new(SAMPLES).sort_by_file_name()
                             .into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "pisc"))
    {
        count += 1;
        check_sample(entry.path(), update);
    }

    assert!(count > 0, "No samples found in {SAMPLES}");
}

fn check_sample(path: &Path, update: bool) {
    let source =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

    let lexed = tokenize(&source);
    check_golden(&path.with_extension("tokens.json"), &json!(lexed.tokens), update);

    let errors = match pisc::parse(&source) {
        Ok(program) => {
            check_golden(&path.with_extension("ast.json"), &program.to_json().unwrap(), update);

            match Interpreter::new().run(&program) {
                Ok(output) => {
                    check_golden(&path.with_extension("out.json"), &json!(output), update);
                    return;
                },
                Err(e) => vec![e.to_string()],
            }
        },
        Err(e) => e.messages(),
    };

    check_golden(&path.with_extension("errors.json"), &json!(errors), update);
}

fn check_golden(path: &Path, actual: &serde_json::Value, update: bool) {
    if update {
        let mut text = serde_json::to_string_pretty(actual).expect("serializable golden");
        text.push('\n');
        fs::write(path, text).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
        return;
    }

    let text = fs::read_to_string(path).unwrap_or_else(|e| {
                                            panic!("Missing golden file {path:?} ({e}); \
                                                    rerun with {UPDATE_VAR}=1")
                                        });
    let expected: serde_json::Value =
        serde_json::from_str(&text).unwrap_or_else(|e| panic!("Invalid JSON in {path:?}: {e}"));

    assert_eq!(actual, &expected, "golden mismatch for {path:?}");
}
