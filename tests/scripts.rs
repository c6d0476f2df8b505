use std::{fs, path::Path};

use linecalc::get_output;
use walkdir::WalkDir;

const SCRIPT_DIR: &str = "tests/scripts";

#[test]
fn scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new(SCRIPT_DIR).into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        count += 1;

        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);
        let actual = get_output(&source);

        assert_eq!(actual, expected, "Script {path:?} produced unexpected output");
    }

    assert!(count > 0, "No scripts found in {SCRIPT_DIR}");
}

fn read_expected(script: &Path) -> Vec<String> {
    let path = script.with_extension("out");
    let content =
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

    content.lines().map(str::to_string).collect()
}
