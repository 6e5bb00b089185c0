use std::fs;

use infix_stairs::{count_ways, evaluate};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("book/src").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| {
                                             e.path().extension().is_some_and(|ext| ext == "md")
                                         })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (kind, line) in extract_example_lines(&content) {
            count += 1;

            let (input, expected) = line.rsplit_once("=>")
                                        .unwrap_or_else(|| panic!("No '=>' in {path:?}: {line}"));
            let (input, expected) = (input.trim(), expected.trim());

            let actual = match kind.as_str() {
                "infix" => evaluate(input).map(|v| v.to_string()),
                "steps" => {
                    let n = input.parse::<i64>()
                                 .unwrap_or_else(|e| panic!("Bad step count {input:?}: {e}"));
                    count_ways(n).map(|v| v.to_string())
                },
                other => panic!("Unknown example block '{other}' in {path:?}"),
            };

            match (expected, actual) {
                ("error", Err(_)) => {},
                ("error", Ok(v)) => {
                    panic!("Example in {path:?} should fail but gave {v}: {input}")
                },
                (expected, Ok(v)) => {
                    assert_eq!(v, expected, "Example in {path:?} gave the wrong result: {input}");
                },
                (_, Err(e)) => panic!("Example in {path:?} failed:\n{input}\nError: {e}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Returns `(block kind, line)` for every non-blank line inside an
/// ```` ```infix ```` or ```` ```steps ```` fenced block.
fn extract_example_lines(content: &str) -> Vec<(String, String)> {
    let mut lines = Vec::new();
    let mut kind: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(tag) = trimmed.strip_prefix("```") {
            kind = match (kind, tag) {
                (None, "infix" | "steps") => Some(tag.to_string()),
                _ => None,
            };
            continue;
        }
        if let Some(kind) = &kind
           && !trimmed.is_empty()
        {
            lines.push((kind.clone(), trimmed.to_string()));
        }
    }

    lines
}
