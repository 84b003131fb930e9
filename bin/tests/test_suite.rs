use itertools::Itertools;
use lazy_regex::regex;
use parser::{adjacency::Adjacency, parse_with, ParseOptions};
use scanner::ScanPolicy;
use test_suite_proc_macro::generate_tests;

use pretty_assertions::assert_eq;

/// Runs one suite file. Lines starting with `//` are directives, everything else is the source.
///
/// - `// option: lenient` / `// option: strict` / `// option: complete` change how the source
///   is parsed
/// - `// expect: <tree>` the tuple rendering of the parse tree
/// - `// adjacency: <line>` one line of the adjacency rendering, in order
/// - `// error: <message>` or `// error at l. L, c. C: <message>`
pub fn arith_expect(code: &str) {
    let mut options = ParseOptions::default();
    let mut expected_tree = None;
    let mut expected_adjacency = vec![];
    let mut expected_error = None;
    let mut source = vec![];

    let option_regex = regex!(r"^// option: (lenient|strict|complete)$");
    let expect_regex = regex!(r"^// expect: (.*)$");
    let adjacency_regex = regex!(r"^// adjacency: (.*)$");
    let error_regex = regex!(r"^// error(?: at l\. (\d+), c\. (\d+))?: (.*)$");

    for line in code.lines() {
        if let Some(cap) = option_regex.captures(line) {
            match &cap[1] {
                "lenient" => options.policy = ScanPolicy::Lenient,
                "strict" => options.policy = ScanPolicy::Strict,
                _ => options.complete = true,
            }
        } else if let Some(cap) = expect_regex.captures(line) {
            expected_tree = Some(cap[1].to_string());
        } else if let Some(cap) = adjacency_regex.captures(line) {
            expected_adjacency.push(cap[1].to_string());
        } else if let Some(cap) = error_regex.captures(line) {
            let position = cap.get(1).zip(cap.get(2)).map(|(line, col)| {
                (line.as_str().parse::<usize>().unwrap(), col.as_str().parse::<usize>().unwrap())
            });
            expected_error = Some((position, cap[3].to_string()));
        } else if !line.starts_with("//") {
            source.push(line);
        }
    }

    assert!(
        expected_error.is_none() || (expected_tree.is_none() && expected_adjacency.is_empty()),
        "Can't expect a tree and an error at the same time."
    );

    match parse_with(&source.join("\n"), options) {
        Ok(expr) => {
            assert!(expected_error.is_none(), "Expected error but parsed {expr}");
            if let Some(tree) = expected_tree {
                assert_eq!(expr.to_string(), tree);
            }
            if !expected_adjacency.is_empty() {
                let adjacency = Adjacency::from_expr(&expr).to_string();
                assert_eq!(adjacency.lines().collect_vec(), expected_adjacency);
            }
        }
        Err(error) => {
            let Some((position, message)) = expected_error else {
                panic!("Unexpected error: {error}");
            };
            assert_eq!(error.to_string(), message);
            if let Some((line, col)) = position {
                assert_eq!(error.position().map(|(l, c)| (l.0, c.0)), Some((line, col)));
            }
        }
    }
}

generate_tests!();
