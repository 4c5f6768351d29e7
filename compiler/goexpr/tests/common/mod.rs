//! Fixture tables shared by the integration tests.
//!
//! Each table lists fragment inputs; the suffixes stand in for the template
//! markup that follows a fragment in a real file. Extracting from
//! `prefix + input + suffix` must give back exactly `input`.

#![allow(dead_code, reason = "each test binary uses a subset of the tables")]

use goexpr::{ExtractError, Span};

pub const IF_INPUTS: &[(&str, &str)] = &[
    ("basic if", "true"),
    ("if function call", "pkg.Func()"),
    ("compound", "x := val(); x > 3"),
    ("if multiple", "x && y && (!z)"),
];

pub const IF_SUFFIXES: &[&str] = &[
    "{\n<div>\nif true content\n\t</div>}",
    " {\n<div>\nif true content\n\t</div>}",
];

pub const FOR_INPUTS: &[(&str, &str)] = &[
    ("three component", "i := 0; i < 100; i++"),
    ("three component, empty", "; ; i++"),
    ("while", "n < 5"),
    ("infinite", ""),
    ("range with index", "k, v := range m"),
    ("range with key only", "k := range m"),
    ("channel receive", "x := range channel"),
];

pub const FOR_SUFFIXES: &[&str] = &[" {\n<div>\nloop content\n\t</div>}"];

/// Seed suffixes for the `for` and `switch` fuzz harnesses; several leave
/// the block unopened.
pub const BLOCK_FUZZ_SUFFIXES: &[&str] = &["", " {", " {}", " {\n<div>\nloop content\n\t</div>}"];

pub const SWITCH_INPUTS: &[(&str, &str)] = &[
    ("switch", ""),
    ("switch with expression", "x"),
    ("switch with function call", "pkg.Func()"),
    ("type switch", "x := x.(type)"),
];

pub const SWITCH_SUFFIXES: &[&str] = &[
    " {\ncase 1:\n\t<div>\n\tcase 2:\n\t\t<div>\n\tdefault:\n\t\t<div>\n\t</div>}",
    " {\ndefault:\n\t<div>\n\t</div>}",
    " {\n}",
];

pub const CASE_INPUTS: &[(&str, &str)] = &[
    ("case", "case 1:"),
    ("case with expression", "case x > 3:"),
    ("case with function call", "case pkg.Func():"),
    ("case with multiple expressions", "case x > 3, x < 4:"),
    ("case with multiple expressions and default", "case x > 3, x < 4, x == 5:"),
    ("case with type switch", "case bool:"),
];

pub const CASE_SUFFIXES: &[&str] = &[
    "\n<div>\ncase 1 content\n\t</div>\n\tcase 3:",
    "\ndefault:\n\t<div>\n\t</div>}",
    "\n}",
];

pub const DEFAULT_SUFFIXES: &[&str] = &[
    "\n<div>\ncase 1 content\n\t</div>\n\tcase 3:",
    "\ncase:\n\t<div>\n\t</div>}",
    "\n}",
];

pub const DEFAULT_FUZZ_SUFFIXES: &[&str] = &[
    "",
    " ",
    "\n<div>\ncase 1 content\n\t</div>\n\tcase 3:",
    "\ncase:\n\t<div>\n\t</div>}",
    "\n}",
];

pub const MULTILINE_CALL: &str = "component(map[string]string{
\t\t\t\t\"namea\": \"name_a\",
\t\t\t  \"nameb\": \"name_b\",
\t\t\t})";

pub const EXPRESSION_INPUTS: &[(&str, &str)] = &[
    ("function call in package", "components.Other()"),
    ("slice index call", "components[0].Other()"),
    ("map index function call", "components[\"name\"].Other()"),
    (
        "function literal",
        "components[\"name\"].Other(func() bool { return true })",
    ),
    ("multiline function call", MULTILINE_CALL),
    ("call with braces and brackets", "templates.New(test{}, other())"),
];

pub const EXPRESSION_SUFFIXES: &[&str] = &["", "}"];

pub const EXPRESSION_FUZZ_SUFFIXES: &[&str] = &["", " }", " }}</a>\n}", "..."];

pub const CHILDREN_INPUTS: &[(&str, &str)] = &[
    ("children", "children..."),
    ("function", "components.Spread()..."),
    ("alternative variable", "components..."),
    ("index", "groups[0]..."),
    ("map", "components[\"name\"]..."),
    ("map func key", "components[getKey(ctx)]..."),
];

pub const CHILDREN_SUFFIXES: &[&str] = &[" }", " } <div>Other content</div>", ""];

pub const SLICE_ARGS_INPUTS: &[(&str, &str)] = &[
    ("no input", ""),
    ("single input", "nil"),
    ("inputs to function call", "a, b, \"c\""),
    ("function call in package", "components.Other()"),
    ("slice index call", "components[0].Other()"),
    ("map index function call", "components[\"name\"].Other()"),
    (
        "function literal",
        "components[\"name\"].Other(func() bool { return true })",
    ),
    ("multiline function call", MULTILINE_CALL),
    ("package name, but no variable or function", "fmt."),
];

pub const SLICE_ARGS_SUFFIXES: &[&str] = &["", "}", "}</a>\n}\nvar x = []struct {}{}"];

pub const SLICE_ARGS_FUZZ_SUFFIXES: &[&str] = &["", "}", " }", "}</a>\n}\nvar x = []struct {}{}"];

/// Every fixture input joined with every suffix.
pub fn seeds(prefix: &str, inputs: &[(&str, &str)], suffixes: &[&str]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|(_, input)| suffixes.iter().map(move |suffix| format!("{prefix}{input}{suffix}")))
        .collect()
}

/// A successful span lies within `src` on char boundaries; an error points
/// inside `src` or at its end.
pub fn assert_in_bounds(src: &str, result: &Result<Span, ExtractError>) {
    match result {
        Ok(span) => {
            assert!(span.start <= span.end, "{span} inverted for {src:?}");
            assert!(span.get(src).is_some(), "{span} out of bounds for {src:?}");
        }
        Err(err) => {
            assert!(
                err.offset() as usize <= src.len(),
                "error offset {} past end of {src:?}",
                err.offset()
            );
        }
    }
}
