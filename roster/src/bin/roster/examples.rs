use std::fmt::Write;

use clap::Command;

use crate::commands::{check, find, init, parse};

/// A sample invocation shown under a subcommand's `--help`.
#[derive(Clone, Copy)]
pub struct Example {
    pub line: &'static str,
    pub what: &'static str,
}

const ENVIRONMENT: &[(&str, &str)] = &[
    ("ROSTER_DATA", "Roster data file, overriding .roster/config.toml"),
    ("RUST_LOG", "Diagnostics filter, e.g. roster=debug"),
];

/// Adds the environment notes to `root` and each subcommand's examples to its long help.
pub fn attach(root: Command) -> Command {
    let per_command: [(&str, &[Example]); 4] = [
        ("parse", parse::EXAMPLES),
        ("find", find::EXAMPLES),
        ("check", check::EXAMPLES),
        ("init", init::EXAMPLES),
    ];
    per_command
        .into_iter()
        .fold(root.after_long_help(environment_notes()), |root, (name, examples)| {
            root.mut_subcommand(name, |sub| sub.after_long_help(render(examples)))
        })
}

fn environment_notes() -> String {
    let mut text = String::from("Environment:\n");
    for (name, meaning) in ENVIRONMENT {
        let _ = writeln!(text, "  {name:<12} {meaning}");
    }
    text
}

fn render(examples: &[Example]) -> String {
    let width = examples.iter().map(|example| example.line.len()).max().unwrap_or(0);
    let mut text = String::from("Examples:\n");
    for example in examples {
        let _ = writeln!(text, "  {:<width$}  # {}", example.line, example.what);
    }
    text
}
