use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Table};
use serde::Serialize;

use roster::parser::commands::{COMMAND_SUMMARY, usage_for};
use roster::{Command, parse_command};

use crate::examples::Example;
use crate::output::{Console, GlobalOptions, TableDisplay, Tone, table_with_header};

pub const EXAMPLES: &[Example] = &[
    Example {
        line: "roster parse add /n Alex Yeoh /id A8743880E /nid e1234567 /g group 1",
        what: "Add with a NetID and one group",
    },
    Example {
        line: "roster parse edit 2 /m Computer Science /y 3",
        what: "Edit the second listed student",
    },
    Example {
        line: "roster parse find /n alex /g 1",
        what: "Combined search",
    },
    Example {
        line: "roster parse comment 1 /c Needs help with recursion",
        what: "Attach a comment",
    },
    Example {
        line: "roster --output json parse delete 3",
        what: "Machine-readable result",
    },
];

#[derive(Args)]
pub struct ParseArgs {
    /// Command line to parse, for example: add /n Alex Yeoh /id A8743880E
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}

/// How a command line was understood.
#[derive(Debug, Serialize)]
pub struct ParsedCommand {
    pub command: &'static str,
    pub summary: String,
}

impl ParsedCommand {
    fn new(command: &Command) -> Self {
        let word = match command {
            Command::Add(_) => "add",
            Command::Edit { .. } => "edit",
            Command::Delete(_) => "delete",
            Command::Find(_) => "find",
            Command::Comment { .. } => "comment",
            Command::Remark { .. } => "remark",
            Command::List => "list",
        };
        Self {
            command: word,
            summary: command.to_string(),
        }
    }
}

impl TableDisplay for ParsedCommand {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = table_with_header(options, &["Command", "Parsed as"]);
        table.add_row(vec![Cell::new(self.command), Cell::new(&self.summary)]);
        table
    }

    fn to_compact(&self) -> String {
        self.summary.clone()
    }
}

pub fn handle_parse(args: ParseArgs, console: &Console) -> Result<()> {
    let line = super::join_words(&args.line);
    console.emit(Tone::Trace, &format!("parsing {line:?}"));

    match parse_command(&line) {
        Ok(command) => console.show(&ParsedCommand::new(&command)),
        Err(err) => {
            console.emit(Tone::Problem, &err.to_string());
            let word = line.split_whitespace().next().unwrap_or_default();
            if usage_for(word).is_none() {
                console.emit(Tone::Note, COMMAND_SUMMARY);
            }
            anyhow::bail!("Command line was rejected")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_command_names_the_command_word() {
        let parsed = ParsedCommand::new(&parse_command("delete 3").unwrap());
        assert_eq!(parsed.command, "delete");
        assert_eq!(parsed.to_compact(), parsed.summary);

        let table = parsed.to_table(&GlobalOptions { no_color: true, ..Default::default() }).to_string();
        assert!(table.contains("Parsed as"));
        assert!(table.contains("delete"));
    }
}
