use std::path::Path;

use anyhow::Result;
use clap::Args;

use roster::parser::commands::{CommandParser, FindCommandParser};
use roster::{Command, Composition};

use crate::context::RosterContext;
use crate::examples::Example;
use crate::output::{Console, StudentListing, Tone};

pub const EXAMPLES: &[Example] = &[
    Example {
        line: "roster find /n alex",
        what: "Names containing 'alex'",
    },
    Example {
        line: "roster find /id a8743880e",
        what: "Exact student ID, any case",
    },
    Example {
        line: "roster find /g group 1",
        what: "Members of group 1",
    },
    Example {
        line: "roster find /n alex /g 1",
        what: "Both criteria must match",
    },
    Example {
        line: "roster find --any /n bernice /g 3",
        what: "Either criterion may match",
    },
];

#[derive(Args)]
pub struct FindArgs {
    /// Match students satisfying any criterion instead of all of them
    #[arg(long)]
    pub any: bool,

    /// Search criteria: /n KEYWORD... /id STUDENT_ID /g KEYWORD...
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub criteria: Vec<String>,
}

pub fn handle_find(args: FindArgs, data: Option<&Path>, console: &Console) -> Result<()> {
    let line = super::join_words(&args.criteria);

    let mut predicate = match FindCommandParser::parse(&line) {
        Ok(Command::Find(predicate)) => predicate,
        Ok(other) => anyhow::bail!("Unexpected command from find criteria: {other}"),
        Err(err) => {
            console.emit(Tone::Problem, &err.to_string());
            anyhow::bail!("Search criteria were rejected")
        }
    };
    if args.any {
        predicate.set_composition(Composition::Any);
    }

    let ctx = RosterContext::find()?;
    let path = ctx.data_file(data)?;
    let students = super::load_students(&path, console)?;

    console.title("Search Results");
    console.field(
        "Matching",
        match predicate.composition() {
            Composition::All => "all of",
            Composition::Any => "any of",
        },
    );
    for criterion in predicate.predicates() {
        console.entry(&criterion.to_string());
    }

    let listing = StudentListing::from_students(predicate.filter(&students));
    console.show(&listing)?;
    console.emit(Tone::Note, &format!("{} of {} student(s) listed", listing.len(), students.len()));

    Ok(())
}
