use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use roster::{sample_students, save_roster};

use crate::context::{CONFIG_DIR, RosterConfig, RosterContext};
use crate::examples::Example;
use crate::output::{Console, Tone};

pub const EXAMPLES: &[Example] = &[
    Example {
        line: "roster init",
        what: "Write .roster/config.toml and the sample roster",
    },
    Example {
        line: "roster init --force",
        what: "Overwrite both",
    },
    Example {
        line: "roster --data class/cs2103.json init",
        what: "Seed a data file elsewhere",
    },
];

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file and data file
    #[arg(long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs, data: Option<&Path>, console: &Console) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let ctx = RosterContext::from_root(current_dir)?;
    console.title("Initializing roster");

    if ctx.is_initialized() && !args.force {
        console.emit(Tone::Note, &format!("{} already exists; keeping it", ctx.config_path.display()));
    } else {
        std::fs::create_dir_all(&ctx.roster_dir)
            .with_context(|| format!("Failed to create {CONFIG_DIR} directory"))?;
        let config = ctx.config.clone().unwrap_or_else(RosterConfig::default);
        let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
        std::fs::write(&ctx.config_path, content).context("Failed to write config.toml")?;
        console.emit(Tone::Ok, &format!("Wrote {}", ctx.config_path.display()));
    }

    let data_file = ctx.data_file(data)?;
    if data_file.exists() && !args.force {
        console.emit(Tone::Note, &format!("{} already exists; keeping it", data_file.display()));
    } else {
        let students = sample_students()?;
        save_roster(&data_file, &students)
            .with_context(|| format!("Failed to write {}", data_file.display()))?;
        console.emit(
            Tone::Ok,
            &format!("Seeded {} with {} sample student(s)", data_file.display(), students.len()),
        );
    }

    console.field("Next", "roster find /g group 1");
    Ok(())
}
