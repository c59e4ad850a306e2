use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};
use serde::Serialize;

use roster::{Student, ValidatedField};

use crate::theme::PALETTE;

/// How listings are printed
#[derive(Clone, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// One table per listing
    #[default]
    Table,
    /// Pretty-printed JSON, with status lines kept off stdout
    Json,
    /// One line per record
    Compact,
}

#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Data with a table form and a one-line-per-record form.
pub trait TableDisplay {
    fn to_table(&self, options: &GlobalOptions) -> Table;
    fn to_compact(&self) -> String;
}

/// Kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ok,
    Problem,
    Caution,
    Note,
    /// Only shown with `--verbose`
    Trace,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Ok => "ok",
            Tone::Problem => "error",
            Tone::Caution => "warning",
            Tone::Note => "note",
            Tone::Trace => "trace",
        }
    }

    fn color(self) -> colored::Color {
        match self {
            Tone::Ok => PALETTE.ok,
            Tone::Problem => PALETTE.problem,
            Tone::Caution => PALETTE.caution,
            Tone::Note => PALETTE.note,
            Tone::Trace => PALETTE.trace,
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Problem | Tone::Caution | Tone::Trace)
    }
}

/// Writes listings and status lines according to the global flags.
pub struct Console {
    options: GlobalOptions,
}

impl Console {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    pub fn show<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TableDisplay,
    {
        if self.options.quiet {
            return Ok(());
        }
        match self.options.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Table => println!("{}", data.to_table(&self.options)),
            OutputFormat::Compact => println!("{}", data.to_compact()),
        }
        Ok(())
    }

    pub fn emit(&self, tone: Tone, message: &str) {
        let Some(line) = self.status_line(tone, message) else {
            return;
        };
        if tone.to_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    /// `label: value`, part of the human-readable report.
    pub fn field(&self, label: &str, value: &str) {
        if self.is_report_visible() {
            println!("{}: {value}", self.paint(label, PALETTE.label, true));
        }
    }

    pub fn title(&self, text: &str) {
        if self.is_report_visible() {
            println!("{}", self.paint(text, PALETTE.title, true));
        }
    }

    /// Indented list entry under the last title or field.
    pub fn entry(&self, text: &str) {
        if self.is_report_visible() {
            println!("  - {text}");
        }
    }

    pub fn group_count(&self, group: &str, count: usize) {
        if self.is_report_visible() {
            println!("  - {}: {count}", self.paint(group, PALETTE.group, false));
        }
    }

    /// The rendered status line, or `None` when the flags hide it.
    fn status_line(&self, tone: Tone, message: &str) -> Option<String> {
        let visible = match tone {
            Tone::Problem => true,
            Tone::Caution => !self.options.quiet,
            Tone::Trace => self.options.verbose && !self.options.quiet,
            Tone::Ok | Tone::Note => self.is_report_visible(),
        };
        visible.then(|| format!("{}: {message}", self.paint(tone.marker(), tone.color(), true)))
    }

    fn is_report_visible(&self) -> bool {
        !self.options.quiet && self.options.output_format != OutputFormat::Json
    }

    fn paint(&self, text: &str, color: colored::Color, bold: bool) -> String {
        match (self.options.no_color, bold) {
            (true, _) => text.to_string(),
            (false, true) => text.color(color).bold().to_string(),
            (false, false) => text.color(color).to_string(),
        }
    }
}

/// A table with `headers` in the configured style.
pub fn table_with_header(options: &GlobalOptions, headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(if options.no_color {
        presets::ASCII_FULL
    } else {
        presets::UTF8_FULL_CONDENSED
    });
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.iter().map(|header| {
        let cell = Cell::new(header).add_attribute(Attribute::Bold);
        if options.no_color { cell } else { cell.fg(PALETTE.header_cell) }
    }));
    table
}

/// One row of a student listing, numbered as the user would address it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub index: usize,
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub major: String,
    pub year: String,
    pub groups: Vec<String>,
    pub comment: String,
    pub remark: String,
}

impl StudentRow {
    pub fn new(index: usize, student: &Student) -> Self {
        Self {
            index,
            name: student.name().as_str().to_string(),
            student_id: student.student_id().as_str().to_string(),
            email: student.email().as_str().to_string(),
            major: student.major().as_str().to_string(),
            year: student.year().as_str().to_string(),
            groups: student.groups().iter().map(|group| group.as_str().to_string()).collect(),
            comment: student.comment().as_str().to_string(),
            remark: student.remark().as_str().to_string(),
        }
    }
}

/// A numbered list of students.
#[derive(Debug, Clone, Serialize, Default)]
pub struct StudentListing {
    pub students: Vec<StudentRow>,
}

impl StudentListing {
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        Self {
            students: students
                .into_iter()
                .enumerate()
                .map(|(i, student)| StudentRow::new(i + 1, student))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }
}

impl TableDisplay for StudentListing {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        if self.students.is_empty() {
            let mut table = table_with_header(options, &["Students"]);
            table.add_row(vec![Cell::new("No students found")]);
            return table;
        }

        let mut table = table_with_header(
            options,
            &["#", "Name", "Student ID", "Email", "Major", "Year", "Groups", "Comment"],
        );
        for row in &self.students {
            let index = Cell::new(row.index);
            table.add_row(vec![
                if options.no_color { index } else { index.fg(PALETTE.index_cell) },
                Cell::new(&row.name),
                Cell::new(&row.student_id),
                Cell::new(&row.email),
                Cell::new(&row.major),
                Cell::new(&row.year),
                Cell::new(row.groups.join(", ")),
                Cell::new(&row.comment),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.students
            .iter()
            .map(|row| format!("{}. {} ({})", row.index, row.name, row.student_id))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
