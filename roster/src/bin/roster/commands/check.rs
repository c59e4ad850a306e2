use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use roster::{Student, ValidatedField, load_roster};

use crate::context::RosterContext;
use crate::examples::Example;
use crate::output::{Console, Tone};

pub const EXAMPLES: &[Example] = &[
    Example {
        line: "roster check",
        what: "Validate the configured data file",
    },
    Example {
        line: "roster --data backup/roster.json check",
        what: "Validate another file",
    },
];

pub fn handle_check(data: Option<&Path>, console: &Console) -> Result<()> {
    let ctx = RosterContext::find()?;
    let path = ctx.data_file(data)?;
    console.title("Roster Check");
    console.field("Data file", &path.display().to_string());

    let students = match load_roster(&path) {
        Ok(Some(students)) => students,
        Ok(None) => {
            console.emit(Tone::Caution, "Data file does not exist. Run 'roster init' to create it.");
            anyhow::bail!("No data file at {}", path.display())
        }
        Err(err) => {
            console.emit(Tone::Problem, &err.to_string());
            anyhow::bail!("Data file failed validation")
        }
    };

    console.emit(Tone::Ok, &format!("{} student record(s) are valid", students.len()));
    for (group, count) in group_sizes(&students) {
        console.group_count(group, count);
    }

    Ok(())
}

/// Members per group, in group-name order.
fn group_sizes(students: &[Student]) -> BTreeMap<&str, usize> {
    let mut sizes = BTreeMap::new();
    for student in students {
        for group in student.groups() {
            *sizes.entry(group.as_str()).or_default() += 1;
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::sample_students;

    #[test]
    fn sample_group_sizes() {
        let students = sample_students().unwrap();
        let sizes = group_sizes(&students);
        assert_eq!(sizes.values().sum::<usize>(), students.iter().map(|s| s.groups().len()).sum::<usize>());
        assert!(sizes.keys().is_sorted());
    }
}
