use crate::storage::{JsonAdaptedStudent, JsonRoster, StorageResult};
use crate::student::Student;
use crate::validators::INSTITUTIONAL_DOMAIN;

// name, student id, netid, major, group
const SAMPLES: &[(&str, &str, &str, &str, &str)] = &[
    ("Alex Yeoh", "A8743880E", "e1234567", "Business Analytics", "group 1"),
    ("Bernice Yu", "A9272757L", "e9999999", "Computer Science", "group 1"),
    ("Charlotte Oliveiro", "A9321028P", "e3456819", "Political Science", "group 2"),
    ("David Li", "A9103128E", "e0000001", "Business Administration", "group 2"),
    ("Irfan Ibrahim", "A2492021T", "e3456718", "Chemistry", "group 3"),
    ("Roy Balakrishnan", "A9262441K", "e5739264", "Mechanical Engineering", "group 3"),
];

/// The built-in first-year records used to seed a new data file.
pub fn sample_students() -> StorageResult<Vec<Student>> {
    let roster = JsonRoster {
        students: SAMPLES
            .iter()
            .map(|(name, student_id, net_id, major, group)| JsonAdaptedStudent {
                name: Some((*name).to_string()),
                student_id: Some((*student_id).to_string()),
                email: Some(format!("{net_id}{INSTITUTIONAL_DOMAIN}")),
                major: Some((*major).to_string()),
                year: Some("1".to_string()),
                groups: vec![(*group).to_string()],
                comment: Some(String::new()),
                remark: Some(String::new()),
            })
            .collect(),
    };
    roster.to_model()
}
