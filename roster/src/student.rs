use crate::fields::{Comment, InstitutionalEmail, Major, Name, Remark, StudentId, Year};
use crate::groups::GroupList;

/// One student record.
///
/// Optional fields start out as their empty values; the group list is always frozen once it
/// is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: Name,
    student_id: StudentId,
    email: InstitutionalEmail,
    major: Major,
    year: Year,
    groups: GroupList,
    comment: Comment,
    remark: Remark,
}

impl Student {
    pub fn new(name: Name, student_id: StudentId) -> Self {
        Self {
            name,
            student_id,
            email: InstitutionalEmail::default(),
            major: Major::default(),
            year: Year::default(),
            groups: GroupList::new().freeze(),
            comment: Comment::default(),
            remark: Remark::default(),
        }
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn with_student_id(mut self, student_id: StudentId) -> Self {
        self.student_id = student_id;
        self
    }

    pub fn with_email(mut self, email: InstitutionalEmail) -> Self {
        self.email = email;
        self
    }

    pub fn with_major(mut self, major: Major) -> Self {
        self.major = major;
        self
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = year;
        self
    }

    pub fn with_groups(mut self, groups: GroupList) -> Self {
        self.groups = groups.freeze();
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn email(&self) -> &InstitutionalEmail {
        &self.email
    }

    pub fn major(&self) -> &Major {
        &self.major
    }

    pub fn year(&self) -> &Year {
        &self.year
    }

    pub fn groups(&self) -> &GroupList {
        &self.groups
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Two records describe the same student when their ids match.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.student_id == other.student_id
    }
}
