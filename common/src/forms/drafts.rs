use crate::error::ValidationError;
use crate::forms::Draft;
use crate::model::Id;
use crate::model::course::Course;
use crate::model::student::Student;
use crate::requests::{NewCourse, NewEnrollment, NewStudent};

fn required(value: &str, label: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl StudentDraft {
    pub fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::FirstName => self.first_name = value,
            StudentField::LastName => self.last_name = value,
            StudentField::Email => self.email = value,
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
        }
    }
}

impl Draft for StudentDraft {
    type Payload = NewStudent;

    fn validate(&self) -> Result<NewStudent, ValidationError> {
        Ok(NewStudent {
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            email: required(&self.email, "Email")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Name,
    Description,
    Credits,
}

/// `credits` stays a string until validation so a half-typed value survives
/// a failed submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseDraft {
    pub name: String,
    pub description: String,
    pub credits: String,
}

impl CourseDraft {
    pub fn set(&mut self, field: CourseField, value: String) {
        match field {
            CourseField::Name => self.name = value,
            CourseField::Description => self.description = value,
            CourseField::Credits => self.credits = value,
        }
    }
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone().unwrap_or_default(),
            credits: course.credits.to_string(),
        }
    }
}

impl Draft for CourseDraft {
    type Payload = NewCourse;

    fn validate(&self) -> Result<NewCourse, ValidationError> {
        let name = required(&self.name, "Name")?;
        let credits = required(&self.credits, "Credits")?;
        let credits = credits
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidCredits(credits))?;
        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(NewCourse {
            name,
            description,
            credits,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentField {
    Student,
    Course,
    Date,
}

/// Select values are kept as the raw `<option value>` strings; an empty
/// string is the "Select a ..." placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrollmentDraft {
    pub student_id: String,
    pub course_id: String,
    pub enrollment_date: String,
}

impl EnrollmentDraft {
    /// Empty selections with the date pre-filled.
    pub fn dated(today: impl Into<String>) -> Self {
        Self {
            enrollment_date: today.into(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: EnrollmentField, value: String) {
        match field {
            EnrollmentField::Student => self.student_id = value,
            EnrollmentField::Course => self.course_id = value,
            EnrollmentField::Date => self.enrollment_date = value,
        }
    }
}

fn selected(value: &str) -> Option<Id> {
    value.trim().parse::<Id>().ok().filter(|id| *id > 0)
}

impl Draft for EnrollmentDraft {
    type Payload = NewEnrollment;

    fn validate(&self) -> Result<NewEnrollment, ValidationError> {
        let (Some(student_id), Some(course_id)) =
            (selected(&self.student_id), selected(&self.course_id))
        else {
            return Err(ValidationError::MissingSelection);
        };

        Ok(NewEnrollment {
            student_id,
            course_id,
            enrollment_date: required(&self.enrollment_date, "Enrollment date")?,
        })
    }
}
