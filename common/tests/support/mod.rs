//! In-memory stand-in for the enrollment API.
//!
//! Mirrors the server's observable behavior: ids are assigned sequentially,
//! the student list embeds each student's courses with the enrollment
//! timestamp, deletes remove dependent enrollments, and duplicate or dangling
//! enrollments are rejected with a `detail` message. Every call is recorded
//! as `"METHOD path"` and any of those labels can be made to fail, or to
//! succeed with a body that is not the expected JSON.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;

use common::api::Api;
use common::api::response::check_status;
use common::error::ClientError;
use common::model::Id;
use common::model::course::Course;
use common::model::enrollment::{EnrolledCourse, EnrolledStudent};
use common::model::student::Student;
use common::requests::{NewCourse, NewEnrollment, NewStudent};
use common::sync::{Action, Controller, Dispatch, Notice, execute};

#[derive(Default)]
struct Tables {
    next_id: Id,
    students: Vec<(Id, NewStudent)>,
    courses: Vec<(Id, NewCourse)>,
    enrollments: Vec<(Id, Id, String)>,
}

impl Tables {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }

    fn student(&self, id: Id) -> Option<Student> {
        let (_, student) = self.students.iter().find(|(sid, _)| *sid == id)?;
        let courses = self
            .enrollments
            .iter()
            .filter(|(sid, _, _)| *sid == id)
            .filter_map(|(_, cid, date)| {
                let (_, course) = self.courses.iter().find(|(c, _)| c == cid)?;
                Some(EnrolledCourse {
                    id: *cid,
                    name: course.name.clone(),
                    description: course.description.clone(),
                    credits: course.credits,
                    enrollment_date: Some(format!("{date}T00:00:00")),
                })
            })
            .collect();
        Some(Student {
            id,
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            courses: Some(courses),
        })
    }

    fn course(&self, id: Id, with_students: bool) -> Option<Course> {
        let (_, course) = self.courses.iter().find(|(cid, _)| *cid == id)?;
        let students = with_students.then(|| {
            self.enrollments
                .iter()
                .filter(|(_, cid, _)| *cid == id)
                .filter_map(|(sid, _, date)| {
                    let (_, student) = self.students.iter().find(|(s, _)| s == sid)?;
                    Some(EnrolledStudent {
                        id: *sid,
                        first_name: student.first_name.clone(),
                        last_name: student.last_name.clone(),
                        email: student.email.clone(),
                        enrollment_date: Some(format!("{date}T00:00:00")),
                    })
                })
                .collect()
        });
        Some(Course {
            id,
            name: course.name.clone(),
            description: course.description.clone(),
            credits: course.credits,
            students,
        })
    }
}

#[derive(Default)]
pub struct FakeApi {
    tables: RefCell<Tables>,
    calls: RefCell<Vec<String>>,
    failing: RefCell<HashSet<String>>,
    garbled: RefCell<HashSet<String>>,
}

fn not_found(what: &str) -> ClientError {
    ClientError::Status {
        status: 404,
        detail: Some(format!("{what} not found")),
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call recorded under `label` fail with a 500.
    pub fn fail(&self, label: &str) {
        self.failing.borrow_mut().insert(label.to_string());
    }

    /// Makes every call recorded under `label` apply normally but answer
    /// with a 2xx body that does not parse as the record.
    pub fn garble(&self, label: &str) {
        self.garbled.borrow_mut().insert(label.to_string());
    }

    pub fn recover(&self, label: &str) {
        self.failing.borrow_mut().remove(label);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Server-side view of the student list, for drift checks.
    pub fn remote_students(&self) -> Vec<Student> {
        let tables = self.tables.borrow();
        tables
            .students
            .iter()
            .filter_map(|(id, _)| tables.student(*id))
            .collect()
    }

    pub fn remote_courses(&self) -> Vec<Course> {
        let tables = self.tables.borrow();
        tables
            .courses
            .iter()
            .filter_map(|(id, _)| tables.course(*id, false))
            .collect()
    }

    /// Seeds a student directly, bypassing the call log.
    pub fn seed_student(&self, first: &str, last: &str) -> Id {
        let mut tables = self.tables.borrow_mut();
        let id = tables.next_id();
        tables.students.push((
            id,
            NewStudent {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{}@x.io", first.to_lowercase()),
            },
        ));
        id
    }

    pub fn seed_course(&self, name: &str) -> Id {
        let mut tables = self.tables.borrow_mut();
        let id = tables.next_id();
        tables.courses.push((
            id,
            NewCourse {
                name: name.to_string(),
                description: None,
                credits: 3,
            },
        ));
        id
    }

    pub fn seed_enrollment(&self, student_id: Id, course_id: Id, date: &str) {
        self.tables
            .borrow_mut()
            .enrollments
            .push((student_id, course_id, date.to_string()));
    }

    fn record(&self, label: String) -> Result<(), ClientError> {
        let failing = self.failing.borrow().contains(&label);
        self.calls.borrow_mut().push(label);
        if failing {
            return Err(ClientError::Status {
                status: 500,
                detail: Some("Internal Server Error".to_string()),
            });
        }
        Ok(())
    }
}

impl FakeApi {
    /// Answers an applied write the way the server would, then classifies
    /// the raw response like the browser client does.
    fn written(&self, label: &str, status: u16, body: String) -> Result<(), ClientError> {
        let body = if self.garbled.borrow().contains(label) {
            "<html><body>Created</body></html>".to_string()
        } else {
            body
        };
        check_status(status, &body)
    }
}

fn json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl Api for FakeApi {
    async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        self.record("GET /students/".to_string())?;
        Ok(self.remote_students())
    }

    async fn get_student(&self, id: Id) -> Result<Student, ClientError> {
        self.record(format!("GET /students/{id}"))?;
        self.tables.borrow().student(id).ok_or_else(|| not_found("Student"))
    }

    async fn create_student(&self, student: &NewStudent) -> Result<(), ClientError> {
        let label = "POST /students/";
        self.record(label.to_string())?;
        let created = {
            let mut tables = self.tables.borrow_mut();
            let id = tables.next_id();
            tables.students.push((id, student.clone()));
            tables.student(id).ok_or_else(|| not_found("Student"))?
        };
        self.written(label, 201, json(&created))
    }

    async fn update_student(&self, id: Id, student: &NewStudent) -> Result<(), ClientError> {
        let label = format!("PATCH /students/{id}");
        self.record(label.clone())?;
        let updated = {
            let mut tables = self.tables.borrow_mut();
            let slot = tables
                .students
                .iter_mut()
                .find(|(sid, _)| *sid == id)
                .ok_or_else(|| not_found("Student"))?;
            slot.1 = student.clone();
            tables.student(id).ok_or_else(|| not_found("Student"))?
        };
        self.written(&label, 200, json(&updated))
    }

    async fn delete_student(&self, id: Id) -> Result<(), ClientError> {
        self.record(format!("DELETE /students/deleteStudentById/?student_id={id}"))?;
        let mut tables = self.tables.borrow_mut();
        if !tables.students.iter().any(|(sid, _)| *sid == id) {
            return Err(not_found("Student"));
        }
        tables.enrollments.retain(|(sid, _, _)| *sid != id);
        tables.students.retain(|(sid, _)| *sid != id);
        Ok(())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ClientError> {
        self.record("GET /courses/".to_string())?;
        Ok(self.remote_courses())
    }

    async fn get_course(&self, id: Id) -> Result<Course, ClientError> {
        self.record(format!("GET /courses/{id}"))?;
        self.tables.borrow().course(id, true).ok_or_else(|| not_found("Course"))
    }

    async fn create_course(&self, course: &NewCourse) -> Result<(), ClientError> {
        let label = "POST /courses/";
        self.record(label.to_string())?;
        let created = {
            let mut tables = self.tables.borrow_mut();
            let id = tables.next_id();
            tables.courses.push((id, course.clone()));
            tables.course(id, false).ok_or_else(|| not_found("Course"))?
        };
        self.written(label, 201, json(&created))
    }

    async fn update_course(&self, id: Id, course: &NewCourse) -> Result<(), ClientError> {
        let label = format!("PATCH /courses/{id}");
        self.record(label.clone())?;
        let updated = {
            let mut tables = self.tables.borrow_mut();
            let slot = tables
                .courses
                .iter_mut()
                .find(|(cid, _)| *cid == id)
                .ok_or_else(|| not_found("Course"))?;
            slot.1 = course.clone();
            tables.course(id, false).ok_or_else(|| not_found("Course"))?
        };
        self.written(&label, 200, json(&updated))
    }

    async fn delete_course(&self, id: Id) -> Result<(), ClientError> {
        self.record(format!("DELETE /courses/{id}"))?;
        let mut tables = self.tables.borrow_mut();
        if !tables.courses.iter().any(|(cid, _)| *cid == id) {
            return Err(not_found("Course"));
        }
        tables.enrollments.retain(|(_, cid, _)| *cid != id);
        tables.courses.retain(|(cid, _)| *cid != id);
        Ok(())
    }

    async fn create_enrollment(&self, enrollment: &NewEnrollment) -> Result<(), ClientError> {
        self.record("POST /enrollments/".to_string())?;
        let mut tables = self.tables.borrow_mut();
        let NewEnrollment {
            student_id,
            course_id,
            enrollment_date,
        } = enrollment;
        if !tables.students.iter().any(|(sid, _)| sid == student_id) {
            return Err(not_found(&format!("Student with ID {student_id}")));
        }
        if !tables.courses.iter().any(|(cid, _)| cid == course_id) {
            return Err(not_found(&format!("Course with ID {course_id}")));
        }
        if tables
            .enrollments
            .iter()
            .any(|(sid, cid, _)| sid == student_id && cid == course_id)
        {
            return Err(ClientError::Status {
                status: 409,
                detail: Some("Student is already enrolled in this course.".to_string()),
            });
        }
        tables
            .enrollments
            .push((*student_id, *course_id, enrollment_date.clone()));
        drop(tables);
        self.written("POST /enrollments/", 201, json(enrollment))
    }

    async fn delete_enrollment(&self, student_id: Id, course_id: Id) -> Result<(), ClientError> {
        self.record(format!("DELETE /enrollments/{student_id}/{course_id}"))?;
        let mut tables = self.tables.borrow_mut();
        let before = tables.enrollments.len();
        tables
            .enrollments
            .retain(|(sid, cid, _)| !(*sid == student_id && *cid == course_id));
        if tables.enrollments.len() == before {
            return Err(not_found("Enrollment record"));
        }
        Ok(())
    }
}

/// Runs one action end to end, accepting any confirmation prompt.
pub async fn drive(controller: &mut Controller, api: &FakeApi, action: Action) -> Vec<Notice> {
    drive_answering(controller, api, action, true).await
}

/// Runs one action end to end, answering confirmation prompts with `accept`.
/// Returns no notices when the action was declined or rejected as busy.
pub async fn drive_answering(
    controller: &mut Controller,
    api: &FakeApi,
    action: Action,
    accept: bool,
) -> Vec<Notice> {
    match controller.begin(action, |_| accept) {
        Dispatch::Ready(action) => {
            let completion = execute(api, action).await;
            controller.complete(completion)
        }
        Dispatch::Declined | Dispatch::Busy(_) => Vec::new(),
    }
}
