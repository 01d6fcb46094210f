//! The remote service as the client consumes it.
//!
//! `Api` is the seam between the sync layer and the network. The browser
//! build implements it over `gloo-net`; tests implement it in memory. Futures
//! are not required to be `Send` because the browser runs everything on one
//! thread.

pub mod response;
pub mod routes;

use crate::error::ClientError;
use crate::model::Id;
use crate::model::course::Course;
use crate::model::student::Student;
use crate::requests::{NewCourse, NewEnrollment, NewStudent};

/// One method per REST endpoint. Any non-2xx response must surface as
/// [`ClientError::Status`], regardless of body.
///
/// Mutations report only whether the server accepted them; the created or
/// updated record reaches the mirrors through the follow-up reload, so a 2xx
/// body is never decoded (see [`response::check_status`]).
#[allow(async_fn_in_trait)]
pub trait Api {
    async fn list_students(&self) -> Result<Vec<Student>, ClientError>;
    async fn get_student(&self, id: Id) -> Result<Student, ClientError>;
    async fn create_student(&self, student: &NewStudent) -> Result<(), ClientError>;
    async fn update_student(&self, id: Id, student: &NewStudent) -> Result<(), ClientError>;
    async fn delete_student(&self, id: Id) -> Result<(), ClientError>;

    async fn list_courses(&self) -> Result<Vec<Course>, ClientError>;
    async fn get_course(&self, id: Id) -> Result<Course, ClientError>;
    async fn create_course(&self, course: &NewCourse) -> Result<(), ClientError>;
    async fn update_course(&self, id: Id, course: &NewCourse) -> Result<(), ClientError>;
    async fn delete_course(&self, id: Id) -> Result<(), ClientError>;

    async fn create_enrollment(&self, enrollment: &NewEnrollment) -> Result<(), ClientError>;
    async fn delete_enrollment(&self, student_id: Id, course_id: Id) -> Result<(), ClientError>;
}
