use crate::api::Api;
use crate::error::ClientError;
use crate::model::Id;
use crate::model::course::Course;
use crate::model::student::Student;
use crate::sync::notice::Notice;

/// A read-only single-record fetch for the detail modals. Never touches the
/// mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRequest {
    Student(Id),
    Course(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    Student(Student),
    Course(Course),
}

impl DetailRequest {
    pub fn failure_notice(self, err: &ClientError) -> Notice {
        match self {
            DetailRequest::Student(_) => Notice::failure(
                "Error loading student details",
                "Failed to load student details",
                err,
                false,
            ),
            DetailRequest::Course(_) => Notice::failure(
                "Error loading course details",
                "Failed to load course details",
                err,
                false,
            ),
        }
    }
}

impl Detail {
    pub fn request(&self) -> DetailRequest {
        match self {
            Detail::Student(student) => DetailRequest::Student(student.id),
            Detail::Course(course) => DetailRequest::Course(course.id),
        }
    }
}

pub async fn fetch_detail<A: Api>(api: &A, request: DetailRequest) -> Result<Detail, ClientError> {
    match request {
        DetailRequest::Student(id) => api.get_student(id).await.map(Detail::Student),
        DetailRequest::Course(id) => api.get_course(id).await.map(Detail::Course),
    }
}
