use log::{debug, warn};

use crate::api::Api;
use crate::error::ClientError;
use crate::model::course::Course;
use crate::model::student::Student;
use crate::sync::action::{Action, ActionKey, Collection};

/// Result of re-fetching one collection.
#[derive(Debug)]
pub enum Reload {
    Students(Result<Vec<Student>, ClientError>),
    Courses(Result<Vec<Course>, ClientError>),
}

/// Everything an executed action produced, to be applied on the UI thread.
#[derive(Debug)]
pub struct Completion {
    pub key: ActionKey,
    /// Always `Ok` for plain loads.
    pub mutation: Result<(), ClientError>,
    /// Empty when the mutation failed.
    pub reloads: Vec<Reload>,
}

impl Completion {
    pub fn succeeded(&self) -> bool {
        self.mutation.is_ok()
    }
}

/// Sends `action` and, if it succeeds, re-fetches every collection its kind
/// invalidates.
///
/// Steps run strictly one after another, so each reload observes the
/// mutation. Nothing is retried; a failed mutation skips the reloads.
pub async fn execute<A: Api>(api: &A, action: Action) -> Completion {
    let key = action.key();
    debug!("dispatching {:?}", key);

    let mutation = mutate(api, action).await;
    let reloads = match &mutation {
        Ok(()) => reload(api, &key.kind.fetch_plan()).await,
        Err(err) => {
            warn!("{:?} failed: {}", key.kind, err);
            Vec::new()
        }
    };

    Completion {
        key,
        mutation,
        reloads,
    }
}

async fn mutate<A: Api>(api: &A, action: Action) -> Result<(), ClientError> {
    match action {
        Action::LoadAll | Action::LoadStudents | Action::LoadCourses | Action::LoadEnrollments => {
            Ok(())
        }
        Action::CreateStudent(student) => api.create_student(&student).await,
        Action::UpdateStudent(id, student) => api.update_student(id, &student).await,
        Action::DeleteStudent(id) => api.delete_student(id).await,
        Action::CreateCourse(course) => api.create_course(&course).await,
        Action::UpdateCourse(id, course) => api.update_course(id, &course).await,
        Action::DeleteCourse(id) => api.delete_course(id).await,
        Action::CreateEnrollment(enrollment) => api.create_enrollment(&enrollment).await,
        Action::DeleteEnrollment {
            student_id,
            course_id,
        } => api.delete_enrollment(student_id, course_id).await,
    }
}

async fn reload<A: Api>(api: &A, plan: &[Collection]) -> Vec<Reload> {
    let mut reloads = Vec::with_capacity(plan.len());
    for collection in plan {
        debug!("reloading {:?}", collection);
        let reload = match collection {
            Collection::Students => Reload::Students(api.list_students().await),
            Collection::Courses => Reload::Courses(api.list_courses().await),
        };
        reloads.push(reload);
    }
    reloads
}
