//! `Api` implementation over `gloo-net`'s `fetch` wrapper.
//!
//! Reads are decoded with `serde_json` so a malformed body surfaces as
//! `ClientError::Decode` rather than as a transport error. Writes are judged
//! by status alone through `check_status`; their bodies are never decoded.

use common::api::response::check_status;
use common::api::Api;
use common::config::ApiConfig;
use common::error::ClientError;
use common::model::course::Course;
use common::model::student::Student;
use common::model::Id;
use common::requests::{NewCourse, NewEnrollment, NewStudent};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn transport(err: gloo_net::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

async fn checked(response: Response) -> Result<Response, ClientError> {
    let body = if response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };
    check_status(response.status(), &body).map(|()| response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = checked(response).await?.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|err| ClientError::Decode(err.to_string()))
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ClientError> {
    let response = Request::get(url).send().await.map_err(transport)?;
    decode(response).await
}

async fn send<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<(), ClientError> {
    let response = builder
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    checked(response).await.map(drop)
}

async fn delete(url: &str) -> Result<(), ClientError> {
    let response = Request::delete(url).send().await.map_err(transport)?;
    checked(response).await.map(drop)
}

impl Api for HttpApi {
    async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        get(&self.config.routes().students()).await
    }

    async fn get_student(&self, id: Id) -> Result<Student, ClientError> {
        get(&self.config.routes().student(id)).await
    }

    async fn create_student(&self, student: &NewStudent) -> Result<(), ClientError> {
        send(Request::post(&self.config.routes().students()), student).await
    }

    async fn update_student(&self, id: Id, student: &NewStudent) -> Result<(), ClientError> {
        send(Request::patch(&self.config.routes().student(id)), student).await
    }

    async fn delete_student(&self, id: Id) -> Result<(), ClientError> {
        delete(&self.config.routes().delete_student(id)).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ClientError> {
        get(&self.config.routes().courses()).await
    }

    async fn get_course(&self, id: Id) -> Result<Course, ClientError> {
        get(&self.config.routes().course(id)).await
    }

    async fn create_course(&self, course: &NewCourse) -> Result<(), ClientError> {
        send(Request::post(&self.config.routes().courses()), course).await
    }

    async fn update_course(&self, id: Id, course: &NewCourse) -> Result<(), ClientError> {
        send(Request::patch(&self.config.routes().course(id)), course).await
    }

    async fn delete_course(&self, id: Id) -> Result<(), ClientError> {
        delete(&self.config.routes().course(id)).await
    }

    async fn create_enrollment(&self, enrollment: &NewEnrollment) -> Result<(), ClientError> {
        send(Request::post(&self.config.routes().enrollments()), enrollment).await
    }

    async fn delete_enrollment(&self, student_id: Id, course_id: Id) -> Result<(), ClientError> {
        delete(&self.config.routes().enrollment(student_id, course_id)).await
    }
}
