pub mod course;
pub mod enrollment;
pub mod student;

/// Server-assigned record identifier. Opaque to the client: it is only ever
/// read from responses and echoed back in routes and payloads.
pub type Id = i64;
