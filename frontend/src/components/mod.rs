pub mod courses;
pub mod enrollments;
pub mod fields;
pub mod registry;
pub mod students;
