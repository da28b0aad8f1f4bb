//! Student use cases and request validation.

mod students;
mod validation;
pub use students::StudentService;
pub use validation::RequestValidator;
