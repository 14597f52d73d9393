//!
//! The project configuration test tools.
//!

use crate::error::Error;
use crate::error::ValidationError;
use crate::project::Project;

pub(crate) fn project(input: &str) -> Project {
    Project::try_from_str(input).expect("Always valid")
}

pub(crate) fn validation_error(input: &str) -> ValidationError {
    match Project::try_from_str(input).expect_err("Always invalid") {
        Error::Validation(error) => error,
        error => panic!("Expected a validation error, got {:?}", error),
    }
}
