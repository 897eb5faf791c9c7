use std::fmt;

/// Outcome of a replica operation as seen on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResponseCode {
    Ok,
    InactiveServer,
    InvalidArgument,
    EnrollmentsAlreadyOpened,
    EnrollmentsAlreadyClosed,
    FullClass,
    StudentAlreadyEnrolled,
    NonExistingStudent,
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseCode::Ok => "OK",
            ResponseCode::InactiveServer => "INACTIVE_SERVER",
            ResponseCode::InvalidArgument => "INVALID_ARGUMENT",
            ResponseCode::EnrollmentsAlreadyOpened => "ENROLLMENTS_ALREADY_OPENED",
            ResponseCode::EnrollmentsAlreadyClosed => "ENROLLMENTS_ALREADY_CLOSED",
            ResponseCode::FullClass => "FULL_CLASS",
            ResponseCode::StudentAlreadyEnrolled => "STUDENT_ALREADY_ENROLLED",
            ResponseCode::NonExistingStudent => "NON_EXISTING_STUDENT",
        };
        f.write_str(s)
    }
}
