//! Conversions between the domain types and the generated protobuf types.
use crate::common::{ClassState, ResponseCode, Role, StudentRecord};
use crate::grpc::{ProtoClassState, ProtoResponseCode, ProtoRole, ProtoStudent};

pub(crate) fn response_code_to_proto(code: ResponseCode) -> i32 {
    let proto = match code {
        ResponseCode::Ok => ProtoResponseCode::Ok,
        ResponseCode::InactiveServer => ProtoResponseCode::InactiveServer,
        ResponseCode::InvalidArgument => ProtoResponseCode::InvalidArgument,
        ResponseCode::EnrollmentsAlreadyOpened => ProtoResponseCode::EnrollmentsAlreadyOpened,
        ResponseCode::EnrollmentsAlreadyClosed => ProtoResponseCode::EnrollmentsAlreadyClosed,
        ResponseCode::FullClass => ProtoResponseCode::FullClass,
        ResponseCode::StudentAlreadyEnrolled => ProtoResponseCode::StudentAlreadyEnrolled,
        ResponseCode::NonExistingStudent => ProtoResponseCode::NonExistingStudent,
    };

    proto as i32
}

pub(crate) fn response_code_from_proto(value: i32) -> Option<ResponseCode> {
    let code = match ProtoResponseCode::from_i32(value)? {
        ProtoResponseCode::Ok => ResponseCode::Ok,
        ProtoResponseCode::InactiveServer => ResponseCode::InactiveServer,
        ProtoResponseCode::InvalidArgument => ResponseCode::InvalidArgument,
        ProtoResponseCode::EnrollmentsAlreadyOpened => ResponseCode::EnrollmentsAlreadyOpened,
        ProtoResponseCode::EnrollmentsAlreadyClosed => ResponseCode::EnrollmentsAlreadyClosed,
        ProtoResponseCode::FullClass => ResponseCode::FullClass,
        ProtoResponseCode::StudentAlreadyEnrolled => ResponseCode::StudentAlreadyEnrolled,
        ProtoResponseCode::NonExistingStudent => ResponseCode::NonExistingStudent,
    };

    Some(code)
}

pub(crate) fn role_to_proto(role: Role) -> i32 {
    let proto = match role {
        Role::Primary => ProtoRole::Primary,
        Role::Secondary => ProtoRole::Secondary,
    };

    proto as i32
}

pub(crate) fn role_from_proto(value: i32) -> Option<Role> {
    match ProtoRole::from_i32(value)? {
        ProtoRole::Primary => Some(Role::Primary),
        ProtoRole::Secondary => Some(Role::Secondary),
        ProtoRole::RoleUnspecified => None,
    }
}

impl From<StudentRecord> for ProtoStudent {
    fn from(student: StudentRecord) -> Self {
        ProtoStudent {
            student_id: student.id,
            student_name: student.name,
        }
    }
}

impl From<ProtoStudent> for StudentRecord {
    fn from(proto: ProtoStudent) -> Self {
        StudentRecord {
            id: proto.student_id,
            name: proto.student_name,
        }
    }
}

impl From<ClassState> for ProtoClassState {
    fn from(state: ClassState) -> Self {
        ProtoClassState {
            capacity: state.capacity,
            open_enrollments: state.open_enrollments,
            enrolled: state.enrolled.into_iter().map(ProtoStudent::from).collect(),
            discarded: state.discarded.into_iter().map(ProtoStudent::from).collect(),
        }
    }
}

impl From<ProtoClassState> for ClassState {
    fn from(proto: ProtoClassState) -> Self {
        ClassState {
            capacity: proto.capacity,
            open_enrollments: proto.open_enrollments,
            enrolled: proto.enrolled.into_iter().map(StudentRecord::from).collect(),
            discarded: proto.discarded.into_iter().map(StudentRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_values() {
        assert_eq!(response_code_from_proto(42), None);
        assert_eq!(role_from_proto(0), None);
        assert_eq!(role_from_proto(42), None);
    }

    #[test]
    fn every_response_code_survives_the_wire() {
        let codes = [
            ResponseCode::Ok,
            ResponseCode::InactiveServer,
            ResponseCode::InvalidArgument,
            ResponseCode::EnrollmentsAlreadyOpened,
            ResponseCode::EnrollmentsAlreadyClosed,
            ResponseCode::FullClass,
            ResponseCode::StudentAlreadyEnrolled,
            ResponseCode::NonExistingStudent,
        ];
        for code in codes.iter() {
            assert_eq!(response_code_from_proto(response_code_to_proto(*code)), Some(*code));
        }
    }
}
