const STUDENT_ID_PREFIX: &str = "aluno";
const STUDENT_ID_DIGITS: usize = 4;
const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 30;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
}

impl StudentRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        StudentRecord {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Student ids are exactly `aluno` followed by four ASCII digits, e.g. `aluno0042`.
pub fn is_valid_student_id(id: &str) -> bool {
    match id.strip_prefix(STUDENT_ID_PREFIX) {
        Some(digits) => digits.len() == STUDENT_ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

pub fn is_valid_student_name(name: &str) -> bool {
    let len = name.chars().count();
    len >= MIN_NAME_LEN && len <= MAX_NAME_LEN
}
