use std::fmt;

/// Fixed at class server startup. Breaks merge ties and biases client routing.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Role {
    Primary,
    Secondary,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Primary, Role::Secondary];

    /// The single-letter qualifier used on the command line.
    pub fn qualifier(&self) -> &'static str {
        match self {
            Role::Primary => "P",
            Role::Secondary => "S",
        }
    }

    pub fn from_qualifier(qualifier: &str) -> Option<Role> {
        match qualifier {
            "P" => Some(Role::Primary),
            "S" => Some(Role::Secondary),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}
