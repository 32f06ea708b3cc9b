use serde::{Deserialize, Serialize};

/// Name of a class (eg. `Vehicle`)
#[derive(Debug, PartialEq, Clone, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassFullname(pub String);

impl std::fmt::Display for ClassFullname {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn class_fullname(s: impl Into<String>) -> ClassFullname {
    let name = s.into();
    debug_assert!(!name.is_empty());
    debug_assert!(!name.contains('#'));
    ClassFullname(name)
}

impl ClassFullname {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
