use super::class_name::*;
use serde::{de, ser, Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Method name without the class part (eg. `start`)
#[derive(Debug, PartialEq, Clone, Eq, Hash, Serialize, Deserialize)]
pub struct MethodFirstname(pub String);

impl std::fmt::Display for MethodFirstname {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn method_firstname(s: impl Into<String>) -> MethodFirstname {
    MethodFirstname(s.into())
}

/// Method name qualified with the class which defines it (eg. `Vehicle#start`)
#[derive(PartialEq, Clone, Eq)]
pub struct MethodFullname {
    // class part
    pub class_name: ClassFullname,
    // method part
    pub first_name: MethodFirstname,
    // cache
    pub full_name: String,
}

impl Hash for MethodFullname {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl fmt::Debug for MethodFullname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodFullname(`{}`)", &self.full_name)
    }
}

pub fn method_fullname(class_name: ClassFullname, first_name_: impl Into<String>) -> MethodFullname {
    let first_name = first_name_.into();
    debug_assert!(!first_name.is_empty());
    let full_name = class_name.0.clone() + "#" + &first_name;
    MethodFullname {
        class_name,
        full_name,
        first_name: MethodFirstname(first_name),
    }
}

pub fn method_fullname_raw(cls: impl Into<String>, method: impl Into<String>) -> MethodFullname {
    method_fullname(class_fullname(cls), method)
}

impl std::fmt::Display for MethodFullname {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

impl MethodFullname {
    /// Returns the name of the same method defined on another class
    pub fn redefined_in(&self, class_name: &ClassFullname) -> MethodFullname {
        method_fullname(class_name.clone(), self.first_name.0.clone())
    }
}

//
// serde - simplify JSON representation
//
impl ser::Serialize for MethodFullname {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.full_name)
    }
}

struct MethodFullnameVisitor;
impl<'de> de::Visitor<'de> for MethodFullnameVisitor {
    type Value = MethodFullname;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        formatter.write_str("a MethodFullname")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let parts = v.split('#').collect::<Vec<_>>();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            Ok(method_fullname_raw(parts[0], parts[1]))
        } else {
            Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(v),
                &"something like `Vehicle#start'",
            ))
        }
    }
}

impl<'de> de::Deserialize<'de> for MethodFullname {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(MethodFullnameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let name = method_fullname_raw("Truck", "setPayload");
        assert_eq!(name.to_string(), "Truck#setPayload");
        assert_eq!(name.first_name, method_firstname("setPayload"));
    }

    #[test]
    fn test_redefined_in() {
        let name = method_fullname_raw("Vehicle", "start");
        let over = name.redefined_in(&class_fullname("Truck"));
        assert_eq!(over.full_name, "Truck#start");
        assert_eq!(over.first_name, name.first_name);
    }

    #[test]
    fn test_json() {
        let name = method_fullname_raw("Vehicle", "getColor");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Vehicle#getColor\"");
        let back: MethodFullname = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
        assert!(serde_json::from_str::<MethodFullname>("\"getColor\"").is_err());
    }
}
