//! Declarations of the built-in classes
use crate::class_table::{ClassDecl, ClassTable};
use crate::vehicle::{Truck, Vehicle};
use anyhow::Result;
use std::mem::size_of;

/// `Vehicle` and its subclass `Truck`
pub fn create() -> Vec<ClassDecl> {
    vec![
        ClassDecl::new("Vehicle", None, size_of::<Vehicle>(), &["start", "getColor"]),
        ClassDecl::new(
            "Truck",
            Some("Vehicle"),
            size_of::<Truck>(),
            &["start", "setPayload"],
        ),
    ]
}

/// Build the class table of the built-in classes
pub fn class_table() -> Result<ClassTable> {
    ClassTable::build(&create())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtl_core::names::class_fullname;

    #[test]
    fn test_builtin_classes() -> Result<()> {
        let table = class_table()?;
        let truck = table.get(&class_fullname("Truck")).unwrap();
        assert_eq!(truck.size, size_of::<Truck>());
        let json = serde_json::to_value(&table)?;
        assert_eq!(
            json["Truck"]["vtable"],
            serde_json::json!(["Truck#start", "Vehicle#getColor", "Truck#setPayload"])
        );
        assert_eq!(json["Vehicle"]["superclass"], serde_json::Value::Null);
        Ok(())
    }
}
