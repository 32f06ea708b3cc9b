use crate::error;
use crate::metadata::Metadata;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use vtl_core::names::*;

/// Declaration of a class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: ClassFullname,
    pub superclass: Option<ClassFullname>,
    /// Size of an instance in bytes
    pub size: usize,
    /// Methods defined (or redefined) by this class
    pub methods: Vec<MethodFirstname>,
}

impl ClassDecl {
    pub fn new(name: &str, superclass: Option<&str>, size: usize, methods: &[&str]) -> ClassDecl {
        ClassDecl {
            name: class_fullname(name),
            superclass: superclass.map(class_fullname),
            size,
            methods: methods.iter().map(|x| method_firstname(*x)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassTable {
    classes: BTreeMap<ClassFullname, Metadata>,
}

impl ClassTable {
    /// Build the metadata of the classes. Superclasses are processed first
    /// regardless of the order of `decls`.
    pub fn build(decls: &[ClassDecl]) -> Result<ClassTable> {
        let by_name = decls
            .iter()
            .map(|x| (&x.name, x))
            .collect::<HashMap<_, _>>();
        let mut classes = BTreeMap::new();
        for decl in decls {
            // Classes from `decl` up to the first one already built (or the root)
            let mut chain = vec![decl];
            let mut visiting = HashSet::from([&decl.name]);
            let mut cur = decl;
            while let Some(super_name) = &cur.superclass {
                if classes.contains_key(super_name) {
                    break;
                }
                let Some(super_decl) = by_name.get(super_name) else {
                    return Err(error::unknown_class(super_name));
                };
                if !visiting.insert(super_name) {
                    return Err(error::inheritance_cycle(super_name));
                }
                chain.push(*super_decl);
                cur = *super_decl;
            }
            for c in chain.into_iter().rev() {
                if classes.contains_key(&c.name) {
                    continue;
                }
                let super_meta = c.superclass.as_ref().and_then(|x| classes.get(x));
                let meta = Metadata::build(super_meta, c)?;
                log::debug!("built metadata of {} ({} slots)", c.name, meta.vtable.size());
                classes.insert(c.name.clone(), meta);
            }
        }
        Ok(ClassTable { classes })
    }

    pub fn get(&self, name: &ClassFullname) -> Option<&Metadata> {
        self.classes.get(name)
    }

    /// Return the index of the method when invoking it on an instance of
    /// the class, along with the vtable size
    pub fn method_idx(
        &self,
        class_name: &ClassFullname,
        method_name: &MethodFirstname,
    ) -> Option<(usize, usize)> {
        let vtable = &self.classes.get(class_name)?.vtable;
        vtable.get(method_name).map(|idx| (*idx, vtable.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn vehicle() -> ClassDecl {
        ClassDecl::new("Vehicle", None, 16, &["start", "getColor"])
    }

    fn truck() -> ClassDecl {
        ClassDecl::new("Truck", Some("Vehicle"), 16, &["start", "setPayload"])
    }

    #[test]
    fn test_subclass_declared_first() -> Result<()> {
        let table = ClassTable::build(&[truck(), vehicle()])?;
        assert!(table.get(&class_fullname("Vehicle")).is_some());
        let names = table
            .get(&class_fullname("Truck"))
            .unwrap()
            .vtable
            .to_vec()
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Truck#start", "Vehicle#getColor", "Truck#setPayload"]);
        Ok(())
    }

    #[test]
    fn test_method_idx() -> Result<()> {
        let table = ClassTable::build(&[vehicle(), truck()])?;
        let start = method_firstname("start");
        assert_eq!(table.method_idx(&class_fullname("Vehicle"), &start), Some((0, 2)));
        assert_eq!(table.method_idx(&class_fullname("Truck"), &start), Some((0, 3)));
        assert_eq!(
            table.method_idx(&class_fullname("Vehicle"), &method_firstname("setPayload")),
            None
        );
        assert_eq!(table.method_idx(&class_fullname("Bus"), &start), None);
        Ok(())
    }

    #[test]
    fn test_deep_hierarchy() -> Result<()> {
        let decls = [
            ClassDecl::new("DumpTruck", Some("Truck"), 24, &["dump"]),
            truck(),
            vehicle(),
        ];
        let table = ClassTable::build(&decls)?;
        let (idx, size) = table
            .method_idx(&class_fullname("DumpTruck"), &method_firstname("dump"))
            .unwrap();
        assert_eq!((idx, size), (3, 4));
        Ok(())
    }

    #[test]
    fn test_four_levels_subclass_first() -> Result<()> {
        let decls = [
            ClassDecl::new("D", Some("C"), 16, &["d"]),
            ClassDecl::new("C", Some("B"), 16, &["c"]),
            ClassDecl::new("B", Some("A"), 16, &["b"]),
            ClassDecl::new("A", None, 16, &["a"]),
        ];
        let table = ClassTable::build(&decls)?;
        let names = table
            .get(&class_fullname("D"))
            .unwrap()
            .vtable
            .to_vec()
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, ["A#a", "B#b", "C#c", "D#d"]);
        Ok(())
    }

    #[test]
    fn test_cycle_above_valid_class() {
        let decls = [
            ClassDecl::new("D", Some("C"), 16, &[]),
            ClassDecl::new("C", Some("B"), 16, &[]),
            ClassDecl::new("B", Some("C"), 16, &[]),
        ];
        let err = ClassTable::build(&decls).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InheritanceCycle { .. })
        ));
    }

    #[test]
    fn test_unknown_superclass() {
        let err = ClassTable::build(&[truck()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownClass { name }) if name.as_str() == "Vehicle"
        ));
    }

    #[test]
    fn test_inheritance_cycle() {
        let decls = [
            ClassDecl::new("A", Some("B"), 16, &[]),
            ClassDecl::new("B", Some("A"), 16, &[]),
        ];
        let err = ClassTable::build(&decls).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InheritanceCycle { .. })
        ));
    }

    #[test]
    fn test_layout_mismatch() {
        let decls = [vehicle(), ClassDecl::new("Truck", Some("Vehicle"), 8, &["start"])];
        let err = ClassTable::build(&decls).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::LayoutMismatch { .. })
        ));
    }
}
