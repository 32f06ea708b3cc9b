use crate::class_table::ClassDecl;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vtl_core::names::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<MethodFullname>", into = "Vec<MethodFullname>")]
pub struct VTable {
    /// List of methods, ordered by index
    fullnames: Vec<MethodFullname>,
    /// Mapping from firstname to index
    index: HashMap<MethodFirstname, usize>,
}

impl VTable {
    /// Create an empty VTable
    pub fn null() -> VTable {
        VTable {
            fullnames: vec![],
            index: HashMap::new(),
        }
    }

    /// Build a VTable of a class. Methods redefined by the class keep the
    /// index they have in `super_vtable`; new ones are appended.
    pub fn build(super_vtable: &VTable, class: &ClassDecl) -> VTable {
        let mut vtable = super_vtable.clone();
        for first_name in &class.methods {
            if let Some(&i) = vtable.index.get(first_name) {
                vtable.fullnames[i] = vtable.fullnames[i].redefined_in(&class.name);
            } else {
                vtable.push(method_fullname(class.name.clone(), first_name.0.clone()));
            }
        }
        vtable
    }

    fn push(&mut self, name: MethodFullname) {
        let i = self.fullnames.len();
        self.index.insert(name.first_name.clone(), i);
        self.fullnames.push(name);
    }

    /// Returns the size
    pub fn size(&self) -> usize {
        self.fullnames.len()
    }

    /// Returns the index of the method
    pub fn get(&self, name: &MethodFirstname) -> Option<&usize> {
        self.index.get(name)
    }

    /// Returns the list of method names, ordered by the index.
    pub fn to_vec(&self) -> &Vec<MethodFullname> {
        &self.fullnames
    }

    /// Returns true if `other` has the slots of `self` at the same indices
    pub fn is_prefix_of(&self, other: &VTable) -> bool {
        self.size() <= other.size()
            && self
                .fullnames
                .iter()
                .zip(&other.fullnames)
                .all(|(a, b)| a.first_name == b.first_name)
    }
}

impl From<Vec<MethodFullname>> for VTable {
    fn from(names: Vec<MethodFullname>) -> Self {
        let mut vtable = VTable::null();
        for name in names {
            vtable.push(name);
        }
        vtable
    }
}

impl From<VTable> for Vec<MethodFullname> {
    fn from(vtable: VTable) -> Self {
        vtable.fullnames
    }
}
