use crate::class_table::ClassDecl;
use crate::error;
use crate::vtable::VTable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use vtl_core::names::ClassFullname;

/// Runtime identity of a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: ClassFullname,
    pub superclass: Option<ClassFullname>,
    /// Size of an instance in bytes
    pub size: usize,
    pub vtable: VTable,
}

impl Metadata {
    /// Create the metadata of `decl`, given the metadata of its superclass.
    pub fn build(super_meta: Option<&Metadata>, decl: &ClassDecl) -> Result<Metadata> {
        let null_vtable = VTable::null();
        let super_vtable = super_meta.map(|x| &x.vtable).unwrap_or(&null_vtable);
        let meta = Metadata {
            name: decl.name.clone(),
            superclass: decl.superclass.clone(),
            size: decl.size,
            vtable: VTable::build(super_vtable, decl),
        };
        if let Some(s) = super_meta {
            s.check_prefix_of(&meta)?;
        }
        Ok(meta)
    }

    /// Check that an instance of `sub` can be used where `self` is expected,
    /// i.e. its size and slots start with those of `self`.
    pub fn check_prefix_of(&self, sub: &Metadata) -> Result<()> {
        if sub.size < self.size {
            return Err(error::layout_mismatch(format!(
                "`{}' ({} bytes) is smaller than its superclass `{}' ({} bytes)",
                sub.name, sub.size, self.name, self.size
            )));
        }
        if !self.vtable.is_prefix_of(&sub.vtable) {
            return Err(error::layout_mismatch(format!(
                "vtable of `{}' does not start with the slots of `{}'",
                sub.name, self.name
            )));
        }
        Ok(())
    }
}
