use vtl_core::names::{ClassFullname, MethodFirstname};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The heap could not hand out the requested storage
    #[error("out of memory: cannot allocate {size} bytes for {class}")]
    OutOfMemory { class: String, size: usize },
    /// Invoked a method whose slot still holds the zeroed value
    #[error("method slot `{method}' is not assigned")]
    UnassignedSlot { method: MethodFirstname },
    /// A subclass is not prefix-compatible with its superclass
    #[error("{msg}")]
    LayoutMismatch { msg: String },
    #[error("unknown class `{name}'")]
    UnknownClass { name: ClassFullname },
    #[error("class `{name}' inherits from itself")]
    InheritanceCycle { name: ClassFullname },
}

pub fn out_of_memory(class: impl Into<String>, size: usize) -> anyhow::Error {
    Error::OutOfMemory {
        class: class.into(),
        size,
    }
    .into()
}

pub fn unassigned_slot(method: MethodFirstname) -> anyhow::Error {
    Error::UnassignedSlot { method }.into()
}

pub fn layout_mismatch(msg: impl Into<String>) -> anyhow::Error {
    Error::LayoutMismatch { msg: msg.into() }.into()
}

pub fn unknown_class(name: &ClassFullname) -> anyhow::Error {
    Error::UnknownClass { name: name.clone() }.into()
}

pub fn inheritance_cycle(name: &ClassFullname) -> anyhow::Error {
    Error::InheritanceCycle { name: name.clone() }.into()
}
