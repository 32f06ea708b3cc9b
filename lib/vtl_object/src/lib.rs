//! Objects whose methods are dispatched through a per-instance slot.
//!
//! `Vehicle` and `Truck` share a `#[repr(C)]` prefix (`Truck` embeds a
//! `Vehicle` as its first member), so a `Truck` borrowed as a `Vehicle`
//! still reaches `Truck`'s behavior. The `ClassTable` describes the same
//! classes at the type level: name, instance size and vtable.
mod class_table;
pub mod classes;
pub mod error;
mod heap;
mod metadata;
mod vehicle;
mod vtable;
pub use crate::class_table::{ClassDecl, ClassTable};
pub use crate::heap::{Heap, Zeroed};
pub use crate::metadata::Metadata;
pub use crate::vehicle::{truck_start, vehicle_start, StartFn, Truck, Vehicle};
pub use crate::vtable::VTable;
