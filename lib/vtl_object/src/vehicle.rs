use crate::error;
use crate::heap::{Heap, Zeroed};
use crate::metadata::Metadata;
use anyhow::Result;
use std::io::{self, Write};
use std::mem::offset_of;
use vtl_core::names::method_firstname;

/// Implementation of `start`. The receiver is always seen as a `Vehicle`,
/// whatever class the instance actually belongs to.
pub type StartFn = fn(&Vehicle, &mut dyn Write) -> io::Result<()>;

/// The root class.
///
/// ```text
/// class Vehicle
///   def start; end
///   def getColor -> Int; 9; end
/// end
/// ```
#[repr(C)]
#[derive(Debug)]
pub struct Vehicle {
    /// Never set by the constructors; dispatch does not consult it
    clazz: Option<&'static Metadata>,
    /// The `start` slot (set this to `vehicle_start`)
    start: Option<StartFn>,
}

// SAFETY: `Option<&T>` and `Option<fn>` are null when zeroed
unsafe impl Zeroed for Vehicle {}

/// ```text
/// class Truck : Vehicle
///   def start; end
///   def setPayload(n: Int); end
/// end
/// ```
#[repr(C)]
#[derive(Debug)]
pub struct Truck {
    base: Vehicle,
}

// SAFETY: `Truck` only consists of a `Vehicle`
unsafe impl Zeroed for Truck {}

// `Truck` must start with the fields of `Vehicle`, in the same order.
const _: () = assert!(offset_of!(Truck, base) == 0);
const _: () = assert!(std::mem::size_of::<Truck>() >= std::mem::size_of::<Vehicle>());

pub fn vehicle_start(_this: &Vehicle, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Vehicle_start")
}

pub fn truck_start(_this: &Vehicle, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Truck_start")
}

impl Vehicle {
    /// Allocate a zeroed `Vehicle` and point its slot to `vehicle_start`.
    pub fn new(heap: &mut Heap) -> Result<Box<Vehicle>> {
        let mut v = heap.calloc::<Vehicle>()?;
        v.set_start(vehicle_start);
        Ok(v)
    }

    pub fn clazz(&self) -> Option<&'static Metadata> {
        self.clazz
    }

    /// Overwrite the `start` slot
    pub fn set_start(&mut self, f: StartFn) {
        self.start = Some(f);
    }

    /// Returns the function currently in the `start` slot
    pub fn start_slot(&self) -> Option<StartFn> {
        self.start
    }

    /// Call whatever is in the `start` slot with `self` as the receiver.
    pub fn start(&self, out: &mut dyn Write) -> Result<()> {
        let Some(f) = self.start else {
            return Err(error::unassigned_slot(method_firstname("start")));
        };
        f(self, out)?;
        Ok(())
    }
}

impl Truck {
    /// Allocate a zeroed `Truck` and point its slot to `truck_start`.
    pub fn new(heap: &mut Heap) -> Result<Box<Truck>> {
        let mut t = heap.calloc::<Truck>()?;
        t.base.set_start(truck_start);
        Ok(t)
    }

    /// View this truck as a `Vehicle`. Nothing is copied.
    pub fn as_vehicle(&self) -> &Vehicle {
        &self.base
    }

    pub fn as_vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.base
    }

    pub fn start(&self, out: &mut dyn Write) -> Result<()> {
        self.base.start(out)
    }
}

impl AsRef<Vehicle> for Vehicle {
    fn as_ref(&self) -> &Vehicle {
        self
    }
}

impl AsRef<Vehicle> for Truck {
    fn as_ref(&self) -> &Vehicle {
        self.as_vehicle()
    }
}
