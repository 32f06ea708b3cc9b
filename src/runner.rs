use crate::cli::{Arguments, Command};
use anyhow::{Context, Result};
use std::io::Write;
use vtl_natives::{CallStatic, HelloJni};
use vtl_object::{classes, Heap, Truck, Vehicle};

/// Execute the command given on the command line
pub fn execute(args: &Arguments, out: &mut dyn Write) -> Result<()> {
    match args.command() {
        Command::Run => {
            let mut heap = match args.heap_limit()? {
                Some(limit) => Heap::with_limit(limit),
                None => Heap::new(),
            };
            dispatch(&mut heap, out)
        }
        Command::Classes => dump_classes(out),
        Command::Time => time(out),
        Command::Hello { call_static } => hello(call_static, out),
        Command::Sum { numbers } => sum(&numbers, out),
    }
}

/// Call `start` three times: on a Vehicle, on a Truck, and on the same
/// Truck through a `&Vehicle`.
pub fn dispatch(heap: &mut Heap, out: &mut dyn Write) -> Result<()> {
    let v = Vehicle::new(heap)?;
    let t = Truck::new(heap)?;
    log::debug!("created instances ({} bytes)", heap.allocated());

    v.start(out)?;
    t.start(out)?;

    let v: &Vehicle = t.as_vehicle();
    v.start(out)?;
    Ok(())
}

/// Print the class table as JSON
pub fn dump_classes(out: &mut dyn Write) -> Result<()> {
    let table = classes::class_table()?;
    log::debug!("created class table");
    let json = serde_json::to_string_pretty(&table).context("failed to serialize classes")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn time(out: &mut dyn Write) -> Result<()> {
    out.write_all(vtl_natives::current_time().as_bytes())?;
    Ok(())
}

pub fn hello(call_static: bool, out: &mut dyn Write) -> Result<()> {
    if call_static {
        CallStatic::say_hello(out)
    } else {
        HelloJni::new().say_hello(out)
    }
}

/// Print `sum = N`. Sums `0..10` when `numbers` is empty.
pub fn sum(numbers: &[i32], out: &mut dyn Write) -> Result<()> {
    let sample;
    let items: &[i32] = if numbers.is_empty() {
        sample = vtl_natives::sample_array();
        sample.as_slice()
    } else {
        numbers
    };
    let n = vtl_natives::sum_array(Some(items))?;
    writeln!(out, "sum = {}", n)?;
    Ok(())
}
