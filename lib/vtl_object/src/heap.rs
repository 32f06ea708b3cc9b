use crate::error;
use anyhow::Result;
use std::alloc::{self, Layout};

/// Types for which the all-zero bit pattern is a valid value.
///
/// # Safety
///
/// Every field must accept zeroed memory (eg. `Option<fn(..)>`,
/// `Option<&T>`, integers). References, bare `fn` pointers and
/// `NonNull` do not.
pub unsafe trait Zeroed: Sized {}

/// Hands out zero-initialized objects, optionally within a byte budget.
///
/// The budget counts every byte allocated during the lifetime of the heap;
/// releasing an object does not give its bytes back.
#[derive(Debug, Default)]
pub struct Heap {
    limit: Option<usize>,
    allocated: usize,
}

impl Heap {
    pub fn new() -> Heap {
        Heap::default()
    }

    pub fn with_limit(limit: usize) -> Heap {
        Heap {
            limit: Some(limit),
            allocated: 0,
        }
    }

    /// Number of bytes handed out so far
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Allocate zeroed storage for a `T`.
    pub fn calloc<T: Zeroed>(&mut self) -> Result<Box<T>> {
        let layout = Layout::new::<T>();
        let size = layout.size();
        let class = short_type_name::<T>();
        let total = self.allocated.checked_add(size);
        if let Some(limit) = self.limit {
            if total.map_or(true, |n| n > limit) {
                return Err(error::out_of_memory(class, size));
            }
        }
        let obj = if size == 0 {
            // SAFETY: `T: Zeroed`
            Box::new(unsafe { std::mem::zeroed::<T>() })
        } else {
            // SAFETY: `layout` has non-zero size
            let ptr = unsafe { alloc::alloc_zeroed(layout) } as *mut T;
            if ptr.is_null() {
                return Err(error::out_of_memory(class, size));
            }
            // SAFETY: `ptr` was allocated by the global allocator with the
            // layout of `T`, and zeroed memory is a valid `T`.
            unsafe { Box::from_raw(ptr) }
        };
        self.allocated += size;
        log::debug!("allocated {} bytes for {}", size, class);
        Ok(obj)
    }
}

fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
