use crate::error;
use anyhow::Result;

/// Sum the items. Overflow wraps around like a 32-bit machine integer.
pub fn sum_array(arr: Option<&[i32]>) -> Result<i32> {
    let Some(items) = arr else {
        return Err(error::invalid_input("array is absent"));
    };
    let sum = items.iter().fold(0i32, |acc, x| acc.wrapping_add(*x));
    log::debug!("sum of {} items: {}", items.len(), sum);
    Ok(sum)
}

/// `[0, 1, .., 9]`
pub fn sample_array() -> Vec<i32> {
    (0..10).collect()
}
