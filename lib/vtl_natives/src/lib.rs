//! Small functions which used to sit on the other side of a native
//! boundary: a clock, a greeting and an integer sum.
pub mod error;
mod hello;
mod sum;
mod time;
pub use crate::hello::{CallStatic, HelloJni, HELLO};
pub use crate::sum::{sample_array, sum_array};
pub use crate::time::{current_time, current_time_message};
