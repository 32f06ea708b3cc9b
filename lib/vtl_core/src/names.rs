mod class_name;
mod method_name;
pub use class_name::*;
pub use method_name::*;
