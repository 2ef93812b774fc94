mod json_ops;

pub use json_ops::*;
