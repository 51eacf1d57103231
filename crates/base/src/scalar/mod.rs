mod f64;

pub use f64::F64;
