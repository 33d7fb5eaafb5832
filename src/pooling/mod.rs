//----------------------------------------
// pooling mod
//----------------------------------------
pub mod error;
pub mod pool;
pub mod std_normal;
pub mod types;
