//----------------------------------------
// study mod
//----------------------------------------
pub mod error;
pub mod simulate;
pub mod t_test;
pub mod types;
