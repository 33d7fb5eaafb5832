//----------------------------------------
// sweep mod
//----------------------------------------
pub mod error;
pub mod run_sweep;
pub mod seed;
pub mod settings;
pub mod summary;
