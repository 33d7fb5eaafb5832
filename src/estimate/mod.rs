//----------------------------------------
// estimate mod
//----------------------------------------
pub mod effect_size;
pub mod error;
pub mod variance;
