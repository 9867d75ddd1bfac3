pub mod audit;
pub mod diagnose;
pub mod run;
pub mod validate;
