pub mod create;
pub mod enquire;
pub mod generate;
pub mod install;
