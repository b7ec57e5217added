pub mod install;
pub mod print;
pub mod uninstall;
