pub mod doctor;
pub mod hook;
pub mod init;
pub mod link;
pub mod ls;
pub mod new;
pub mod path;
