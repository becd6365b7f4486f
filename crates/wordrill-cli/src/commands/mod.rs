pub mod init;
pub mod menu;
pub mod mistakes;
pub mod practice;
pub mod review;
pub mod words;
