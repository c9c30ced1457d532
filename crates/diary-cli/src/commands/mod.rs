pub mod calendar;
pub mod entries;
pub mod init;
pub mod misc;
