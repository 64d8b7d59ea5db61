//! Page components

pub mod admin;
pub mod chat;
pub mod home;
pub mod login;
