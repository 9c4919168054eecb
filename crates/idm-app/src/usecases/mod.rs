//! Views and the use cases they drive
//!
//! [render]  → bind validators → unlock
//! [submit]  → validate → lock → map record → create user
//!                                   ↓
//!                 success event  /  display message + unlock

pub mod registration;
