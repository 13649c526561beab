//! Browser services: HTTP, token storage and command dispatch

pub mod api;
pub mod dispatch;
pub mod storage;
