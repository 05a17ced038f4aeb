//! API handlers for the borrowal REST endpoints

pub mod borrowals;
pub mod fines;
pub mod health;
pub mod openapi;
pub mod overdue;
pub mod preferences;
pub mod roles;
