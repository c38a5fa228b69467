pub mod access;
pub mod calendar;
pub mod roster;
