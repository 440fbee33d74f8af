pub mod calendar;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod detail;
pub mod profile;
pub mod scroll;
pub mod section;
pub mod share;
pub mod slug;
pub mod tags;
pub mod theme;
