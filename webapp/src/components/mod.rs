pub mod activity;
pub mod contact;
pub mod footer;
pub mod icon;
pub mod navigation;
