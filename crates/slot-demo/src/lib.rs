pub mod catalog;
pub mod config;
pub mod data;
pub mod events;
pub mod gui;
pub mod sys;
