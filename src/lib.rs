//! Events frontend library: models, data source, shared store, view logic, UI.

pub mod api;
pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod form;
pub mod modal;
pub mod models;
pub mod notify;
pub mod screens;
pub mod store;
pub mod theme;
pub mod widgets;
