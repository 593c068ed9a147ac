//! Shared library module for the Calorie Counter app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::CalorieApp;

mod action;
mod app;
mod camera;
mod flow_executor;
mod persistence;
mod state;
mod ui;
pub mod version;
mod view_model_builder;
