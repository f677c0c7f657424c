//! Molecule picker: a two-slot comparison and single-molecule detail page
//! over a fixed catalog, with the 3D viewers living in the browser.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod detail;
pub mod error;
pub mod input;
pub mod page;
pub mod render;
pub mod server;
pub mod slots;
pub mod state;
pub mod sync;
pub mod viewer;

pub use config::Config;
pub use controller::Controller;
pub use error::{Error, Result};
