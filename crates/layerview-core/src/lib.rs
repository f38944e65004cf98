pub mod aggregate;
pub mod colormap;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod render;
pub mod selection;
pub mod volume;
