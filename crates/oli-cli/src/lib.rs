//! Library side of the `oli-import` command: logging setup and table rendering.

pub mod logging;
pub mod render;
