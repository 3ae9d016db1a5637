#![allow(dead_code)]

use wasm_bindgen::prelude::*;

mod bindings;
mod boundary;
pub mod dispatcher;
mod media_element;
mod session;
mod time_window;
mod timeline;
mod utils;

pub use utils::logger::Logger;
