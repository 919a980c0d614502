//! Storefront - Terminal front end
//!
//! Line-oriented commands in, rendered screens out. The binary wires these
//! to stdin and stdout; everything here is plain text so it can be tested
//! without a terminal.

pub mod command;
pub mod render;

pub use command::{Command, ParseError, parse_command};
pub use render::{render_detail, render_list, render_screen};
