pub mod commands;
pub mod config;
pub mod fs;
pub mod hierarchy;
pub mod models;
pub mod parser;
pub mod pipeline;

/// ASCII art logo for lectern CLI
pub const LOGO: &str = "\
   ╷
   │  ┌─┐┌─┐┌┬┐┌─┐┬─┐┌┐┌
   │  ├┤ │   │ ├┤ ├┬┘│││
   ┴─┘└─┘└─┘ ┴ └─┘┴└─┘┘└┘";
