pub mod command;
pub mod completer;
pub mod error;
pub mod reader;
pub mod registry;
pub mod resolver;
