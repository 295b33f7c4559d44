pub mod cli_parser;
pub use cli_parser::Cli;

pub mod help_template;
pub use help_template::HELP_TEMPLATE;

pub mod execute_command;
pub use execute_command::execute_command;
