//! CLI domain: parse, route, output, and presentation only.
//! No configuration logic lives here; the route table dispatches to the config facade.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OverrideArgs};
pub use presentation::{
    format_check_summary, format_config_debug, format_config_json, format_config_toml,
    format_policies_json, format_policies_text,
};
pub use route::RunContext;
