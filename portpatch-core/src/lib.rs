pub mod diff;
pub mod patcher;
pub mod rules;
pub mod run;

pub use patcher::{ConfigPatcher, Rewrite, DEFAULT_COMPOSE_FILE, SUCCESS_MESSAGE};
pub use rules::{port_rules, ReplaceRule};
