mod builder;
mod code;
mod document;
mod front_matter;
mod links;
mod markdown;
mod paths;
pub mod pipeline;
mod render;
mod source;
mod toc;

pub use builder::Builder;
pub use paths::{base_path_from_config, resolve_path};
