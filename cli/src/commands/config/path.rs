use crate::commands::GlobalArgs;
use crate::core::config::{load_config, ConfigSource, SourceKind};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct PathArgs {}

fn describe(source: &ConfigSource) -> String {
    let kind = match source.kind {
        SourceKind::Explicit => "explicit",
        SourceKind::User => "user",
        SourceKind::Project => "project",
    };
    let state = if source.loaded { "loaded" } else { "not found" };
    format!("{:<8} {} ({})", kind, source.path.display(), state)
}

pub async fn handle_path(_args: PathArgs, globals: &GlobalArgs) -> Result<()> {
    let loaded = load_config(globals.config.as_deref()).context("Failed to load svcctl configuration")?;
    if loaded.sources.is_empty() {
        println!("No configuration files considered; using built-in defaults.");
    }
    for source in &loaded.sources {
        println!("{}", describe(source));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_describe_source() {
        let source = ConfigSource {
            kind: SourceKind::Project,
            path: PathBuf::from("/work/.svcctl.toml"),
            loaded: false,
        };
        assert_eq!(describe(&source), "project  /work/.svcctl.toml (not found)");
    }
}
