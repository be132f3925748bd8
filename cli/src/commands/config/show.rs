use crate::commands::{GlobalArgs, Session};
use crate::common::ui::output::OutputFormat;
use crate::core::error::Result;
use clap::Parser;
use serde_json::{json, Value};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ShowArgs {}

fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
        OutputFormat::JsonLines => "json-lines",
    }
}

fn settings_json(session: &Session) -> Value {
    let settings = &session.settings;
    json!({
        "profile": settings.profile,
        "endpoint": settings.endpoint,
        "region": settings.region,
        "timeout_secs": settings.timeout.as_secs(),
        "api_key": settings.api_key.as_ref().map(|_| "<redacted>"),
        "api_key_source": settings.api_key_source,
        "output": format_name(session.format),
        "files": session
            .loaded
            .sources
            .iter()
            .filter(|s| s.loaded)
            .map(|s| s.path.display().to_string())
            .collect::<Vec<_>>(),
    })
}

pub async fn handle_show(_args: ShowArgs, globals: &GlobalArgs) -> Result<()> {
    info!("Handling config show command...");
    let session = globals.session()?;

    match session.format {
        OutputFormat::Text => {
            let settings = &session.settings;
            println!("profile:      {}", settings.profile.as_deref().unwrap_or("(none)"));
            println!("endpoint:     {}", settings.endpoint);
            println!("region:       {}", settings.region);
            println!("timeout_secs: {}", settings.timeout.as_secs());
            match &settings.api_key_source {
                Some(source) => println!("api_key:      <redacted> ({source})"),
                None => println!("api_key:      (not set)"),
            }
            println!("output:       {}", format_name(session.format));
            for source in session.loaded.sources.iter().filter(|s| s.loaded) {
                println!("file:         {}", source.path.display());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings_json(&session))?),
        OutputFormat::JsonLines => println!("{}", settings_json(&session)),
    }
    Ok(())
}
