use serp_overview::cli::{handle_version_command, parse_args, read_input, CliCommand};
use serp_overview::config::PipelineConfig;
use serp_overview::pipeline::OverviewPipeline;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so piped markup output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(2);
        }
    };

    let render_args = match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Render(render_args) => render_args,
    };

    let raw = match read_input(render_args.input.as_deref()) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    let config = PipelineConfig::default()
        .with_strip_paste_artifacts(!render_args.keep_paste_artifacts)
        .with_default_budget(render_args.budget);
    let pipeline = OverviewPipeline::new(config);
    let outcome = pipeline.render_truncated(&raw, render_args.budget, render_args.expanded);

    if render_args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.markup);
    }

    Ok(())
}
