use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};

use card_templater::cli::{collect_images, Args};
use card_templater::config::Settings;
use card_templater::layout::plan_layout;
use card_templater::output::render_plan;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Build settings from the settings file and CLI args
    let settings = Settings::from_args(&args).with_context(|| "Failed to load settings")?;
    settings
        .validate(args.allow_overflow)
        .with_context(|| "Invalid layout settings")?;

    if !args.scale.is_finite() || args.scale <= 0.0 {
        anyhow::bail!("Scale must be a positive number, got {}", args.scale);
    }

    // Collect images
    let front = collect_images(&args.front).with_context(|| "Failed to collect front images")?;
    let back = collect_images(&args.back).with_context(|| "Failed to collect back images")?;

    if front.is_empty() {
        anyhow::bail!("No front images to lay out");
    }

    log::info!(
        "Laying out {} front and {} back images",
        front.len(),
        back.len()
    );

    let plan = plan_layout(&front, &back, &settings).with_context(|| "Failed to lay out pages")?;

    log::info!(
        "Generated {} pages ({} front, {} back)",
        plan.pages.len(),
        plan.front_page_count(),
        plan.back_page_count()
    );

    let rendered = render_plan(&plan, &settings, args.format, args.scale)
        .with_context(|| "Failed to serialize layout")?;

    // Write output
    match args.output {
        Some(ref path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("Successfully wrote layout to {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .with_context(|| "Failed to write to stdout")?;
        }
    }

    Ok(())
}
