use std::fs::{self, File};
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input_file>", args[0]);
        std::process::exit(1)
    }

    let path = &args[1];
    let input_data = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let input_data: serde_json::Value =
        serde_json::from_str(&input_data).with_context(|| format!("parsing {}", path))?;
    tracing::info!("---------- RUN: {} ----------", path);

    let output = internal::run(input_data)?;

    // output path with sub-directory creation
    let output_dir_name = "output";
    let output_path = ensure_output_path(path, output_dir_name)?;
    let file = File::create(&output_path).with_context(|| format!("creating {}", output_path))?;
    serde_json::to_writer_pretty(file, &output).context("writing json output")?;
    tracing::info!("output written to {}", output_path);

    Ok(())
}

fn ensure_output_path(input_path: &str, output_dir_name: &str) -> anyhow::Result<String> {
    let file_name = Path::new(input_path)
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("no file name in {}", input_path))?;
    let output_path = format!("{}/output_{}", output_dir_name, file_name);
    if let Some(parent_dir) = Path::new(&output_path).parent() {
        fs::create_dir_all(parent_dir)?;
    }
    Ok(output_path)
}
