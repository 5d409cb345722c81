// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Story Shotlist Manager - headless front end.
//!
//! Validates storyboard project files and exports them to JSON, YAML or
//! the prompt CSV.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shotlist::io::serialization::import_project;
use shotlist::io::ExportFormat;
use shotlist::{Clipboard, EditorConfig, ProjectControls};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "shotlist", version, about = "Story shot list manager")]
struct Cli {
    /// YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a project file and print its size
    Validate { input: PathBuf },
    /// Write the project to the export directory
    Export {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Overrides `export_dir` from the settings file
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the project to stdout
    Print {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Csv,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Yaml => ExportFormat::Yaml,
            Format::Csv => ExportFormat::Csv,
        }
    }
}

/// "Clipboard" of a terminal session.
struct Stdout;

impl Clipboard for Stdout {
    fn set_text(&mut self, text: String) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load(path),
        None => Ok(EditorConfig::default()),
    }
}

fn open<C: Clipboard>(config: EditorConfig, clipboard: C, input: &Path) -> Result<ProjectControls<C>> {
    let project = import_project(input)?;
    let mut controls = ProjectControls::new(config, clipboard);
    controls.load_project(project);
    Ok(controls)
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Validate { input } => {
            let project = import_project(&input)?;
            let summary = project.summary();
            println!("{}: \"{}\"", input.display(), project.video.title);
            println!(
                "  {} chapters, {} scenes, {} prompts, {}/{} images approved",
                summary.chapters,
                summary.scenes,
                summary.prompts,
                summary.approved_images,
                summary.images
            );
        }
        Command::Export {
            input,
            format,
            out_dir,
        } => {
            if let Some(dir) = out_dir {
                config.export_dir = dir;
            }
            std::fs::create_dir_all(&config.export_dir)
                .with_context(|| format!("Creating {}", config.export_dir.display()))?;
            let mut controls = open(config, Stdout, &input)?;
            let path = match format {
                Format::Json => controls.download_json()?,
                Format::Csv => controls.download_csv()?,
                Format::Yaml => controls.download_yaml()?,
            };
            log::info!("{}", controls.message().unwrap_or_default());
            println!("{}", path.display());
        }
        Command::Print { input, format } => {
            let mut controls = open(config, Stdout, &input)?;
            match format {
                Format::Json => controls.copy_json()?,
                Format::Yaml | Format::Csv => {
                    let project = controls
                        .store()
                        .project()
                        .context("No project loaded")?;
                    let text = ExportFormat::from(format).render(project)?;
                    println!("{}", text.trim_end());
                }
            }
        }
    }

    Ok(())
}
