use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

use tagmap_boundary::CloudLayout;
use tagmap_core::{cloud::CloudKind, CourseId};

use crate::{
    config::Config,
    gateways::json_file::JsonFileGateway,
    session::Session,
    view::{MaudTemplates, Style},
};

#[derive(Parser)]
#[command(version, about = "Visualize how resources and questions of a course share tags")]
pub struct Args {
    /// Configuration file
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write an HTML report with both tag clouds of a course
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (overrides the configuration)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the layout of a tag cloud as JSON
    Layout {
        #[command(flatten)]
        source: SourceArgs,

        /// Cloud to lay out: `resources` or `questions`
        #[arg(long, default_value = "resources")]
        cloud: CloudKind,

        #[arg(long)]
        pretty: bool,
    },
}

#[derive(clap::Args)]
pub struct SourceArgs {
    /// Course ID
    #[arg(long)]
    pub course: CourseId,

    /// Read the graph data from this file instead of the data directory
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

fn gateway(cfg: &Config, source: &SourceArgs) -> JsonFileGateway {
    match &source.input {
        Some(file) => JsonFileGateway::from_file(file),
        None => JsonFileGateway::new(&cfg.source.data_dir),
    }
}

async fn init_session(cfg: &Config, source: &SourceArgs) -> Result<Session> {
    let gateway = gateway(cfg, source);
    Session::init(&gateway, source.course, cfg.cloud.layout())
        .await
        .ok_or_else(|| anyhow!("Unable to initialize course {}", source.course))
}

fn style(cfg: &Config) -> Style {
    Style {
        width: cfg.cloud.width,
        height: cfg.cloud.height,
        margin: cfg.cloud.margin,
        font_family: cfg.cloud.font_family.clone(),
        palette: cfg.palette.clone(),
        transition: cfg.report.transition,
    }
}

pub async fn run(args: Args) -> Result<()> {
    let Args { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config)?;

    match command {
        Command::Render { source, output } => {
            let session = init_session(&cfg, &source).await?;
            let html = session.render(&MaudTemplates, &style(&cfg)).into_string();
            let output = output.unwrap_or_else(|| cfg.report.output.clone());
            fs::write(&output, html)?;
            log::info!(
                "Wrote report of course {} to {}",
                session.course_id(),
                output.display()
            );
        }
        Command::Layout {
            source,
            cloud,
            pretty,
        } => {
            let session = init_session(&cfg, &source).await?;
            let layout = CloudLayout::from(session.cloud(cloud));
            let json = if pretty {
                serde_json::to_string_pretty(&layout)?
            } else {
                serde_json::to_string(&layout)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
