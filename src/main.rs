use anyhow::{Context, Result};
use c3plot::{
    csv_reader, data::PlotData, parser, runtime, telemetry, ChartRequest, ChartWidget, JsonEngine,
    RenderOptions,
};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "c3plot")]
#[command(about = "Normalize chart data into C3-style chart configurations", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a chart request (JSON) and print the engine configuration
    Normalize {
        /// Request file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },
    /// Build a chart from tabular data with a pipeline, e.g. 'scatter(x: a, y: b) | labs(title: "T")'
    Plot {
        pipeline: String,

        /// Data file; stdin when omitted
        #[arg(long)]
        data: Option<PathBuf>,

        /// Data is a JSON array of objects instead of CSV
        #[arg(long)]
        json: bool,

        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    telemetry::init_default_tracing();
    let args = Args::parse();

    let output = match args.command {
        Command::Normalize { input, pretty } => normalize(input, pretty)?,
        Command::Plot {
            pipeline,
            data,
            json,
            pretty,
        } => plot(&pipeline, data, json, pretty)?,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", output).context("Failed to write chart to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn normalize(input: Option<PathBuf>, pretty: bool) -> Result<String> {
    let text = match input {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let request = ChartRequest::from_json_str(&text).context("Failed to parse chart request")?;
    let options = RenderOptions {
        pretty,
        ..Default::default()
    };
    let mut widget = ChartWidget::new(JsonEngine, options);
    let rendered = widget
        .render_value(&request)
        .context("Failed to build chart")?;
    Ok(rendered.clone())
}

fn plot(pipeline: &str, data: Option<PathBuf>, json: bool, pretty: bool) -> Result<String> {
    let spec = parser::parse_pipeline(pipeline)?;

    let table = if json {
        let value: serde_json::Value = match &data {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                serde_json::from_reader(file).context("Failed to parse JSON data")?
            }
            None => serde_json::from_reader(io::stdin().lock())
                .context("Failed to parse JSON data from stdin")?,
        };
        PlotData::from_json(&value)?
    } else {
        let csv = match &data {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                csv_reader::read_csv(file)?
            }
            None => csv_reader::read_csv_from_stdin().context("Failed to read CSV from stdin")?,
        };
        PlotData::from_csv(csv)
    };

    let options = RenderOptions {
        pretty,
        ..Default::default()
    };
    runtime::render_plot(&spec, &table, options)
}
