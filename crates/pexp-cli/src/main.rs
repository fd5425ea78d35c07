//! pexp CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pexp")]
#[command(about = "pexp - Exponential distribution CDF with PDF/CDF charts")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate P(X <= q) for X ~ Exponential(rate)
    Eval {
        /// Quantile at which to evaluate the CDF
        #[arg(long, allow_negative_numbers = true, conflicts_with = "request")]
        q: Option<f64>,

        /// Rate parameter (lambda)
        #[arg(long, default_value_t = pexp_viz::DEFAULT_RATE, allow_negative_numbers = true)]
        rate: f64,

        /// Omit the chart samples from the output
        #[arg(long)]
        no_chart: bool,

        /// JSON request file (`{"q": .., "rate": .., "want_chart": ..}`)
        #[arg(long)]
        request: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the two-panel PDF/CDF chart
    Render {
        /// Quantile at which to evaluate the CDF
        #[arg(long, allow_negative_numbers = true)]
        q: Option<f64>,

        /// Rate parameter (lambda)
        #[arg(long, default_value_t = pexp_viz::DEFAULT_RATE, allow_negative_numbers = true)]
        rate: f64,

        /// Output image; format from the extension (svg, or png with the `png` feature)
        #[arg(short, long)]
        output: PathBuf,

        /// Optional YAML visualization config
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Eval { q, rate, no_chart, request, output } => {
            cmd_eval(q, rate, !no_chart, request.as_ref(), output.as_ref())
        }
        Commands::Render { q, rate, output, config } => {
            cmd_render(q, rate, &output, config.as_ref())
        }
    }
}

fn cmd_eval(
    q: Option<f64>,
    rate: f64,
    want_chart: bool,
    request: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let result = match request {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading request");
            let bytes = std::fs::read(path)?;
            let value: serde_json::Value = serde_json::from_slice(&bytes)?;
            pexp_viz::evaluate_value(&value)?
        }
        None => pexp_viz::evaluate(q, rate, want_chart)?,
    };
    tracing::info!(
        q = result.quantile,
        rate = result.rate,
        prob = result.cumulative_probability,
        "evaluation complete"
    );

    write_json(output, serde_json::to_value(&result)?)
}

fn cmd_render(q: Option<f64>, rate: f64, output: &PathBuf, config: Option<&PathBuf>) -> Result<()> {
    let yaml = match config {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };
    let viz_config = pexp_viz_render::config::resolve_config(yaml.as_deref())?;

    let result = pexp_viz::evaluate(q, rate, true)?;
    let Some(chart) = result.chart.as_ref() else {
        anyhow::bail!("evaluation returned no chart");
    };

    let artifact_json = serde_json::to_string(chart)?;
    pexp_viz_render::render_to_file(&artifact_json, "exponential", output, &viz_config)?;
    tracing::info!(path = %output.display(), theme = %viz_config.theme, "chart written");
    tracing::debug!(prob = result.cumulative_probability, "rendered quantile marker");
    Ok(())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
