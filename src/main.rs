//! mediation-dag CLI entry point.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mediation_dag::{
    DagConfig, MediationDag, OutputFormat, Point, Symbol, render_mediation_dag,
};

/// Draw a causal DAG for mediation analysis.
#[derive(Parser, Debug)]
#[command(
    name = "mediation-dag",
    version = env!("MEDIATION_DAG_VERSION"),
    about = "Draw a causal DAG for mediation analysis"
)]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Outcome variable name
    #[arg(long)]
    outcome: Option<String>,

    /// Exposure variable name
    #[arg(long)]
    exposure: Option<String>,

    /// Mediator name(s); repeat the flag or separate with commas
    #[arg(short = 'm', long = "mediator", value_delimiter = ',')]
    mediator: Vec<String>,

    /// Baseline confounder name(s)
    #[arg(long, value_delimiter = ',')]
    basec: Vec<String>,

    /// Post-exposure confounder name(s)
    #[arg(long, value_delimiter = ',')]
    postc: Vec<String>,

    #[arg(long, allow_negative_numbers = true)]
    x_outcome: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x_exposure: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x_mediator: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x_basec: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x_postc: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_outcome: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_exposure: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_mediator: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_basec: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_postc: Option<f64>,

    /// Caption line-wrap width
    #[arg(long)]
    caption_width: Option<usize>,

    /// Caption font size
    #[arg(long, allow_negative_numbers = true)]
    caption_size: Option<f64>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Draw symbols without node shapes
    #[arg(long)]
    no_node: bool,

    #[arg(long)]
    text_color: Option<String>,

    #[arg(long)]
    node_color: Option<String>,

    /// Size multiplier for the drawing
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

impl Cli {
    fn coordinate_overrides(&self) -> [(Symbol, Option<f64>, Option<f64>); 5] {
        [
            (Symbol::Y, self.x_outcome, self.y_outcome),
            (Symbol::A, self.x_exposure, self.y_exposure),
            (Symbol::M, self.x_mediator, self.y_mediator),
            (Symbol::C, self.x_basec, self.y_basec),
            (Symbol::L, self.x_postc, self.y_postc),
        ]
    }

    /// Merge flags over the config file (or defaults).
    fn into_dag(self, cfg: DagConfig) -> MediationDag {
        let mut dag = MediationDag::from_config(&cfg);
        for (symbol, x, y) in self.coordinate_overrides() {
            let p = dag.coordinates.get(symbol);
            dag.coordinates
                .set(symbol, Point::new(x.unwrap_or(p.x), y.unwrap_or(p.y)));
        }
        if self.outcome.is_some() {
            dag.outcome = self.outcome;
        }
        if self.exposure.is_some() {
            dag.exposure = self.exposure;
        }
        if !self.mediator.is_empty() {
            dag.mediators = self.mediator;
        }
        if !self.basec.is_empty() {
            dag.basec = Some(self.basec);
        }
        if !self.postc.is_empty() {
            dag.postc = Some(self.postc);
        }
        if let Some(w) = self.caption_width {
            dag.caption.width = w;
        }
        if let Some(s) = self.caption_size {
            dag.caption.size = s;
        }
        if self.use_ascii {
            dag.options.unicode = false;
        }
        if self.no_node {
            dag.options.node = false;
        }
        if let Some(c) = self.text_color {
            dag.options.text_color = c;
        }
        if let Some(c) = self.node_color {
            dag.options.node_color = c;
        }
        if let Some(s) = self.scale {
            dag.options.scale = s;
        }
        dag
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match cli.config.as_ref() {
        Some(path) => match DagConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: cannot load '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => DagConfig::default(),
    };

    let format = cli.format;
    let output = cli.output.clone();
    let dag = cli.into_dag(cfg);
    let renderer = format.renderer();

    // Fail before creating the output file.
    if let Err(e) = dag.validate() {
        eprintln!("error: {}", e);
        process::exit(1);
    }

    let result = match output {
        Some(ref path) => match File::create(path) {
            Ok(f) => render_mediation_dag(&dag, renderer.as_ref(), &mut BufWriter::new(f)),
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => render_mediation_dag(&dag, renderer.as_ref(), &mut io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
