use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use callrubric::input::load_payload;
use callrubric::logging::init_tracing;
use callrubric::pipeline::stage7_report::{build_report, build_tips_report, write_output};
use callrubric::report::ReportStatus;
use callrubric::report::json::render_json;
use callrubric::{Evaluator, Result, Rubric};

#[derive(Debug, Parser)]
#[command(name = "callrubric", version, about = "Score training-call evaluations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full report: scores, overall, breakdown, per-category feedback and tips.
    Evaluate(CommonArgs),
    /// Overall score and deduplicated coaching tips only.
    Tips(CommonArgs),
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Payload file, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,
    /// Rubric JSON replacing the built-in one.
    #[arg(long)]
    rubric: Option<PathBuf>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = match &cli.command {
        Command::Evaluate(args) | Command::Tips(args) => args,
    };
    init_tracing(&args.log_level);

    let evaluator = resolve_evaluator(args.rubric.as_deref())?;
    let payload = load_payload(&args.input)?;

    let rendered = match &cli.command {
        Command::Evaluate(_) => {
            let report = build_report(&evaluator, &payload);
            if report.status == ReportStatus::NoEvaluationData {
                tracing::warn!(
                    "no evaluation data found in {}",
                    args.input.display()
                );
            }
            render_json(&report, args.pretty)?
        }
        Command::Tips(_) => render_json(&build_tips_report(&evaluator, &payload), args.pretty)?,
    };

    write_output(&rendered, args.out.as_deref())
}

fn resolve_evaluator(rubric_path: Option<&Path>) -> Result<Evaluator> {
    match rubric_path {
        Some(path) => Evaluator::new(Rubric::load(path)?),
        None => Ok(Evaluator::builtin().clone()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
