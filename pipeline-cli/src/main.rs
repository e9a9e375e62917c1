//! pipeline-check: validate a pipeline JSON file and print the report.
//!
//! Exits 1 when the file cannot be read or parsed, or has no nodes; exits 2 with
//! `--strict` when the pipeline is cyclic or any node is unhealthy.

use std::path::PathBuf;

use clap::Parser;
use pipeline_cli::{check_path, render};

#[derive(Parser, Debug)]
#[command(name = "pipeline-check")]
#[command(about = "Validate a pipeline graph: node/edge counts, DAG check, per-node health")]
struct Args {
    /// Pipeline JSON file (`{"nodes": [...], "edges": [...]}`); `-` reads stdin
    #[arg(value_name = "FILE", default_value = "-")]
    file: PathBuf,

    /// Pretty-print the report
    #[arg(short, long)]
    pretty: bool,

    /// Exit with status 2 unless the pipeline is a DAG and every node is healthy
    #[arg(long)]
    strict: bool,
}

fn main() {
    let args = Args::parse();

    let report = match check_path(&args.file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match render(&report, args.pretty) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    if args.strict && (!report.is_dag || report.node_health.iter().any(|h| !h.healthy)) {
        std::process::exit(2);
    }
}
