//! # Contract Check
//!
//! Reads an auth API response body and reports whether it conforms to the
//! auth contract for the given operation.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use auth_contract::{ContractPolicy, Operation, check_body, codec};
use clap::Parser;

mod config;
mod telemetry;

use config::CheckConfig;

/// Check an auth API response body against the auth contract.
#[derive(Debug, Parser)]
#[command(name = "contract-check", version)]
struct Args {
    /// Operation the body belongs to: register, logout, login, change-password.
    operation: Operation,

    /// File holding the JSON body. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Override CONTRACT_POLICY (strict or lenient).
    #[arg(long)]
    policy: Option<ContractPolicy>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = CheckConfig::from_env(args.policy).context("invalid configuration")?;

    telemetry::init_telemetry(&config);

    let body = read_body(args.file.as_deref())?;

    println!("{}", run(args.operation, &body, config.policy)?);
    Ok(())
}

/// Check `body` and render the verdict as one JSON line.
fn run(operation: Operation, body: &str, policy: ContractPolicy) -> anyhow::Result<String> {
    let verdict = check_body(operation, body, policy)
        .with_context(|| format!("{} body rejected under {} policy", operation, policy))?;

    Ok(codec::encode(&verdict)?)
}

fn read_body(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            Ok(body)
        }
    }
}
