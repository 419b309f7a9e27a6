use std::io::Read;

use anyhow::Context;
use cartola_draft::api;
use cartola_draft::config::AppConfig;
use cartola_draft::DraftError;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run() -> anyhow::Result<()> {
    let (request_path, config_path) = parse_args()?;

    let config = match &config_path {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => AppConfig::default(),
    };

    let payload = match &request_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading draft request from {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading draft request from stdin")?;
            buffer
        }
    };

    let request = api::parse_request(&payload).context("parsing draft request")?;
    let response = api::handle(request, &config)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn parse_args() -> anyhow::Result<(Option<String>, Option<String>)> {
    let mut request_path = None;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().context("--config requires a path")?);
            }
            "--help" | "-h" => {
                println!("usage: cartola-draft [REQUEST_JSON] [--config CONFIG_TOML]");
                println!();
                println!("Reads a JSON draft request from REQUEST_JSON (stdin when omitted)");
                println!("and prints the drafted line-up as JSON on stdout.");
                std::process::exit(0);
            }
            _ if request_path.is_none() => request_path = Some(arg),
            _ => anyhow::bail!("unexpected argument: {}", arg),
        }
    }

    Ok((request_path, config_path))
}

// Infeasible pools exit with their own status so callers can tell "no valid
// line-up" apart from bad input.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DraftError>() {
        Some(DraftError::Infeasible) => 2,
        _ => 1,
    }
}
