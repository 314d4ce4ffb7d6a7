//! sales-qa: TUI binary for the sales Q&A backend.
//! Reads config, takes a question from argv or stdin, runs one submission
//! against the backend's `POST /query` endpoint, and prints the answer text.

use sales_qa_client::{config, Client, Session};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

fn resolve_config_path(args: &[String]) -> Option<PathBuf> {
    // 1. --config <path> flag
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        if let Some(path) = args.get(pos + 1) {
            return Some(PathBuf::from(path));
        }
    }
    // 2. SALES_QA_CONFIG env var
    if let Ok(val) = std::env::var("SALES_QA_CONFIG") {
        return Some(PathBuf::from(val));
    }
    // 3. Default path (~/.sales-qa/config.yaml)
    config::default_config_path()
}

/// First argument that is not the --config flag or its value.
fn positional_question(args: &[String]) -> Option<String> {
    let config_pos = args.iter().position(|a| a == "--config");
    args.iter()
        .enumerate()
        .skip(1)
        .find(|(i, a)| {
            let is_flag = *a == "--config";
            let is_flag_value = config_pos.map_or(false, |p| *i == p + 1);
            !is_flag && !is_flag_value
        })
        .map(|(_, a)| a.clone())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config_path = resolve_config_path(&args);

    // A missing config file is fine (defaults apply); a broken one is not.
    let cfg = match &config_path {
        Some(path) if path.exists() => match config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!(
                    "Error: failed to load config from {}: {}",
                    path.display(),
                    e
                );
                process::exit(1);
            }
        },
        _ => config::Config::default(),
    };

    let base_url = config::resolve_base_url(&cfg);

    // Question: positional argument, then first line of stdin, then the
    // configured default. An empty question is forwarded unchanged.
    let question = positional_question(&args)
        .or_else(|| {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).ok()?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .or(cfg.ui.default_question)
        .unwrap_or_default();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        });

    rt.block_on(async {
        let client = Client::new(base_url);
        let mut session = Session::new(question);
        session.submit(&client).await;
        println!("{}", session.answer);
    });
}
