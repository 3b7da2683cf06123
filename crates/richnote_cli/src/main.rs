//! CLI probe for `richnote_core`.
//!
//! # Responsibility
//! - Verify core linkage and print version metadata.
//! - Decode a stored description from stdin and list its style ranges.
//!
//! Usage: `richnote_cli [config.json] < description.json`

use richnote_core::{action_for, decode, init_logging, CoreConfig};
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("richnote_core ping={}", richnote_core::ping());
    println!("richnote_core version={}", richnote_core::core_version());

    let config = match std::env::args().nth(1) {
        Some(path) => match CoreConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => CoreConfig::default(),
    };

    if let Some(dir) = config.log_dir.as_deref().and_then(|dir| dir.to_str()) {
        if let Err(err) = init_logging(&config.log_level, dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("error: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }
    if input.trim().is_empty() {
        return ExitCode::SUCCESS;
    }

    match decode(input.trim()) {
        Ok(annotated) => {
            println!("text_len={} styles={}", annotated.len(), annotated.styles().len());
            for range in annotated.styles() {
                let tag = action_for(&range.style).map_or("-", |action| action.as_str());
                println!("{}..{} {}", range.start, range.end, tag);
            }
            log::info!(
                "event=cli_decode module=cli status=ok styles={}",
                annotated.styles().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
