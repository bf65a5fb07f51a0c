use crate::domain::errors::OpsError;
use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use colored::Colorize;
use serde::Serialize;

/// Operator-facing progress lines. Silent in `--json` mode so stdout stays
/// a single JSON document.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(json: bool) -> Self {
        Self { quiet: json }
    }

    pub fn step(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", "==>".blue().bold(), msg.as_ref());
        }
    }

    pub fn ok(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", "ok:".green().bold(), msg.as_ref());
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{} {}", "warning:".yellow().bold(), msg.as_ref());
        }
    }
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<OpsError>()
        .map(OpsError::code)
        .unwrap_or("ERROR")
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("{} {:#}", "error:".red().bold(), err);
    }
}
