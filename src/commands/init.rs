use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, UserError};
use crate::transport::HttpTransport;

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if config_path.exists() {
        let answer = prompt(
            &mut input,
            &format!(
                "Config file already exists at {}. Overwrite? [y/N] ",
                config_path.display()
            ),
        )?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Users CLI Configuration");
    println!("=======================\n");

    let base_url = prompt(&mut input, "Enter the users API base URL (e.g., http://localhost:3000): ")?;

    if base_url.is_empty() {
        return Err(UserError::MissingBaseUrl);
    }

    // Fail early on a URL the transport would reject later
    HttpTransport::new(&base_url)?;

    write_config(&config_path, &base_url)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'users' commands!");

    Ok(())
}

fn prompt(input: &mut impl BufRead, question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn write_config(config_path: &Path, base_url: &str) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UserError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = format!("base_url = {}\n", toml::Value::String(base_url.to_string()));

    std::fs::write(config_path, contents).map_err(|e| UserError::ConfigWrite {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
