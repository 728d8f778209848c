//! Dependency installation through the selected package manager
//!
//! Two invocations at most: a plain install for the manifest-declared
//! dependencies, then an add of the resolved tokens when there are any.
//! Output is streamed line by line. Installs run until they finish or
//! fail; there is no timeout and no retry.

use crate::config::PackageManager;
use crate::error::Error;
use colored::Colorize;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Subcommand that adds new packages to the manifest.
pub fn add_verb(package_manager: PackageManager) -> &'static str {
    match package_manager {
        PackageManager::Npm => "install",
        PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "add",
    }
}

/// The argument lists run against the package manager binary, in order.
pub fn install_invocations(package_manager: PackageManager, tokens: &[&str]) -> Vec<Vec<String>> {
    let mut invocations = vec![vec!["install".to_string()]];

    if !tokens.is_empty() {
        let mut add = vec![add_verb(package_manager).to_string()];
        add.extend(tokens.iter().map(|t| t.to_string()));
        invocations.push(add);
    }

    invocations
}

/// Run the install invocations for the resolved dependency tokens.
pub async fn install_dependencies(
    package_manager: PackageManager,
    tokens: &[&str],
) -> Result<(), Error> {
    for args in install_invocations(package_manager, tokens) {
        run_streamed(package_manager.command(), &args).await?;
    }
    Ok(())
}

/// Spawn a command and stream its output to the terminal.
async fn run_streamed(program: &str, args: &[String]) -> Result<(), Error> {
    let command_line = format!("{} {}", program, args.join(" "));

    println!();
    println!("{} {}", "Running:".dimmed(), command_line.yellow());
    println!();

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::Install {
                command: command_line.clone(),
                details: format!("{} is not installed or not on PATH", program),
            },
            _ => Error::Io(e),
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let mut stdout_reader = stdout.map(|s| BufReader::new(s).lines());
    let mut stderr_reader = stderr.map(|s| BufReader::new(s).lines());

    loop {
        let stdout_line = async {
            match stdout_reader.as_mut() {
                Some(reader) => reader.next_line().await,
                None => Ok(None),
            }
        };
        let stderr_line = async {
            match stderr_reader.as_mut() {
                Some(reader) => reader.next_line().await,
                None => Ok(None),
            }
        };

        tokio::select! {
            line = stdout_line => {
                match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        break;
                    }
                }
            }
            line = stderr_line => {
                match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => {}
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                    }
                }
            }
        }
    }

    // Drain whatever stderr is still buffered after stdout closed.
    if let Some(reader) = stderr_reader.as_mut() {
        while let Ok(Some(line)) = reader.next_line().await {
            eprintln!("  {}", line.yellow());
        }
    }

    let status = child.wait().await?;
    println!();

    if status.success() {
        Ok(())
    } else {
        Err(Error::Install {
            command: command_line,
            details: format!("exit code {}", status.code().unwrap_or(-1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_install_only_when_no_tokens() {
        let invocations = install_invocations(PackageManager::Npm, &[]);
        assert_eq!(invocations, vec![vec!["install".to_string()]]);
    }

    #[test]
    fn test_npm_adds_via_install() {
        let invocations = install_invocations(PackageManager::Npm, &["zod", "sass"]);
        assert_eq!(invocations.len(), 2);
        assert_eq!(invocations[1], vec!["install", "zod", "sass"]);
    }

    #[test]
    fn test_yarn_adds_via_add() {
        let invocations = install_invocations(PackageManager::Yarn, &["trpc"]);
        assert_eq!(invocations[0], vec!["install"]);
        assert_eq!(invocations[1], vec!["add", "trpc"]);
    }

    #[test]
    fn test_bun_and_pnpm_add_verbs() {
        assert_eq!(add_verb(PackageManager::Pnpm), "add");
        assert_eq!(add_verb(PackageManager::Bun), "add");
    }
}
