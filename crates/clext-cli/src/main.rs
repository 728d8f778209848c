//! clext - add features to a Next.js project, interactively

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "clext")]
#[command(about = "Interactive CLI that adds features to your Next.js project")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let product = clext_core::product::clext();

    // Run the interactive flow
    let result = clext_core::run(&product).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
