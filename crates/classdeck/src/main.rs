mod app;
mod cli;
mod commands;
mod config;
mod deck;
mod motion;
mod nav;
mod render;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    cli.run()
}
