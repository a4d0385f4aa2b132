mod serve;

use clap::{Parser as ClapParser, Subcommand};
use colored::Colorize;
use p5rs_common::HookName;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "p5rs")]
#[command(version)]
#[command(about = "Development tools for p5rs sketches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve a directory (index.html, .js glue, .wasm) for local preview
    Serve {
        /// Directory to serve
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on (0 picks a free port)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },

    /// List the hook names p5 calls on a sketch
    Hooks,
}

fn print_hooks() {
    for hook in HookName::ALL {
        let name = format!("{:<14}", hook.as_str());
        if hook.is_required() {
            println!("{} {} {}", name.bold(), hook.kind(), "(required)".yellow());
        } else {
            println!("{} {}", name, hook.kind());
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Hooks => {
            print_hooks();
            Ok(())
        }
        Command::Serve { dir, host, port } => serve::serve(dir, SocketAddr::new(host, port)).await,
    };

    if let Err(err) = result {
        eprintln!("{}: {:#}", "error".red().bold(), err);
        process::exit(1);
    }
}
