//! Example: Rename or move a file or directory
//!
//! Usage:
//!   cargo run --example mv -- --addr HOST:PORT [--user USER] <SOURCE> <DEST>

mod cli;

use cli::{init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str =
    "Usage: cargo run --example mv -- --addr HOST:PORT [--user USER] [--proxy PROXY] <SOURCE> <DEST>";

#[tokio::main]
async fn main() -> webhdfs::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let positionals = parser.remaining();
    if positionals.len() != 2 {
        usage_and_exit(USAGE);
    }
    let source = Path::new(positionals[0].as_str());
    let dest = Path::new(positionals[1].as_str());

    let fs = conn.connect()?;
    if fs.rename(&source, &dest).await? {
        println!("Moved {} -> {}", source, dest);
    } else {
        eprintln!("Rename refused by server: {} -> {}", source, dest);
        std::process::exit(1);
    }

    Ok(())
}
