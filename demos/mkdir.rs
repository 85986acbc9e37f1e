//! Example: Create a directory
//!
//! Usage:
//!   cargo run --example mkdir -- --addr HOST:PORT [--user USER] [--mode 755] <PATH>

mod cli;

use cli::{init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str =
    "Usage: cargo run --example mkdir -- --addr HOST:PORT [--user USER] [--proxy PROXY] [--mode OCTAL] <PATH>";

#[tokio::main]
async fn main() -> webhdfs::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let mode = parser
        .take_value(&["--mode", "-m"])
        .map(|m| u16::from_str_radix(&m, 8).unwrap_or_else(|_| usage_and_exit(USAGE)));
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let path = Path::new(positionals[0].as_str());

    let fs = conn.connect()?;
    let created = match mode {
        Some(mode) => fs.mkdirs(&path, mode).await?,
        None => fs.mkdirs_default(&path).await?,
    };

    if created {
        println!("Directory created: {}", path);
    } else {
        eprintln!("Server did not create {}", path);
    }

    Ok(())
}
