//! Example: Remove a file or directory
//!
//! Usage:
//!   cargo run --example rm -- --addr HOST:PORT [--user USER] [-r] <PATH>

mod cli;

use cli::{init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str =
    "Usage: cargo run --example rm -- --addr HOST:PORT [--user USER] [--proxy PROXY] [-r] <PATH>";

#[tokio::main]
async fn main() -> webhdfs::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let recursive = parser.take_flag(&["-r", "--recursive"]);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let path = Path::new(positionals[0].as_str());

    let fs = conn.connect()?;
    if fs.delete(&path, recursive).await? {
        println!("Removed: {}", path);
    } else {
        eprintln!("Nothing removed at {}", path);
    }

    Ok(())
}
