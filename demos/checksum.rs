//! Example: Print the checksum of a file
//!
//! Usage:
//!   cargo run --example checksum -- --addr HOST:PORT [--user USER] <PATH>

mod cli;

use cli::{init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str =
    "Usage: cargo run --example checksum -- --addr HOST:PORT [--user USER] [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> webhdfs::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let path = Path::new(positionals[0].as_str());

    let fs = conn.connect()?;
    let checksum = fs.get_file_checksum(&path).await?;
    println!("{}\t{}\t{}", path, checksum.algorithm, checksum.bytes);

    Ok(())
}
