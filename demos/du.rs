//! Example: Summarize disk usage of a directory tree
//!
//! Usage:
//!   cargo run --example du -- --addr HOST:PORT [--user USER] <PATH>

mod cli;

use cli::{format_size, init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str =
    "Usage: cargo run --example du -- --addr HOST:PORT [--user USER] [--proxy PROXY] <PATH>";

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
    let summary = fs.get_content_summary(&path).await?;

    println!("Summary of {}", path);
    println!("  Directories:    {}", summary.directory_count);
    println!("  Files:          {}", summary.file_count);
    println!("  Length:         {}", format_size(summary.length));
    println!("  Space consumed: {}", format_size(summary.space_consumed));
    if summary.has_quota() {
        println!("  Name quota:     {}", summary.quota);
    }
    if summary.has_space_quota() {
        println!("  Space quota:    {}", format_size(summary.space_quota));
    }

    Ok(())
}
