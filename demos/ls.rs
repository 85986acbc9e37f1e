//! Example: List a directory
//!
//! Usage:
//!   cargo run --example ls -- --addr HOST:PORT [--user USER] [PATH]

mod cli;

use cli::{format_size, init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str = "Usage: cargo run --example ls -- --addr HOST:PORT [--user USER] [--proxy PROXY] [PATH]";

#[tokio::main]
async fn main() -> webhdfs::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let positionals = parser.remaining();
    let path = match positionals.as_slice() {
        [] => Path::new("/"),
        [p] => Path::new(p.as_str()),
        _ => usage_and_exit(USAGE),
    };

    let fs = conn.connect()?;
    let statuses = fs.list_status(&path).await?;

    println!("Listing: {}\n", path);
    if statuses.is_empty() {
        println!("  (empty)");
    }
    for status in statuses {
        let kind = if status.is_dir() { 'd' } else if status.is_file() { '-' } else { 'l' };
        let size = if status.is_file() {
            format_size(status.length)
        } else {
            String::new()
        };
        println!(
            "  {}{:>4} {:<10} {:<12} {:>10}  {}",
            kind,
            status.permission,
            status.owner,
            status.group,
            size,
            path.join(&status.path_suffix)
        );
    }

    Ok(())
}
