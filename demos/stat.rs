//! Example: Get information about a file or directory
//!
//! Usage:
//!   cargo run --example stat -- --addr HOST:PORT [--user USER] <PATH>

mod cli;

use cli::{format_size, init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str = "Usage: cargo run --example stat -- --addr HOST:PORT [--user USER] [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let positionals = parser.remaining();
    if positionals.len() != 1 {
        usage_and_exit(USAGE);
    }
    let path = Path::new(positionals[0].as_str());

    let fs = match conn.connect() {
        Ok(fs) => fs,
        Err(e) => {
            eprintln!("Invalid connection settings: {}", e);
            std::process::exit(1);
        }
    };

    match fs.get_file_status(&path).await {
        Ok(status) => {
            println!("Path:          {}", path);
            println!("Type:          {:?}", status.file_type);
            println!("Size:          {}", format_size(status.length));
            println!("Permission:    {}", status.permission);
            println!("Owner:         {}:{}", status.owner, status.group);
            println!("Replication:   {}", status.replication);
            println!("Block size:    {}", format_size(status.block_size));
            println!("Modified:      {}", status.modification_time);
            println!("Accessed:      {}", status.access_time);
            if let Some(target) = &status.symlink {
                println!("Link target:   {}", target);
            }
        }
        Err(e) => {
            eprintln!("Failed to stat {}: {}", path, e);
            std::process::exit(1);
        }
    }
}
