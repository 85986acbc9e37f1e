//! Example: Create a symbolic link
//!
//! Usage:
//!   cargo run --example symlink -- --addr HOST:PORT [--user USER] [--parents] <TARGET> <LINK>

mod cli;

use cli::{init_tracing, usage_and_exit, ArgParser, Connection};
use webhdfs::Path;

const USAGE: &str =
    "Usage: cargo run --example symlink -- --addr HOST:PORT [--user USER] [--proxy PROXY] [--parents] <TARGET> <LINK>";

#[tokio::main]
async fn main() -> webhdfs::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let conn = Connection::from_parser(&mut parser, USAGE);
    let create_parent = parser.take_flag(&["--parents", "-p"]);
    let positionals = parser.remaining();
    if positionals.len() != 2 {
        usage_and_exit(USAGE);
    }
    let target = Path::new(positionals[0].as_str());
    let link = Path::new(positionals[1].as_str());

    let fs = conn.connect()?;
    if fs.create_symlink(&target, &link, create_parent).await? {
        println!("{} -> {}", link, target);
    } else {
        eprintln!("Server refused to create {}", link);
        std::process::exit(1);
    }

    Ok(())
}
