use std::env;
use std::process;

use tracing_subscriber::{fmt, EnvFilter};
use webhdfs::{Configuration, FileSystem};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("webhdfs=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    #[allow(dead_code)] // Only some demos take boolean switches.
    pub fn take_flag(&mut self, names: &[&str]) -> bool {
        match self.args.iter().position(|a| names.contains(&a.as_str())) {
            Some(i) => {
                self.args.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

/// Connection options shared by every demo.
pub struct Connection {
    pub address: String,
    pub user: Option<String>,
    pub proxy: Option<String>,
}

impl Connection {
    pub fn from_parser(parser: &mut ArgParser, usage: &'static str) -> Self {
        let address = parser
            .take_value(&["--addr", "-a"])
            .unwrap_or_else(|| usage_and_exit(usage));
        let user = parser.take_value(&["--user", "-u"]);
        let proxy = parser.take_value(&["--proxy"]);

        Self {
            address,
            user,
            proxy,
        }
    }

    pub fn connect(&self) -> webhdfs::Result<FileSystem> {
        let mut conf = Configuration::new(self.address.clone());
        if let Some(user) = &self.user {
            conf = conf.with_user(user.clone());
        }
        if let Some(proxy) = &self.proxy {
            conf = conf.with_proxy(proxy.clone());
        }
        FileSystem::new(conf)
    }
}

#[allow(dead_code)]
pub fn format_size(bytes: i64) -> String {
    let bytes = bytes.max(0) as f64;
    if bytes < 1024.0 {
        format!("{} B", bytes)
    } else if bytes < 1_048_576.0 {
        format!("{:.1} KB", bytes / 1024.0)
    } else if bytes < 1_073_741_824.0 {
        format!("{:.1} MB", bytes / 1_048_576.0)
    } else {
        format!("{:.2} GB", bytes / 1_073_741_824.0)
    }
}
