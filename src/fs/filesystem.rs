//! The `FileSystem` entry point.

use tracing::debug;

use crate::api::error::classify;
use crate::api::request::{self, Param};
use crate::api::Operation;
use crate::config::Configuration;
use crate::error::Result;
use crate::fs::Path;
use crate::http::HttpClient;

/// Client handle for one WebHDFS NameNode.
///
/// Construct once and share freely: every method is a single request/response
/// round trip and nothing is cached between calls.
///
/// ```no_run
/// use webhdfs::{Configuration, FileSystem, Path};
///
/// # async fn example() -> webhdfs::Result<()> {
/// let fs = FileSystem::new(Configuration::new("namenode:9870"))?;
/// for status in fs.list_status(&Path::new("/user/hadoop")).await? {
///     println!("{} ({} bytes)", status.path_suffix, status.length);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileSystem {
    config: Configuration,
    http: HttpClient,
}

impl FileSystem {
    /// Validate `config` and build the HTTP client from it.
    pub fn new(config: Configuration) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::from_config(&config)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Build, send and classify one request, returning the 2xx body.
    pub(crate) async fn call(&self, op: Operation, path: &Path, params: &[Param]) -> Result<String> {
        let request = request::build(&self.config, op, path, params)?;
        debug!(op = %op, method = %request.method, url = %request.url, "webhdfs request");

        let response = self.http.send(request.method, request.url).await?;
        debug!(
            op = %op,
            status = response.status,
            bytes = response.body.len(),
            "webhdfs response"
        );

        classify(response.status, response.body)
    }
}
