//! Request construction: operation + path + arguments into a WebHDFS URL.

use reqwest::{Method, Url};

use crate::api::Operation;
use crate::config::{Configuration, MAX_PERMISSION};
use crate::error::{Result, WebHdfsError};
use crate::fs::Path;

/// Path prefix of every WebHDFS endpoint.
pub const BASE_PATH: &str = "/webhdfs/v1";

/// Query key carrying the pseudo-authentication user.
const USER_PARAM: &str = "user.name";

/// An operation argument, rendered into a single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Destination(Path),
    Permission(u16),
    CreateParent(bool),
    Recursive(bool),
    Owner(String),
    Group(String),
    Replication(u16),
    /// Epoch millis, -1 leaves the value unchanged
    ModificationTime(i64),
    /// Epoch millis, -1 leaves the value unchanged
    AccessTime(i64),
    NewLength(u64),
    Sources(Vec<Path>),
}

impl Param {
    /// Query key as the protocol spells it.
    pub fn key(&self) -> &'static str {
        match self {
            Param::Destination(_) => "destination",
            Param::Permission(_) => "permission",
            Param::CreateParent(_) => "createParent",
            Param::Recursive(_) => "recursive",
            Param::Owner(_) => "owner",
            Param::Group(_) => "group",
            Param::Replication(_) => "replication",
            Param::ModificationTime(_) => "modificationtime",
            Param::AccessTime(_) => "accesstime",
            Param::NewLength(_) => "newlength",
            Param::Sources(_) => "sources",
        }
    }

    /// Render the unencoded query value.
    pub fn render(&self) -> Result<String> {
        match self {
            Param::Destination(path) => {
                check_path(path)?;
                Ok(path.to_string())
            }
            Param::Permission(bits) => render_permission(*bits),
            Param::CreateParent(flag) | Param::Recursive(flag) => Ok(flag.to_string()),
            Param::Owner(name) | Param::Group(name) => {
                if name.is_empty() {
                    return Err(WebHdfsError::Usage(format!("{} must not be empty", self.key())));
                }
                Ok(name.clone())
            }
            Param::Replication(factor) => {
                if *factor == 0 {
                    return Err(WebHdfsError::Usage(
                        "replication must be at least 1".to_string(),
                    ));
                }
                Ok(factor.to_string())
            }
            Param::ModificationTime(millis) | Param::AccessTime(millis) => {
                if *millis < -1 {
                    return Err(WebHdfsError::Usage(format!(
                        "{} must be -1 or an epoch millisecond value",
                        self.key()
                    )));
                }
                Ok(millis.to_string())
            }
            Param::NewLength(length) => Ok(length.to_string()),
            Param::Sources(paths) => {
                if paths.is_empty() {
                    return Err(WebHdfsError::Usage("sources must not be empty".to_string()));
                }
                for path in paths {
                    check_path(path)?;
                    if path.as_str().contains(',') {
                        return Err(WebHdfsError::Usage(format!(
                            "source path contains a comma: {}",
                            path
                        )));
                    }
                }
                Ok(paths
                    .iter()
                    .map(Path::as_str)
                    .collect::<Vec<_>>()
                    .join(","))
            }
        }
    }
}

/// Octal rendering without a leading zero: 0o744 becomes "744".
pub fn render_permission(bits: u16) -> Result<String> {
    if bits > MAX_PERMISSION {
        return Err(WebHdfsError::Usage(format!(
            "permission {:o} is out of range",
            bits
        )));
    }
    Ok(format!("{:o}", bits))
}

fn check_path(path: &Path) -> Result<()> {
    if !path.is_absolute() {
        return Err(WebHdfsError::Usage(format!(
            "path must be absolute: {:?}",
            path.as_str()
        )));
    }
    if path.as_str().split('/').any(|s| s == "." || s == "..") {
        return Err(WebHdfsError::Usage(format!(
            "path must not contain . or .. segments: {}",
            path
        )));
    }
    Ok(())
}

/// A fully built request, ready for the transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub op: Operation,
    pub method: Method,
    pub url: Url,
}

/// Build the request for `op` on `path`.
///
/// The query always starts with `op=<code>`, followed by the operation's
/// declared parameters in declared order, then `user.name` when configured.
/// A missing required parameter, an undeclared one or a duplicate is a
/// usage error and nothing is sent.
pub fn build(
    config: &Configuration,
    op: Operation,
    path: &Path,
    params: &[Param],
) -> Result<Request> {
    check_path(path)?;

    let declared = op.params();
    for param in params {
        if !declared.iter().any(|spec| spec.key == param.key()) {
            return Err(WebHdfsError::Usage(format!(
                "{} does not accept parameter {}",
                op,
                param.key()
            )));
        }
    }

    let mut pairs: Vec<(&'static str, String)> = Vec::with_capacity(declared.len() + 2);
    pairs.push(("op", op.code().to_string()));
    for spec in declared {
        let mut matching = params.iter().filter(|p| p.key() == spec.key);
        match (matching.next(), matching.next()) {
            (Some(_), Some(_)) => {
                return Err(WebHdfsError::Usage(format!(
                    "parameter {} given more than once",
                    spec.key
                )));
            }
            (Some(param), None) => pairs.push((spec.key, param.render()?)),
            (None, _) if spec.required => {
                return Err(WebHdfsError::Usage(format!(
                    "{} requires parameter {}",
                    op, spec.key
                )));
            }
            (None, _) => {}
        }
    }
    if let Some(user) = config.user() {
        pairs.push((USER_PARAM, user.to_string()));
    }

    let base = format!("http://{}{}", config.address(), BASE_PATH);
    let mut url = Url::parse(&base)
        .map_err(|e| WebHdfsError::Config(format!("Invalid address {}: {}", config.address(), e)))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| WebHdfsError::Config(format!("Invalid address {}", config.address())))?;
        segments.extend(path.as_str().split('/').filter(|s| !s.is_empty()));
        if path.as_str().ends_with('/') {
            segments.push("");
        }
    }
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));

    Ok(Request {
        op,
        method: op.method(),
        url,
    })
}
