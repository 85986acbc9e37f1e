//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::{Result, WebHdfsError};

/// Permission bits used by `mkdirs_default` unless overridden.
pub const DEFAULT_PERMISSION: u16 = 0o755;

/// Highest permission value the protocol accepts (sticky bit + rwxrwxrwx).
pub const MAX_PERMISSION: u16 = 0o1777;

/// Connection parameters for a [`FileSystem`](crate::FileSystem).
///
/// Built once and handed to `FileSystem::new`, which owns it from then on.
///
/// ```
/// use std::time::Duration;
/// use webhdfs::Configuration;
///
/// let conf = Configuration::new("namenode:9870")
///     .with_user("hadoop")
///     .with_timeout(Duration::from_secs(30));
/// assert_eq!(conf.address(), "namenode:9870");
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    address: String,
    user: Option<String>,
    default_permission: u16,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
    max_idle_per_host: Option<usize>,
}

impl Configuration {
    /// Create a configuration for the NameNode at `address` (`host:port`).
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            user: None,
            default_permission: DEFAULT_PERMISSION,
            timeout: None,
            connect_timeout: None,
            proxy: None,
            max_idle_per_host: None,
        }
    }

    /// Send `user.name` with every request (pseudo authentication).
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_default_permission(mut self, permission: u16) -> Self {
        self.default_permission = permission;
        self
    }

    /// Total per-request timeout, enforced by the HTTP client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Route requests through a proxy (e.g. "http://proxy:8080").
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = Some(max);
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn default_permission(&self) -> u16 {
        self.default_permission
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn max_idle_per_host(&self) -> Option<usize> {
        self.max_idle_per_host
    }

    /// Check the configuration before a client is built from it.
    pub fn validate(&self) -> Result<()> {
        let address = self.address.as_str();
        if address.trim().is_empty() {
            return Err(WebHdfsError::Config("address is empty".to_string()));
        }
        // Anything past host:port would end up in the URL's path, query or fragment.
        let bad_address =
            || WebHdfsError::Config(format!("address must be host:port, got {:?}", address));
        if address
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | '\\'))
        {
            return Err(bad_address());
        }
        let url = Url::parse(&format!("http://{}/", address)).map_err(|_| bad_address())?;
        if url.host_str().is_none()
            || !url.username().is_empty()
            || url.password().is_some()
            || url.path() != "/"
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(bad_address());
        }
        if self.default_permission > MAX_PERMISSION {
            return Err(WebHdfsError::Config(format!(
                "default permission {:o} is out of range",
                self.default_permission
            )));
        }
        if let Some(user) = &self.user {
            if user.is_empty() {
                return Err(WebHdfsError::Config("user is empty".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conf = Configuration::new("localhost:9870");
        assert_eq!(conf.address(), "localhost:9870");
        assert_eq!(conf.default_permission(), 0o755);
        assert!(conf.user().is_none());
        assert!(conf.timeout().is_none());
        assert!(conf.proxy().is_none());
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let conf = Configuration::new("nn:50070")
            .with_user("webuser")
            .with_default_permission(0o700)
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(1))
            .with_max_idle_per_host(4);
        assert_eq!(conf.user(), Some("webuser"));
        assert_eq!(conf.default_permission(), 0o700);
        assert_eq!(conf.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(conf.connect_timeout(), Some(Duration::from_secs(1)));
        assert_eq!(conf.max_idle_per_host(), Some(4));
    }

    #[test]
    fn test_validate_accepts_host_port() {
        assert!(Configuration::new("localhost:9870").validate().is_ok());
        assert!(Configuration::new("10.0.0.7:50070").validate().is_ok());
        assert!(Configuration::new("[::1]:9870").validate().is_ok());
        assert!(Configuration::new("namenode").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Configuration::new("").validate().is_err());
        assert!(Configuration::new("http://nn:9870").validate().is_err());
        assert!(Configuration::new("nn:9870/webhdfs").validate().is_err());
        assert!(Configuration::new("nn:9870?x").validate().is_err());
        assert!(Configuration::new("nn:9870#x").validate().is_err());
        assert!(Configuration::new("hdfs@nn:9870").validate().is_err());
        assert!(Configuration::new("  nn:9870").validate().is_err());
        assert!(Configuration::new("nn:9870 ").validate().is_err());
        assert!(Configuration::new("nn:port").validate().is_err());
        assert!(Configuration::new("nn:9870")
            .with_default_permission(0o7777)
            .validate()
            .is_err());
        assert!(Configuration::new("nn:9870")
            .with_user("")
            .validate()
            .is_err());
    }
}
