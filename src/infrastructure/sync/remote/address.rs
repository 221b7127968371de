//! `ssh://[user@]host[:port]/path` connection descriptors

use std::fmt;

use url::Url;

use crate::domain::ports::TargetError;

/// Connection scheme handled by `RemoteTarget`
pub const SSH_SCHEME: &str = "ssh";

/// Parsed remote location
///
/// `ssh://host/~/site` and `ssh://host/~` address paths relative to the
/// remote home directory; `ssh://host` and `ssh://host/` address the home
/// directory itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddress {
    user: Option<String>,
    host: String,
    port: Option<u16>,
    base: String,
}

impl RemoteAddress {
    pub fn parse(connection: &str) -> Result<Self, TargetError> {
        let invalid = |message: String| TargetError::InvalidConnection {
            connection: connection.to_string(),
            message,
        };

        let url = Url::parse(connection).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != SSH_SCHEME {
            return Err(invalid(format!("expected {}:// scheme", SSH_SCHEME)));
        }
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| invalid("missing host".to_string()))?
            .to_string();
        let user = Some(url.username())
            .filter(|user| !user.is_empty())
            .map(str::to_string);

        let base = match url.path() {
            "" | "/" | "/~" | "/~/" => ".".to_string(),
            path => match path.strip_prefix("/~/") {
                Some(relative) => relative.trim_end_matches('/').to_string(),
                None => path.to_string(),
            },
        };

        Ok(Self {
            user,
            host,
            port: url.port(),
            base,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Remote base directory
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `user@host` or `host`
    pub fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }

    /// Remote path of a file relative to the base directory
    pub fn path_of(&self, relative: &str) -> String {
        if self.base == "." {
            relative.to_string()
        } else {
            format!("{}/{}", self.base.trim_end_matches('/'), relative)
        }
    }

    /// Arguments for `ssh` running `command` on the remote host
    pub fn ssh_args(&self, command: String) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(self.destination());
        args.push(command);
        args
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.destination())?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, ":{}", self.base)
    }
}
