//! Subversion client settings.
//!
//! Built from command-line flags, each with an environment fallback, and
//! turned into the global arguments every `svn` invocation receives.

use std::fmt;
use std::path::PathBuf;

use clap::Args;

#[derive(Args, Clone, Default)]
pub struct SvnConfiguration {
    /// Path to the svn command-line client
    #[arg(long = "svn-binary", env = "SVN_BLAME_BINARY", default_value = "svn", global = true)]
    pub binary: String,

    /// Username used to authenticate against the repository
    #[arg(long, env = "SVN_BLAME_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password used to authenticate against the repository
    #[arg(long, env = "SVN_BLAME_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Alternate runtime configuration directory for svn
    #[arg(long, env = "SVN_BLAME_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,
}

impl SvnConfiguration {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            ..Self::default()
        }
    }

    /// Arguments shared by every svn call, placed before the subcommand's own.
    pub fn global_args(&self) -> Vec<String> {
        let mut args = vec!["--non-interactive".to_string()];

        if let Some(username) = &self.username {
            args.push("--username".to_string());
            args.push(username.clone());
        }
        // The password itself is written to svn's stdin, never to argv.
        if self.password.is_some() {
            args.push("--password-from-stdin".to_string());
            args.push("--no-auth-cache".to_string());
        }
        if let Some(dir) = &self.config_dir {
            args.push("--config-dir".to_string());
            args.push(dir.to_string_lossy().to_string());
        }

        args
    }
}

// Keeps the password out of logs.
impl fmt::Debug for SvnConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvnConfiguration")
            .field("binary", &self.binary)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("config_dir", &self.config_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_configuration_is_only_non_interactive() {
        let config = SvnConfiguration::new("svn");
        assert_eq!(config.global_args(), vec!["--non-interactive"]);
    }

    #[test]
    fn credentials_disable_the_auth_cache() {
        let config = SvnConfiguration {
            binary: "svn".into(),
            username: Some("henryju".into()),
            password: Some("secret".into()),
            config_dir: Some(PathBuf::from("/tmp/svn-config")),
        };
        assert_eq!(
            config.global_args(),
            vec![
                "--non-interactive",
                "--username",
                "henryju",
                "--password-from-stdin",
                "--no-auth-cache",
                "--config-dir",
                "/tmp/svn-config",
            ]
        );
    }

    #[test]
    fn password_never_reaches_the_arguments() {
        let config = SvnConfiguration {
            password: Some("secret".into()),
            ..SvnConfiguration::new("svn")
        };
        assert!(config.global_args().iter().all(|arg| !arg.contains("secret")));
    }

    #[test]
    fn debug_output_masks_password() {
        let config = SvnConfiguration {
            password: Some("secret".into()),
            ..SvnConfiguration::new("svn")
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("***"));
    }
}
