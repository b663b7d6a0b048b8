use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different workout store deployments the CLI can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development stack.
    Local,
    /// Hosted production store.
    #[default]
    Production,
    /// A custom store deployment.
    Custom { store_url: String },
}

impl Environment {
    /// Returns the workout store base URL associated with the environment.
    pub fn store_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:54321".to_string(),
            Environment::Production => "https://store.wodboard.app".to_string(),
            Environment::Custom { store_url } => store_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" | "prod" => Ok(Environment::Production),
            url if url.contains("://") => Ok(Environment::Custom {
                store_url: s.trim_end_matches('/').to_string(),
            }),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.store_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_environments() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_parse_custom_url_trims_trailing_slash() {
        let env = "https://staging.example.com/"
            .parse::<Environment>()
            .unwrap();
        assert_eq!(env.store_url(), "https://staging.example.com");
    }

    #[test]
    fn test_parse_unknown_is_error() {
        assert!("nonsense".parse::<Environment>().is_err());
    }
}
