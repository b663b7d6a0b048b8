//! Version Checking Module
//!
//! Checks for new versions of the CLI by querying the GitHub API. The check
//! lives behind the [`VersionCheckable`] trait so tests can inject mocks.

use reqwest::{Client, ClientBuilder};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[cfg(test)]
use mockall::{automock, predicate::*};

// GitHub API endpoint for the latest release
const GITHUB_RELEASES_URL: &str =
    "https://api.github.com/repos/wodboard/wodboard/releases/latest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: String,
    pub name: String,
    pub published_at: String,
    pub html_url: String,
    pub prerelease: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub current_version: String,
    pub latest_version: Option<String>,
    pub update_available: bool,
    pub release_url: Option<String>,
    pub last_check: Option<Instant>,
}

impl VersionInfo {
    pub fn new(current_version: String) -> Self {
        Self {
            current_version,
            latest_version: None,
            update_available: false,
            release_url: None,
            last_check: None,
        }
    }

    pub fn update_from_release(&mut self, release: GitHubRelease) {
        self.latest_version = Some(release.tag_name.clone());
        self.release_url = Some(release.html_url);
        self.update_available = self.is_newer_version(&release.tag_name);
        self.last_check = Some(Instant::now());
    }

    /// Compare semantic versions to determine if the latest version is newer
    fn is_newer_version(&self, latest: &str) -> bool {
        match (parse_version(&self.current_version), parse_version(latest)) {
            (Ok(current), Ok(latest_ver)) => latest_ver > current,
            _ => false, // If parsing fails, assume no update needed
        }
    }
}

/// Parse a version string, handling optional 'v' prefix
fn parse_version(version: &str) -> Result<Version, semver::Error> {
    let clean_version = version.strip_prefix('v').unwrap_or(version);
    Version::parse(clean_version)
}

/// Trait for version checking - allows for easy mocking in tests
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionCheckable: Send + Sync {
    /// Check for the latest version from the remote source
    async fn check_latest_version(
        &self,
    ) -> Result<GitHubRelease, Box<dyn std::error::Error + Send + Sync>>;
}

/// Version checker client for making GitHub API requests
pub struct VersionChecker {
    client: Client,
}

impl VersionChecker {
    pub fn new(current_version: String) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("wodboard/{}", current_version))
            .build()
            .expect("Failed to create HTTP client for version checker");

        Self { client }
    }
}

#[async_trait::async_trait]
impl VersionCheckable for VersionChecker {
    /// Check for latest version from GitHub API
    async fn check_latest_version(
        &self,
    ) -> Result<GitHubRelease, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(GITHUB_RELEASES_URL).send().await?;

        if !response.status().is_success() {
            return Err(format!("GitHub API returned status: {}", response.status()).into());
        }

        let release: GitHubRelease = response.json().await?;
        Ok(release)
    }
}

/// Check if a new version is available and return notification message
pub async fn check_for_new_version(current_version: &str) -> Option<String> {
    let version_checker = VersionChecker::new(current_version.to_string());
    check_for_new_version_with(&version_checker, current_version).await
}

/// Trait-based variant of [`check_for_new_version`] for injecting doubles.
pub async fn check_for_new_version_with(
    checker: &dyn VersionCheckable,
    current_version: &str,
) -> Option<String> {
    if let Ok(release) = checker.check_latest_version().await {
        let mut version_info = VersionInfo::new(current_version.to_string());
        version_info.update_from_release(release.clone());

        if version_info.update_available {
            return Some(format!(
                "New version {} is available (current: {}). Download: {}",
                release.tag_name, current_version, release.html_url
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag: &str) -> GitHubRelease {
        GitHubRelease {
            tag_name: tag.to_string(),
            name: format!("Release {}", tag),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            html_url: format!("https://github.com/wodboard/wodboard/releases/tag/{}", tag),
            prerelease: false,
        }
    }

    #[test]
    fn test_version_comparison() {
        let info_090 = VersionInfo::new("0.9.0".to_string());
        let info_091 = VersionInfo::new("0.9.1".to_string());

        // Newer version detection, with and without 'v' prefix
        assert!(info_090.is_newer_version("0.9.1"));
        assert!(info_090.is_newer_version("v0.9.1"));
        assert!(info_091.is_newer_version("1.0.0"));

        // Same and older versions
        assert!(!info_091.is_newer_version("0.9.1"));
        assert!(!info_091.is_newer_version("0.9.0"));

        // Malformed versions are treated as "no update"
        assert!(!info_091.is_newer_version("not.a.version"));
        assert!(!info_091.is_newer_version(""));
    }

    #[test]
    fn test_version_info_update() {
        let mut info = VersionInfo::new("0.9.0".to_string());
        info.update_from_release(release("v0.9.1"));

        assert!(info.update_available);
        assert_eq!(info.latest_version, Some("v0.9.1".to_string()));
    }

    #[tokio::test]
    async fn test_update_notice_from_mocked_checker() {
        let mut mock_checker = MockVersionCheckable::new();
        mock_checker
            .expect_check_latest_version()
            .returning(|| Ok(release("v9.9.9")));

        let message = check_for_new_version_with(&mock_checker, "0.1.0").await;
        assert!(message.unwrap().contains("v9.9.9"));
    }

    #[tokio::test]
    async fn test_no_notice_when_up_to_date() {
        let mut mock_checker = MockVersionCheckable::new();
        mock_checker
            .expect_check_latest_version()
            .returning(|| Ok(release("v0.1.0")));

        assert!(
            check_for_new_version_with(&mock_checker, "0.1.0")
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_check_error_yields_no_notice() {
        let mut mock_checker = MockVersionCheckable::new();
        mock_checker
            .expect_check_latest_version()
            .returning(|| Err("GitHub API returned status: 500".into()));

        assert!(
            check_for_new_version_with(&mock_checker, "0.1.0")
                .await
                .is_none()
        );
    }
}
