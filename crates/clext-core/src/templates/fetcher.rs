//! Template retrieval via git sparse checkout
//!
//! The remote repository keeps one directory per resolved configuration
//! under `templates/`. Fetching is three git invocations run in the current
//! working directory: a shallow no-checkout clone, a sparse-checkout
//! restriction to the resolved subtree, and a checkout. Each step must
//! succeed before the next runs; a failed step surfaces the underlying
//! stderr and the whole fetch aborts. Rerunning the tool is the recovery
//! path, so there are no retries.

use crate::error::Error;
use crate::product::ProductInfo;
use std::path::Path;
use tokio::process::Command;
use url::Url;
use walkdir::WalkDir;

/// Fetches one template variant from the remote repository.
pub struct TemplateFetcher {
    repo_url: Url,
}

impl TemplateFetcher {
    pub fn new(repo_url: Url) -> Self {
        Self { repo_url }
    }

    /// Resolve the repository URL from the environment override or the
    /// product default, validating it before any subprocess sees it.
    pub fn from_env(product: &ProductInfo) -> Result<Self, Error> {
        let url_str = std::env::var(product.template_repo_env)
            .unwrap_or_else(|_| product.template_repo_url.to_string());
        let repo_url = Url::parse(&url_str).map_err(|source| Error::InvalidTemplateUrl {
            url: url_str,
            source,
        })?;
        Ok(Self::new(repo_url))
    }

    pub fn repo_url(&self) -> &Url {
        &self.repo_url
    }

    /// Where the variant lives inside the repository.
    pub fn sparse_path(template_path: &str) -> String {
        format!("templates/{}", template_path)
    }

    /// The three git argument lists run for a fetch, in order.
    fn git_invocations(repo_url: &Url, sparse_path: &str) -> Vec<Vec<String>> {
        vec![
            vec![
                "clone".to_string(),
                "--depth".to_string(),
                "1".to_string(),
                "--no-checkout".to_string(),
                repo_url.as_str().to_string(),
                ".".to_string(),
            ],
            vec![
                "sparse-checkout".to_string(),
                "set".to_string(),
                sparse_path.to_string(),
            ],
            vec!["checkout".to_string()],
        ]
    }

    /// Materialize the template variant into the current working directory.
    /// Returns the number of files checked out under the sparse path.
    pub async fn fetch(&self, template_path: &str) -> Result<usize, Error> {
        let sparse_path = Self::sparse_path(template_path);

        for args in Self::git_invocations(&self.repo_url, &sparse_path) {
            run_git(&args).await?;
        }

        Ok(count_files(Path::new(&sparse_path)))
    }
}

async fn run_git(args: &[String]) -> Result<(), Error> {
    let output = Command::new("git")
        .args(args)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::GitMissing,
            _ => Error::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::Git {
            command: format!("git {}", args.join(" ")),
            details: if stderr.is_empty() {
                "unknown error".to_string()
            } else {
                stderr
            },
        });
    }

    Ok(())
}

fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
