//! Product identity and fixed external endpoints

/// Static facts about the tool: names shown to the user and the URLs the
/// flow reaches out to.
#[derive(Debug, Clone)]
pub struct ProductInfo {
    /// Internal product name (CLI command, env var prefix)
    pub name: &'static str,
    /// Human-readable display name
    pub display_name: &'static str,
    /// Default template repository cloned for sparse checkout
    pub template_repo_url: &'static str,
    /// Environment variable overriding the template repository
    pub template_repo_env: &'static str,
    /// Where users request new choices
    pub issues_url: &'static str,
    /// Download page offered when git is missing
    pub git_download_url: &'static str,
}

/// The clext product configuration
pub fn clext() -> ProductInfo {
    ProductInfo {
        name: "clext",
        display_name: "clext",
        template_repo_url: "https://github.com/qlick/clext.git",
        template_repo_env: "CLEXT_TEMPLATE_REPO",
        issues_url: "https://github.com/qlick/clext/issues/new",
        git_download_url: "https://git-scm.com/downloads",
    }
}
