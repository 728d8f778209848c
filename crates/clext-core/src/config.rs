//! The configuration record built by the question flow

use anyhow::{Context, Result};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: &'static [PackageManager] = &[
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    /// Name of the binary invoked for installs
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.command()
    }
}

/// Optional framework features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ShadcnUi,
    Trpc,
}

impl Feature {
    pub const ALL: &'static [Feature] = &[Feature::ShadcnUi, Feature::Trpc];

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::ShadcnUi => "ShadCN-UI (Installs Tailwind CSS)",
            Feature::Trpc => "tRPC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orm {
    None,
    Prisma,
    Drizzle,
    Firestore,
}

impl Orm {
    pub const ALL: &'static [Orm] = &[Orm::None, Orm::Prisma, Orm::Drizzle, Orm::Firestore];

    pub fn display_name(&self) -> &'static str {
        match self {
            Orm::None => "None",
            Orm::Prisma => "Prisma ORM",
            Orm::Drizzle => "Drizzle ORM",
            Orm::Firestore => "Firestore (Installs Firebase)",
        }
    }
}

/// Database behind the ORM. Informational: the answer is shown in the
/// summary but does not select dependencies or a template variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    Postgres,
    Mysql,
    Sqlite,
}

impl Database {
    pub const ALL: &'static [Database] = &[Database::Postgres, Database::Mysql, Database::Sqlite];

    pub fn display_name(&self) -> &'static str {
        match self {
            Database::Postgres => "PostgreSQL",
            Database::Mysql => "MySQL",
            Database::Sqlite => "SQLite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    None,
    Valibot,
    Zod,
    Superstruct,
    Yup,
}

impl Validator {
    pub const ALL: &'static [Validator] = &[
        Validator::None,
        Validator::Valibot,
        Validator::Zod,
        Validator::Superstruct,
        Validator::Yup,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Validator::None => "None",
            Validator::Valibot => "Valibot",
            Validator::Zod => "Zod",
            Validator::Superstruct => "Superstruct",
            Validator::Yup => "Yup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssFramework {
    None,
    Tailwind,
    Unocss,
}

impl CssFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            CssFramework::None => "None",
            CssFramework::Tailwind => "TailwindCSS",
            CssFramework::Unocss => "UnoCSS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssPreprocessor {
    None,
    Scss,
    Sass,
    Less,
    Stylus,
}

impl CssPreprocessor {
    pub const ALL: &'static [CssPreprocessor] = &[
        CssPreprocessor::None,
        CssPreprocessor::Scss,
        CssPreprocessor::Sass,
        CssPreprocessor::Less,
        CssPreprocessor::Stylus,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CssPreprocessor::None => "None",
            CssPreprocessor::Scss => "SCSS",
            CssPreprocessor::Sass => "SASS",
            CssPreprocessor::Less => "LESS",
            CssPreprocessor::Stylus => "Stylus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    None,
    Firebase,
    Supabase,
    Auth0,
}

impl AuthProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::None => "None",
            AuthProvider::Firebase => "Firebase",
            AuthProvider::Supabase => "Supabase",
            AuthProvider::Auth0 => "Auth0",
        }
    }
}

/// Fully collected configuration, immutable once built.
///
/// `database` and `uno_tailwind_preset` are `Some` only when their guard
/// question was asked (ORM other than None/Firestore, UnoCSS selected).
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub src_folder: bool,
    pub app_router: bool,
    pub package_manager: PackageManager,
    pub features: Vec<Feature>,
    pub orm: Orm,
    pub database: Option<Database>,
    pub validator: Validator,
    pub css_framework: CssFramework,
    pub uno_tailwind_preset: Option<bool>,
    pub css_preprocessor: CssPreprocessor,
    pub auth_provider: AuthProvider,
    pub install_dependencies: bool,
}

/// Partially collected configuration, filled in one question at a time.
///
/// Skip predicates and conditional choice sets are computed from this,
/// so a question only ever sees the answers collected before it.
#[derive(Debug, Default)]
pub struct ConfigDraft {
    pub src_folder: Option<bool>,
    pub app_router: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub features: Vec<Feature>,
    pub orm: Option<Orm>,
    pub database: Option<Database>,
    pub validator: Option<Validator>,
    pub css_framework: Option<CssFramework>,
    pub uno_tailwind_preset: Option<bool>,
    pub css_preprocessor: Option<CssPreprocessor>,
    pub auth_provider: Option<AuthProvider>,
    pub install_dependencies: Option<bool>,
}

impl ConfigDraft {
    /// Seal the draft into an immutable record.
    ///
    /// Fails only if the question flow skipped a mandatory answer, which
    /// would be a bug in the question list rather than a runtime condition.
    pub fn finish(self) -> Result<ProjectConfig> {
        Ok(ProjectConfig {
            src_folder: self.src_folder.context("src directory answer missing")?,
            app_router: self.app_router.context("App Router answer missing")?,
            package_manager: self
                .package_manager
                .context("package manager answer missing")?,
            features: self.features,
            orm: self.orm.context("ORM answer missing")?,
            database: self.database,
            validator: self.validator.context("validator answer missing")?,
            css_framework: self.css_framework.context("CSS framework answer missing")?,
            uno_tailwind_preset: self.uno_tailwind_preset,
            css_preprocessor: self
                .css_preprocessor
                .context("CSS preprocessor answer missing")?,
            auth_provider: self.auth_provider.context("auth provider answer missing")?,
            install_dependencies: self
                .install_dependencies
                .context("install dependencies answer missing")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ConfigDraft {
        ConfigDraft {
            src_folder: Some(true),
            app_router: Some(true),
            package_manager: Some(PackageManager::Npm),
            features: vec![],
            orm: Some(Orm::None),
            database: None,
            validator: Some(Validator::None),
            css_framework: Some(CssFramework::None),
            uno_tailwind_preset: None,
            css_preprocessor: Some(CssPreprocessor::None),
            auth_provider: Some(AuthProvider::None),
            install_dependencies: Some(true),
        }
    }

    #[test]
    fn test_finish_with_all_answers() {
        let config = full_draft().finish().unwrap();
        assert!(config.src_folder);
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_finish_rejects_missing_mandatory_answer() {
        let mut draft = full_draft();
        draft.orm = None;
        assert!(draft.finish().is_err());
    }

    #[test]
    fn test_skipped_answers_stay_absent() {
        let config = full_draft().finish().unwrap();
        assert!(config.database.is_none());
        assert!(config.uno_tailwind_preset.is_none());
    }

    #[test]
    fn test_package_manager_commands() {
        assert_eq!(PackageManager::Npm.command(), "npm");
        assert_eq!(PackageManager::Bun.command(), "bun");
    }
}
