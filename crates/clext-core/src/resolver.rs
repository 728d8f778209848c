//! Mapping from a collected configuration to dependency tokens and the
//! template path
//!
//! Both functions are pure and take the record explicitly; nothing here
//! reads ambient state. Token order is fixed (features, then ORM,
//! validator, CSS framework, CSS preprocessor, auth provider) so the same
//! record always resolves to the same path.

use crate::config::{
    AuthProvider, CssFramework, CssPreprocessor, Feature, Orm, ProjectConfig, Validator,
};

/// npm package names to install for the given configuration.
///
/// The `database` and `uno_tailwind_preset` answers are deliberately not
/// consulted: they are informational, and the template repository does not
/// branch on them.
pub fn dependency_tokens(config: &ProjectConfig) -> Vec<&'static str> {
    let mut tokens = Vec::new();

    for feature in &config.features {
        tokens.push(match feature {
            Feature::ShadcnUi => "shadcn-ui",
            Feature::Trpc => "trpc",
        });
    }

    tokens.extend(match config.orm {
        Orm::None => &[][..],
        Orm::Prisma => &["prisma", "@prisma/client"],
        Orm::Drizzle => &["drizzle-orm"],
        Orm::Firestore => &["firebase"],
    });

    match config.validator {
        Validator::None => {}
        Validator::Valibot => tokens.push("valibot"),
        Validator::Zod => tokens.push("zod"),
        Validator::Superstruct => tokens.push("superstruct"),
        Validator::Yup => tokens.push("yup"),
    }

    tokens.extend(match config.css_framework {
        CssFramework::None => &[][..],
        CssFramework::Tailwind => &["tailwindcss", "autoprefixer", "postcss"],
        CssFramework::Unocss => &["unocss"],
    });

    match config.css_preprocessor {
        CssPreprocessor::None => {}
        // Both syntaxes are compiled by the one sass package.
        CssPreprocessor::Scss | CssPreprocessor::Sass => tokens.push("sass"),
        CssPreprocessor::Less => tokens.push("less"),
        CssPreprocessor::Stylus => tokens.push("stylus"),
    }

    match config.auth_provider {
        AuthProvider::None => {}
        AuthProvider::Firebase => tokens.push("firebase"),
        AuthProvider::Supabase => tokens.push("supabase"),
        AuthProvider::Auth0 => tokens.push("auth0"),
    }

    tokens
}

/// Relative path of the template variant inside the remote repository's
/// `templates/` tree.
pub fn template_path(config: &ProjectConfig, tokens: &[&str]) -> String {
    let mut path = String::new();
    if config.src_folder {
        path.push_str("src/");
    }
    if config.app_router {
        path.push_str("pages/");
    }
    path.push_str(&tokens.join("/"));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Database, PackageManager};

    fn bare_config() -> ProjectConfig {
        ProjectConfig {
            src_folder: true,
            app_router: true,
            package_manager: PackageManager::Npm,
            features: vec![],
            orm: Orm::None,
            database: None,
            validator: Validator::None,
            css_framework: CssFramework::None,
            uno_tailwind_preset: None,
            css_preprocessor: CssPreprocessor::None,
            auth_provider: AuthProvider::None,
            install_dependencies: true,
        }
    }

    #[test]
    fn test_bare_config_resolves_to_no_tokens() {
        let config = bare_config();
        assert!(dependency_tokens(&config).is_empty());
        assert_eq!(template_path(&config, &[]), "src/pages/");
    }

    #[test]
    fn test_full_config_token_order() {
        let config = ProjectConfig {
            features: vec![Feature::ShadcnUi, Feature::Trpc],
            orm: Orm::Prisma,
            database: Some(Database::Postgres),
            validator: Validator::Zod,
            css_framework: CssFramework::Tailwind,
            css_preprocessor: CssPreprocessor::Scss,
            auth_provider: AuthProvider::Auth0,
            ..bare_config()
        };

        assert_eq!(
            dependency_tokens(&config),
            vec![
                "shadcn-ui",
                "trpc",
                "prisma",
                "@prisma/client",
                "zod",
                "tailwindcss",
                "autoprefixer",
                "postcss",
                "sass",
                "auth0",
            ]
        );
    }

    #[test]
    fn test_tokens_are_deterministic() {
        let config = ProjectConfig {
            orm: Orm::Drizzle,
            database: Some(Database::Sqlite),
            validator: Validator::Yup,
            ..bare_config()
        };
        assert_eq!(dependency_tokens(&config), dependency_tokens(&config));
    }

    #[test]
    fn test_database_answer_never_contributes() {
        let without = ProjectConfig {
            orm: Orm::Drizzle,
            ..bare_config()
        };
        let with = ProjectConfig {
            orm: Orm::Drizzle,
            database: Some(Database::Mysql),
            ..bare_config()
        };
        assert_eq!(dependency_tokens(&without), dependency_tokens(&with));
    }

    #[test]
    fn test_uno_preset_answer_never_contributes() {
        let without = ProjectConfig {
            css_framework: CssFramework::Unocss,
            ..bare_config()
        };
        let with = ProjectConfig {
            css_framework: CssFramework::Unocss,
            uno_tailwind_preset: Some(true),
            ..bare_config()
        };
        assert_eq!(dependency_tokens(&without), dependency_tokens(&with));
        assert_eq!(
            template_path(&without, &dependency_tokens(&without)),
            template_path(&with, &dependency_tokens(&with))
        );
    }

    #[test]
    fn test_sass_and_scss_share_a_package() {
        let scss = ProjectConfig {
            css_preprocessor: CssPreprocessor::Scss,
            ..bare_config()
        };
        let sass = ProjectConfig {
            css_preprocessor: CssPreprocessor::Sass,
            ..bare_config()
        };
        assert_eq!(dependency_tokens(&scss), vec!["sass"]);
        assert_eq!(dependency_tokens(&sass), vec!["sass"]);
    }

    #[test]
    fn test_firestore_maps_to_firebase() {
        let config = ProjectConfig {
            orm: Orm::Firestore,
            auth_provider: AuthProvider::Firebase,
            ..bare_config()
        };
        assert_eq!(dependency_tokens(&config), vec!["firebase", "firebase"]);
    }

    #[test]
    fn test_template_path_prefixes() {
        let mut config = bare_config();
        config.src_folder = false;
        config.app_router = false;
        assert_eq!(template_path(&config, &["trpc", "zod"]), "trpc/zod");

        config.src_folder = true;
        assert_eq!(template_path(&config, &["trpc", "zod"]), "src/trpc/zod");

        config.app_router = true;
        assert_eq!(
            template_path(&config, &["trpc", "zod"]),
            "src/pages/trpc/zod"
        );
    }
}
