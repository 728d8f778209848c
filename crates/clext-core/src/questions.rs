//! Conditional branching over the partially built configuration
//!
//! The question sequence is linear, but some questions are skipped and some
//! choice sets shrink depending on earlier answers. Those decisions live
//! here as pure functions of the draft so the interactive layer stays a
//! plain loop over question steps.

use crate::config::{AuthProvider, ConfigDraft, CssFramework, Feature, Orm};

const ALL_CSS_FRAMEWORKS: &[CssFramework] = &[
    CssFramework::None,
    CssFramework::Tailwind,
    CssFramework::Unocss,
];

// ShadCN-UI is built on Tailwind, so the framework choice collapses.
const SHADCN_CSS_FRAMEWORKS: &[CssFramework] = &[CssFramework::Tailwind];

const ALL_AUTH_PROVIDERS: &[AuthProvider] = &[
    AuthProvider::None,
    AuthProvider::Firebase,
    AuthProvider::Supabase,
    AuthProvider::Auth0,
];

// Firestore already pulls in Firebase, which is also the auth layer.
const FIRESTORE_AUTH_PROVIDERS: &[AuthProvider] = &[AuthProvider::Firebase];

/// CSS framework choices offered, given the features picked so far.
pub fn css_framework_choices(draft: &ConfigDraft) -> &'static [CssFramework] {
    if draft.features.contains(&Feature::ShadcnUi) {
        SHADCN_CSS_FRAMEWORKS
    } else {
        ALL_CSS_FRAMEWORKS
    }
}

/// Auth provider choices offered, given the ORM picked so far.
pub fn auth_provider_choices(draft: &ConfigDraft) -> &'static [AuthProvider] {
    if draft.orm == Some(Orm::Firestore) {
        FIRESTORE_AUTH_PROVIDERS
    } else {
        ALL_AUTH_PROVIDERS
    }
}

/// The database question only applies to ORMs that sit on a SQL database.
pub fn asks_database(draft: &ConfigDraft) -> bool {
    matches!(draft.orm, Some(Orm::Prisma) | Some(Orm::Drizzle))
}

/// The Tailwind-preset question only applies when UnoCSS was selected.
pub fn asks_uno_tailwind_preset(draft: &ConfigDraft) -> bool {
    draft.css_framework == Some(CssFramework::Unocss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Feature;

    #[test]
    fn test_css_framework_collapses_for_shadcn() {
        let mut draft = ConfigDraft::default();
        draft.features = vec![Feature::ShadcnUi, Feature::Trpc];
        assert_eq!(css_framework_choices(&draft), &[CssFramework::Tailwind]);
    }

    #[test]
    fn test_css_framework_open_without_shadcn() {
        let mut draft = ConfigDraft::default();
        draft.features = vec![Feature::Trpc];
        assert_eq!(css_framework_choices(&draft).len(), 3);
    }

    #[test]
    fn test_auth_provider_collapses_for_firestore() {
        let mut draft = ConfigDraft::default();
        draft.orm = Some(Orm::Firestore);
        assert_eq!(auth_provider_choices(&draft), &[AuthProvider::Firebase]);
    }

    #[test]
    fn test_auth_provider_open_otherwise() {
        let mut draft = ConfigDraft::default();
        draft.orm = Some(Orm::Prisma);
        assert_eq!(auth_provider_choices(&draft).len(), 4);
    }

    #[test]
    fn test_database_asked_only_for_sql_orms() {
        let mut draft = ConfigDraft::default();
        assert!(!asks_database(&draft));
        draft.orm = Some(Orm::None);
        assert!(!asks_database(&draft));
        draft.orm = Some(Orm::Firestore);
        assert!(!asks_database(&draft));
        draft.orm = Some(Orm::Prisma);
        assert!(asks_database(&draft));
        draft.orm = Some(Orm::Drizzle);
        assert!(asks_database(&draft));
    }

    #[test]
    fn test_uno_preset_asked_only_for_unocss() {
        let mut draft = ConfigDraft::default();
        draft.css_framework = Some(CssFramework::Tailwind);
        assert!(!asks_uno_tailwind_preset(&draft));
        draft.css_framework = Some(CssFramework::Unocss);
        assert!(asks_uno_tailwind_preset(&draft));
    }
}
