//! The interactive question flow
//!
//! A single pass over a fixed list of question steps, each with a skip
//! predicate over the partially built record. After the last question the
//! full record is summarized and confirmed; only a confirmed record reaches
//! the resolver, so declining has no side effects.

use crate::config::{
    AuthProvider, ConfigDraft, CssFramework, CssPreprocessor, Database, Feature, Orm,
    PackageManager, ProjectConfig, Validator,
};
use crate::error::Error;
use crate::product::ProductInfo;
use crate::questions;
use crate::resolver;
use crate::runtime::{check, install};
use crate::templates::TemplateFetcher;
use anyhow::Result;

/// One step of the question sequence.
struct Question {
    /// Whether this question is asked, given the answers so far.
    applies: fn(&ConfigDraft) -> bool,
    /// Prompt the user and record the answer on the draft.
    ask: fn(&mut ConfigDraft) -> Result<()>,
}

fn always(_: &ConfigDraft) -> bool {
    true
}

const QUESTIONS: &[Question] = &[
    Question { applies: always, ask: ask_src_folder },
    Question { applies: always, ask: ask_app_router },
    Question { applies: always, ask: ask_package_manager },
    Question { applies: always, ask: ask_features },
    Question { applies: always, ask: ask_orm },
    Question { applies: questions::asks_database, ask: ask_database },
    Question { applies: always, ask: ask_validator },
    Question { applies: always, ask: ask_css_framework },
    Question { applies: questions::asks_uno_tailwind_preset, ask: ask_uno_tailwind_preset },
    Question { applies: always, ask: ask_css_preprocessor },
    Question { applies: always, ask: ask_auth_provider },
    Question { applies: always, ask: ask_install_dependencies },
];

/// Run the interactive scaffolding flow end to end.
pub async fn run(product: &ProductInfo) -> Result<()> {
    cliclack::intro(product.display_name)?;
    cliclack::log::remark(format!(
        "A CLI tool to add features to your Next.js project.\n\
         Fetching templates requires git to be installed.\n\
         To request new choices, open an issue: {}",
        product.issues_url
    ))?;

    ensure_git(product)?;

    let mut draft = ConfigDraft::default();
    for question in QUESTIONS {
        if (question.applies)(&draft) {
            (question.ask)(&mut draft)?;
        }
    }
    let config = draft.finish()?;

    cliclack::note("You chose", summary(&config))?;

    let confirmed: bool = cliclack::confirm("Is this correct?").interact()?;
    if !confirmed {
        cliclack::outro("Cancelled. Nothing was changed.")?;
        return Ok(());
    }

    let tokens = resolver::dependency_tokens(&config);
    let path = resolver::template_path(&config, &tokens);

    fetch_template(product, &path).await?;

    if config.install_dependencies {
        let pm_info = check::check_package_manager(config.package_manager);
        if !pm_info.available {
            cliclack::log::warning(format!("{} is not on PATH", pm_info.name))?;
        }
        install::install_dependencies(config.package_manager, &tokens).await?;
        cliclack::log::success("Dependencies installed")?;
    } else if tokens.is_empty() {
        cliclack::log::info("No extra dependencies to install")?;
    } else {
        cliclack::log::info(format!(
            "Install the selected dependencies when you are ready:\n  {} {} {}",
            config.package_manager.command(),
            install::add_verb(config.package_manager),
            tokens.join(" ")
        ))?;
    }

    print_next_steps(&config, &path)?;

    Ok(())
}

/// git is required before any question is worth asking.
fn ensure_git(product: &ProductInfo) -> Result<()> {
    let git = check::check_git();

    if git.available {
        cliclack::log::success(format!(
            "git installed ({})",
            git.version.as_deref().unwrap_or("unknown")
        ))?;
        return Ok(());
    }

    cliclack::log::warning("git is not installed")?;

    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "docs",
            format!("Open the git download page ({})", product.git_download_url),
            "",
        )
        .item("abort", "Abort", "")
        .interact()?;

    if action == "docs" {
        open::that(product.git_download_url)?;
        cliclack::outro("After installing git, run this command again.")?;
    }

    Err(Error::GitMissing.into())
}

fn ask_src_folder(draft: &mut ConfigDraft) -> Result<()> {
    let value = cliclack::confirm("(1/10) Do you use the src directory?")
        .initial_value(true)
        .interact()?;
    draft.src_folder = Some(value);
    Ok(())
}

fn ask_app_router(draft: &mut ConfigDraft) -> Result<()> {
    let value = cliclack::confirm("(2/10) Do you use the Next.js App Router?")
        .initial_value(true)
        .interact()?;
    draft.app_router = Some(value);
    Ok(())
}

fn ask_package_manager(draft: &mut ConfigDraft) -> Result<()> {
    let mut select =
        cliclack::select("(3/10) What package manager are you using?");
    for pm in PackageManager::ALL {
        select = select.item(*pm, pm.display_name(), "");
    }
    draft.package_manager = Some(select.interact()?);
    Ok(())
}

fn ask_features(draft: &mut ConfigDraft) -> Result<()> {
    let mut multiselect =
        cliclack::multiselect("(4/10) What features would you like to add?");
    for feature in Feature::ALL {
        multiselect = multiselect.item(*feature, feature.display_name(), "");
    }
    draft.features = multiselect.required(false).interact()?;
    Ok(())
}

fn ask_orm(draft: &mut ConfigDraft) -> Result<()> {
    let mut select = cliclack::select("(5/10) What ORM would you like to use?");
    for orm in Orm::ALL {
        select = select.item(*orm, orm.display_name(), "");
    }
    draft.orm = Some(select.interact()?);
    Ok(())
}

fn ask_database(draft: &mut ConfigDraft) -> Result<()> {
    let mut select = cliclack::select("(5.1/10) What database do you use?");
    for database in Database::ALL {
        select = select.item(*database, database.display_name(), "");
    }
    draft.database = Some(select.interact()?);
    Ok(())
}

fn ask_validator(draft: &mut ConfigDraft) -> Result<()> {
    let mut select = cliclack::select("(6/10) What validator would you like to use?");
    for validator in Validator::ALL {
        select = select.item(*validator, validator.display_name(), "");
    }
    draft.validator = Some(select.interact()?);
    Ok(())
}

fn ask_css_framework(draft: &mut ConfigDraft) -> Result<()> {
    let mut select =
        cliclack::select("(7/10) What CSS framework would you like to use?");
    for framework in questions::css_framework_choices(draft) {
        select = select.item(*framework, framework.display_name(), "");
    }
    draft.css_framework = Some(select.interact()?);
    Ok(())
}

fn ask_uno_tailwind_preset(draft: &mut ConfigDraft) -> Result<()> {
    let value =
        cliclack::confirm("(7.1/10) Would you like to use the Tailwind CSS preset from UnoCSS?")
            .initial_value(true)
            .interact()?;
    draft.uno_tailwind_preset = Some(value);
    Ok(())
}

fn ask_css_preprocessor(draft: &mut ConfigDraft) -> Result<()> {
    let mut select =
        cliclack::select("(8/10) What CSS preprocessor would you like to use?");
    for preprocessor in CssPreprocessor::ALL {
        select = select.item(*preprocessor, preprocessor.display_name(), "");
    }
    draft.css_preprocessor = Some(select.interact()?);
    Ok(())
}

fn ask_auth_provider(draft: &mut ConfigDraft) -> Result<()> {
    let mut select =
        cliclack::select("(9/10) What auth provider would you like to use?");
    for provider in questions::auth_provider_choices(draft) {
        select = select.item(*provider, provider.display_name(), "");
    }
    draft.auth_provider = Some(select.interact()?);
    Ok(())
}

fn ask_install_dependencies(draft: &mut ConfigDraft) -> Result<()> {
    let value = cliclack::confirm("(10/10) Would you like to install dependencies?")
        .initial_value(true)
        .interact()?;
    draft.install_dependencies = Some(value);
    Ok(())
}

fn summary(config: &ProjectConfig) -> String {
    let features = if config.features.is_empty() {
        "None".to_string()
    } else {
        config
            .features
            .iter()
            .map(|f| f.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        format!("Source folder: {}", yes_no(config.src_folder)),
        format!("App Router: {}", yes_no(config.app_router)),
        format!("Package manager: {}", config.package_manager.display_name()),
        format!("Features: {}", features),
        format!("ORM: {}", config.orm.display_name()),
    ];

    if let Some(database) = config.database {
        lines.push(format!("Database: {}", database.display_name()));
    }

    lines.push(format!("Validator: {}", config.validator.display_name()));
    lines.push(format!(
        "CSS framework: {}",
        config.css_framework.display_name()
    ));

    if let Some(preset) = config.uno_tailwind_preset {
        lines.push(format!("UnoCSS Tailwind preset: {}", yes_no(preset)));
    }

    lines.push(format!(
        "CSS preprocessor: {}",
        config.css_preprocessor.display_name()
    ));
    lines.push(format!(
        "Auth provider: {}",
        config.auth_provider.display_name()
    ));
    lines.push(format!(
        "Install dependencies: {}",
        yes_no(config.install_dependencies)
    ));

    lines
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

async fn fetch_template(product: &ProductInfo, path: &str) -> Result<()> {
    let fetcher = TemplateFetcher::from_env(product)?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Fetching template from {}...", fetcher.repo_url()));

    match fetcher.fetch(path).await {
        Ok(0) => {
            spinner.stop("Template fetched");
            cliclack::log::warning(format!(
                "No files under {} in the template repository",
                TemplateFetcher::sparse_path(path)
            ))?;
            Ok(())
        }
        Ok(count) => {
            spinner.stop(format!("Materialized {} template file(s)", count));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Template fetch failed");
            Err(e.into())
        }
    }
}

fn print_next_steps(config: &ProjectConfig, path: &str) -> Result<()> {
    let steps = [
        format!(
            "Review the files under {}",
            TemplateFetcher::sparse_path(path)
        ),
        format!("{} run dev", config.package_manager.command()),
    ];

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
