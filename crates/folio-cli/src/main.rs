//! Folio CLI - browse, filter and rank portfolio projects

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use folio_core::config::Config;
use folio_core::domain::project::{
    CategoryFilter, ProjectDirectory, ProjectRecord, ProjectStore, SortStrategy, StatusFilter,
};
use serde_json::json;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio project directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file to use instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show category and status filter options
    Filters,

    /// Load and validate a catalog file
    Validate {
        /// Path to a JSON catalog
        path: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List projects
    List {
        /// Category id, `featured`, or `all`
        #[arg(short, long)]
        category: Option<String>,
        /// Status (completed, in-development, planned) or `all`
        #[arg(short, long)]
        status: Option<String>,
        /// Ordering (featured, recent, alpha)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show project details
    Show { id: String },
    /// Show related projects
    Related {
        id: String,
        /// Maximum number of results (at least 1)
        #[arg(
            short,
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,
    },
    /// Show detail-page metadata
    Meta { id: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Warning: could not initialize logging: {}", err);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<folio_core::Error>() {
        Some(core_err) => {
            eprintln!("Error [{}]: {}", core_err.code(), core_err);
            if let Some(suggestion) = core_err.suggestion() {
                eprintln!("  Try: {}", suggestion);
            }
        }
        None => eprintln!("Error: {:#}", err),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Projects { action } => {
            let directory = open_directory(cli.catalog.as_deref())?;
            cmd_projects(&directory, action, cli.format, cli.quiet)
        }
        Commands::Filters => {
            let directory = open_directory(cli.catalog.as_deref())?;
            cmd_filters(&directory, cli.format)
        }
        Commands::Validate { path } => cmd_validate(&path, cli.format, cli.quiet),
        Commands::Config { action } => cmd_config(action, cli.quiet),
    }
}

fn open_directory(catalog: Option<&Path>) -> anyhow::Result<ProjectDirectory> {
    let config = Config::load()?;
    let directory = ProjectDirectory::from_config(&config, catalog)?;
    debug!(projects = directory.store().len(), "Opened project directory");
    Ok(directory)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// Command Implementations
// ============================================================================

fn cmd_projects(
    directory: &ProjectDirectory,
    action: ProjectAction,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match action {
        ProjectAction::List {
            category,
            status,
            sort,
        } => {
            let mut query = directory.default_query();
            if let Some(category) = category {
                query = query.with_category(CategoryFilter::from(category));
            }
            if let Some(status) = status {
                query = query.with_status(status.parse::<StatusFilter>()?);
            }
            if let Some(sort) = sort {
                query = query.with_sort(sort.parse::<SortStrategy>()?);
            }

            let listing = directory.list(&query);

            if format == OutputFormat::Json {
                return print_json(&json!({
                    "total": listing.total(),
                    "activeFilters": query.active_filter_labels(),
                    "projects": listing.projects,
                }));
            }

            if listing.is_empty() {
                if !quiet {
                    println!("No projects found.");
                    println!("Try adjusting your filters to see more results.");
                }
                return Ok(());
            }

            if !quiet {
                println!("{} (sorted by {})", listing.summary(), query.sort.label());
                let labels = query.active_filter_labels();
                if !labels.is_empty() {
                    println!("Active filters: {}", labels.join(", "));
                }
            }
            for project in &listing.projects {
                println!("  {}", list_line(project));
            }
        }

        ProjectAction::Show { id } => {
            let project = directory.get(&id)?;
            if format == OutputFormat::Json {
                let mut value = serde_json::to_value(project)?;
                value["accentPalette"] = serde_json::to_value(project.color_accent.palette())?;
                return print_json(&value);
            }
            print_project(project);
        }

        ProjectAction::Related { id, limit } => {
            // A named reference must exist; the ranking itself never fails
            directory.get(&id)?;
            let related = match limit {
                Some(limit) => directory.related_with_limit(&id, limit),
                None => directory.related(&id),
            };

            if format == OutputFormat::Json {
                return print_json(&related);
            }

            if related.is_empty() {
                if !quiet {
                    println!("No related projects for '{}'.", id);
                }
                return Ok(());
            }

            if !quiet {
                println!("Related to {}:", id);
            }
            for entry in &related {
                let shared = match entry.overlap_count {
                    1 => "1 shared technology".to_string(),
                    n => format!("{} shared technologies", n),
                };
                println!(
                    "  {:<22} score {:.3}  ({})",
                    entry.project.id, entry.score, shared
                );
            }
        }

        ProjectAction::Meta { id } => {
            if directory.find(&id).is_none() {
                warn!(project = %id, "Unknown project; returning not-found metadata");
            }
            let meta = directory.metadata(&id);
            if format == OutputFormat::Json {
                return print_json(&meta);
            }
            println!("Title: {}", meta.title);
            println!("Description: {}", meta.description);
            if let Some(keywords) = &meta.keywords {
                println!("Keywords: {}", keywords);
            }
            if let Some(url) = &meta.canonical_url {
                println!("Canonical: {}", url);
            }
            if let Some(image) = &meta.preview_image {
                println!("Preview image: {}", image);
            }
        }
    }
    Ok(())
}

fn list_line(project: &ProjectRecord) -> String {
    let mut markers = String::new();
    if project.featured {
        markers.push_str(" [featured]");
    }
    if project.spotlight {
        markers.push_str(" [spotlight]");
    }
    format!(
        "{:<22} {} ({}, {}){}",
        project.id,
        project.title,
        project.status.label(),
        project.year,
        markers
    )
}

fn print_project(project: &ProjectRecord) {
    println!("Project: {}", project.title);
    println!("  ID: {}", project.id);
    if !project.subtitle.is_empty() {
        println!("  Subtitle: {}", project.subtitle);
    }
    println!("  Status: {}", project.status.label());
    println!("  Year: {}", project.year);
    println!("  Category: {}", project.category);
    if !project.role.is_empty() {
        println!("  Role: {}", project.role);
    }
    println!(
        "  Accent: {} ({})",
        project.color_accent,
        project.color_accent.palette().primary
    );
    if !project.technologies.is_empty() {
        println!("  Technologies: {}", project.technologies.join(", "));
    }
    if !project.tags.is_empty() {
        println!("  Tags: {}", project.tags.join(", "));
    }
    if !project.description.is_empty() {
        println!("  Description: {}", project.description);
    }
    let links = [
        ("GitHub", &project.links.github),
        ("Live", &project.links.live),
        ("Docs", &project.links.documentation),
    ];
    for (label, link) in links {
        if let Some(url) = link {
            println!("  {}: {}", label, url);
        }
    }
    for stat in &project.stats {
        println!("  {}: {}", stat.label, stat.value);
    }
}

fn cmd_filters(directory: &ProjectDirectory, format: OutputFormat) -> anyhow::Result<()> {
    let categories = directory.category_options();
    let statuses = directory.status_options();
    let sorts: Vec<_> = SortStrategy::all()
        .into_iter()
        .map(|sort| json!({ "id": sort.as_str(), "label": sort.label() }))
        .collect();

    if format == OutputFormat::Json {
        return print_json(&json!({
            "categories": categories,
            "statuses": statuses,
            "sorts": sorts,
        }));
    }

    println!("Categories:");
    for option in &categories {
        let icon = option.icon.unwrap_or(" ");
        println!("  {} {:<12} {:<14} {}", icon, option.id, option.label, option.count);
    }
    println!("Statuses:");
    for option in &statuses {
        println!("  {:<16} {:<16} {}", option.id, option.label, option.count);
    }
    println!("Sort orders:");
    for sort in SortStrategy::all() {
        println!("  {:<16} {}", sort.as_str(), sort.label());
    }
    Ok(())
}

fn cmd_validate(path: &Path, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    let store = ProjectStore::load(path)?;

    if format == OutputFormat::Json {
        return print_json(&json!({
            "valid": true,
            "projects": store.len(),
            "categories": store.categories(),
        }));
    }

    if !quiet {
        println!("Catalog OK: {} projects", store.len());
        for category in store.categories() {
            println!("  {}: {}", category.id, category.count);
        }
    }
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.list()? {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "folio", "projects", "list", "--category", "web", "--status", "completed", "--sort",
            "alpha", "--format", "json",
        ])
        .unwrap();
        assert!(cli.format == OutputFormat::Json);
        match cli.command {
            Commands::Projects {
                action:
                    ProjectAction::List {
                        category,
                        status,
                        sort,
                    },
            } => {
                assert_eq!(category.as_deref(), Some("web"));
                assert_eq!(status.as_deref(), Some("completed"));
                assert_eq!(sort.as_deref(), Some("alpha"));
            }
            _ => panic!("expected projects list"),
        }
    }

    #[test]
    fn test_parse_related_limit_and_catalog() {
        let cli = Cli::try_parse_from([
            "folio", "--catalog", "/tmp/c.json", "projects", "related", "ai-ide", "-l", "2",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/c.json")));
        assert!(matches!(
            cli.command,
            Commands::Projects {
                action: ProjectAction::Related { limit: Some(2), .. }
            }
        ));
    }

    #[test]
    fn test_related_limit_must_be_positive() {
        let result =
            Cli::try_parse_from(["folio", "projects", "related", "ai-ide", "--limit", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_line_markers() {
        let directory = ProjectDirectory::new(ProjectStore::builtin().unwrap());
        let line = list_line(directory.get("ai-ide").unwrap());
        assert!(line.contains("In Development"));
        assert!(line.ends_with("[featured] [spotlight]"));
    }
}
