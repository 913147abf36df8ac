use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::ModuleId;
use quiz_core::{Content, ContentError};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "Zuordnungen meistern";

#[derive(Parser)]
#[command(name = "app", about = "Lernpfad zu proportionalen und antiproportionalen Zuordnungen")]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    // Launching the UI is the default when no subcommand is given.
    #[command(flatten)]
    ui: UiArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop window
    Ui(UiArgs),
    /// Load and validate a content bundle and print what each module contains
    CheckContent(CheckArgs),
}

#[derive(Args, Clone)]
struct CheckArgs {
    #[command(flatten)]
    source: ContentArgs,

    /// Only list this module (tables, graphs, strategies, context)
    #[arg(long)]
    module: Option<String>,
}

#[derive(Args, Clone)]
struct ContentArgs {
    /// JSON content bundle to use instead of the bundled one
    #[arg(long, env = "ZUORDNUNG_CONTENT")]
    content: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct UiArgs {
    #[command(flatten)]
    source: ContentArgs,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

struct DesktopApp {
    content: Arc<Content>,
    title: String,
}

impl UiApp for DesktopApp {
    fn content(&self) -> Arc<Content> {
        Arc::clone(&self.content)
    }

    fn window_title(&self) -> String {
        self.title.clone()
    }
}

fn load_content(args: &ContentArgs) -> Result<Content, ContentError> {
    match &args.content {
        Some(path) => {
            info!(path = %path.display(), "loading content bundle");
            Content::from_path(path)
        }
        None => Content::bundled(),
    }
}

fn launch_ui(args: UiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = Arc::new(load_content(&args.source)?);
    info!(
        diagnostic_items = content.diagnostic_items().len(),
        final_problems = content.final_problem_count(),
        "content ready"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        content,
        title: args.title.clone(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn check_content(args: &CheckArgs) -> Result<(), quiz_core::Error> {
    let content = load_content(&args.source)?;
    let modules = match args.module.as_deref() {
        Some(raw) => vec![raw.parse::<ModuleId>()?],
        None => ModuleId::ALL.to_vec(),
    };

    println!("Diagnose: {} Fragen", content.diagnostic_items().len());
    for module in modules {
        let tasks = content.module_tasks(module);
        println!("{}: {} Aufgaben", module.title(), tasks.len());
        for task in &tasks {
            println!("  {:<24} {}", task.kind().as_str(), task.id());
        }
    }
    println!("Final-Challenge: {} Aufgaben", content.final_problem_count());
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        None => launch_ui(cli.ui),
        Some(Command::Ui(args)) => launch_ui(args),
        Some(Command::CheckContent(args)) => Ok(check_content(&args)?),
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
