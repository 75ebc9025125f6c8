//! pagenav: build "On This Page" navigation panels for documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use pagenav::app_state::AppState;
use pagenav::config::Config;
use pagenav::formats::json::JsonHeadings;
use pagenav::formats::markdown::MarkdownDocument;
use pagenav::formats::HeadingSource;
use pagenav::render::HtmlLink;
use pagenav::{input, ui, HeaderTreeBuilder, NavError, NavRenderer, PageNav};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    /// HTML `<aside>` panel
    Html,
    /// Nested markdown list of links
    Markdown,
    /// Indented plain-text outline
    Text,
    /// Header tree as JSON
    Json,
    /// Interactive viewer
    Tui,
}

#[derive(Parser)]
#[command(name = "pagenav")]
#[command(about = "On-page navigation panels from document headings", long_about = None)]
struct Args {
    /// Markdown files or directories to build panels for
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Build the panel from a JSON heading dump instead of markdown documents
    #[arg(long, value_name = "FILE", conflicts_with = "paths")]
    headings: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Heading shown above the navigation list
    #[arg(long)]
    panel_title: Option<String>,

    /// Log tree building at debug level (`RUST_LOG` takes precedence)
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    configure_logging(args.verbose, args.format == OutputFormat::Tui);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn configure_logging(verbose: bool, tui: bool) {
    // Log lines would draw over the viewer.
    let level = if tui {
        "off"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), NavError> {
    let mut cfg = Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(title) = args.panel_title {
        cfg.panel_title = title;
    }

    let renderer = NavRenderer::from_config(&cfg);
    let builder = match cfg.root_level() {
        Some(level) => HeaderTreeBuilder::new().with_root(level),
        None => HeaderTreeBuilder::new(),
    };

    if let Some(path) = args.headings {
        let source = JsonHeadings::load(&path)?;
        return print_panel(source, builder, &renderer, &cfg, args.format);
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if args.format == OutputFormat::Tui {
        let mut app = AppState::new(documents, builder)?;
        return run_tui(&mut app, &renderer).map_err(NavError::from);
    }

    for path in &documents {
        let source = MarkdownDocument::load(path)?;
        print_panel(source, builder, &renderer, &cfg, args.format)?;
    }
    Ok(())
}

fn print_panel<S: HeadingSource>(
    source: S,
    builder: HeaderTreeBuilder,
    renderer: &NavRenderer,
    cfg: &Config,
    format: OutputFormat,
) -> Result<(), NavError> {
    let name = source.name().to_string();
    let mut nav = PageNav::new(source).with_builder(builder);
    nav.set_title(&name)?;

    let panel = match format {
        OutputFormat::Html => {
            let links = HtmlLink {
                class: cfg.link_class.clone(),
            };
            renderer.render_html(nav.headers(), &links)
        }
        OutputFormat::Markdown => renderer.render_markdown(nav.headers()),
        // A heading dump has no document text to view, so it gets the outline.
        OutputFormat::Text | OutputFormat::Tui => nav.render_text(renderer),
        OutputFormat::Json => renderer.render_json(nav.headers())?,
    };

    match panel {
        Some(panel) => print!("{panel}"),
        None => info!(document = %name, "no headings, no panel"),
    }
    Ok(())
}

fn run_tui(app: &mut AppState, renderer: &NavRenderer) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, renderer);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    renderer: &NavRenderer,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, renderer))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.prev_entry(),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Enter => app.jump_to_entry(),
                KeyCode::PageUp => app.scroll_by(-10),
                KeyCode::PageDown => app.scroll_by(10),
                KeyCode::Tab => app.next_file(),
                KeyCode::BackTab => app.prev_file(),
                _ => {}
            }
        }
    }
}
