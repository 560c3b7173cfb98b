//! A horizontally paged view with a synchronized tab strip, in the terminal.
//!
//! Each file given on the command line becomes a page; its name becomes the
//! tab label.  Click a tab or use the arrow keys to page.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    pages::{demo_pages, TextPage},
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::container::PageContainer;
use crate::ui::{
    layout::{frame_to_rect, rect_to_frame, AppLayout},
    pager::PagerWidget,
    tab_strip::TabStripWidget,
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Paged text viewer with a tab strip")]
struct Cli {
    /// Files to show, one page each (demo pages when empty).
    files: Vec<PathBuf>,

    /// Tab strip height in rows (overrides the config file).
    #[arg(long)]
    tab_height: Option<u16>,

    /// Start with the tab strip folded away.
    #[arg(long)]
    folded: bool,

    /// Show each page's line count under its tab title.
    #[arg(long)]
    subtitles: bool,

    /// Animation tick in milliseconds.
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn load_pages(cli: &Cli) -> Result<Vec<TextPage>> {
    let mut pages = if cli.files.is_empty() {
        demo_pages()
    } else {
        cli.files
            .iter()
            .map(|path| TextPage::from_file(path))
            .collect::<Result<Vec<_>>>()?
    };
    if cli.subtitles {
        pages = pages
            .into_iter()
            .map(|page| {
                let label = page.line_count_label();
                page.with_subtitle(Some(label))
            })
            .collect();
    }
    Ok(pages)
}

// ───────────────────────────────────────── draw ─────────────

fn draw(frame: &mut ratatui::Frame, state: &mut AppState) {
    let screen = frame.area();
    let layout = AppLayout::from_area(screen);

    state.container.layout(rect_to_frame(layout.container_area));
    state.sync_scroll();

    let strip_area = frame_to_rect(state.container.tab_strip().bounds(), Rect::default(), screen);
    let pager_area = frame_to_rect(state.container.scroll().frame, Rect::default(), screen);
    state.strip_area = strip_area;

    frame.render_widget(
        TabStripWidget::new(state.container.tab_strip()).selected(state.container.selected()),
        strip_area,
    );
    frame.render_widget(
        PagerWidget::new(&state.container, state.scroll_anim.position()),
        pager_area,
    );

    let hint = state.config.status_bar_hint();
    let message = state.status_message.as_deref().unwrap_or(&hint);
    let status = Paragraph::new(Line::from(vec![
        Span::raw(format!(" {} ", state.page_indicator())),
        Span::raw(message.to_string()),
    ]))
    .style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(height) = cli.tab_height {
        config.set_tab_height(height);
    }
    if cli.folded {
        config.start_folded = true;
    }

    if cli.write_config {
        config.save()?;
        return Ok(());
    }

    // ── build the container ──────────────────────────────────
    let mut container = PageContainer::new(Vec::new());
    container.add_selection_listener(|page: usize| tracing::debug!(page, "selection changed"));
    let strip = container.tab_strip_mut();
    strip.set_height(config.tab_height as f64);
    strip.set_folded(config.start_folded);

    for page in load_pages(&cli)? {
        container.push_page(page);
    }
    let mut state = AppState::new(container, config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(cli.tick_ms.max(1)));

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize(_, _) => {}
            AppEvent::Tick => {
                if !handler::handle_tick(&mut state) {
                    // Nothing moved: skip the redraw.
                    continue;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
