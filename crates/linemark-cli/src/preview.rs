use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use linemark_config::PreviewSettings;
use linemark_engine::{IoError, convert, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use std::path::PathBuf;

/// Editor buffer paired with its rendered HTML.
///
/// Every edit re-runs a full conversion; there is no incremental update.
pub struct PreviewApp {
    path: Option<PathBuf>,
    settings: PreviewSettings,
    source: String,
    html: String,
    dirty: bool,
    status: String,
    should_quit: bool,
}

impl PreviewApp {
    pub fn new(path: Option<PathBuf>, source: String, settings: PreviewSettings) -> Self {
        let html = convert(&source);
        Self {
            path,
            settings,
            source,
            html,
            dirty: false,
            status: String::new(),
            should_quit: false,
        }
    }

    /// Opens `path`, starting from an empty buffer when the file does not exist yet.
    pub fn open(path: Option<PathBuf>, settings: PreviewSettings) -> Result<Self> {
        let source = match &path {
            Some(path) => match io::read_source(path) {
                Ok(source) => source,
                Err(IoError::NotFound(_)) => String::new(),
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to open {}", path.display()));
                }
            },
            None => String::new(),
        };
        Ok(Self::new(path, source, settings))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char(c) if !ctrl => self.edit(|source| source.push(c)),
            KeyCode::Enter => self.edit(|source| source.push('\n')),
            KeyCode::Backspace => self.edit(|source| {
                source.pop();
            }),
            _ => {}
        }
    }

    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        change(&mut self.source);
        self.html = convert(&self.source);
        self.dirty = true;
        self.status.clear();
    }

    fn save(&mut self) {
        let Some(path) = &self.path else {
            self.status = "No file to save to; pass a path or set draft_path".to_string();
            return;
        };

        if let Err(e) = io::write_file(path, &self.source) {
            log::warn!("failed to save {}: {e}", path.display());
            self.status = format!("Save failed: {e}");
            return;
        }
        log::info!("saved {}", path.display());
        self.dirty = false;
        self.status = format!("Saved {}", path.display());

        if self.settings.export_html {
            let target = path.with_extension("html");
            match io::convert_file(path, &target) {
                Ok(()) => self.status.push_str(&format!(" and {}", target.display())),
                Err(e) => {
                    log::warn!("failed to export {}: {e}", target.display());
                    self.status = format!("Saved, but html export failed: {e}");
                }
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn title(&self) -> String {
        let name = self
            .path
            .as_ref()
            .map_or_else(|| "untitled".to_string(), |p| p.display().to_string());
        if self.dirty {
            format!("Markdown: {name} *")
        } else {
            format!("Markdown: {name}")
        }
    }
}

pub fn run(path: Option<PathBuf>, settings: PreviewSettings) -> Result<()> {
    let mut app = PreviewApp::open(path, settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log::info!("preview started");

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("preview closed");

    if app.is_dirty() {
        eprintln!("Discarded unsaved changes");
    }

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut PreviewApp) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &PreviewApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(app.settings.source_width),
                Constraint::Percentage(100 - app.settings.source_width),
            ]
            .as_ref(),
        )
        .split(rows[0]);

    let source_lines: Vec<Line> = app
        .source()
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    let source = Paragraph::new(source_lines)
        .block(Block::default().borders(Borders::ALL).title(app.title()))
        .wrap(Wrap { trim: false });
    f.render_widget(source, panes[0]);

    let html = Paragraph::new(app.html().to_string())
        .block(Block::default().borders(Borders::ALL).title("HTML preview"))
        .wrap(Wrap { trim: false });
    f.render_widget(html, panes[1]);

    let footer = if app.status().is_empty() {
        Line::from(vec![Span::raw("Esc/Ctrl-Q: Quit | Ctrl-S: Save")])
    } else {
        Line::from(vec![Span::styled(
            app.status().to_string(),
            Style::default().fg(Color::Yellow),
        )])
    };
    f.render_widget(Paragraph::new(footer), rows[1]);
}
