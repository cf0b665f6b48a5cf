use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use jarvis_chat_engine::to_email_text;
use jarvis_chat_session::{
    BackendError, ChatBackend, ChatReply, ChatSession, HttpBackend, SessionState,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    io::{Stdout, stdout},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{clipboard, transcript};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Outcome = Result<ChatReply, BackendError>;

pub struct App {
    session: ChatSession<HttpBackend>,
    input: String,
    status: String,
    /// Lines scrolled up from the bottom of the transcript.
    scroll_back: u16,
    replies_tx: Sender<Outcome>,
    replies_rx: Receiver<Outcome>,
    should_quit: bool,
}

impl App {
    pub fn new(session: ChatSession<HttpBackend>) -> Self {
        let (replies_tx, replies_rx) = mpsc::channel();
        Self {
            status: format!("Session {}", session.session_id()),
            session,
            input: String::new(),
            scroll_back: 0,
            replies_tx,
            replies_rx,
            should_quit: false,
        }
    }

    fn submit(&mut self) {
        let Some(request) = self.session.begin_send(&self.input) else {
            if self.session.state() == SessionState::AwaitingReply {
                self.status = "Still waiting for the previous reply".to_string();
            }
            return;
        };
        self.input.clear();
        self.scroll_back = 0;
        self.status = "JARVIS is thinking...".to_string();

        let backend = self.session.backend().clone();
        let tx = self.replies_tx.clone();
        thread::spawn(move || {
            // The receiver only goes away when the app exits.
            let _ = tx.send(backend.send(&request));
        });
    }

    fn poll_replies(&mut self) {
        while let Ok(outcome) = self.replies_rx.try_recv() {
            self.session.complete(outcome);
            self.scroll_back = 0;
            self.status = format!("Session {}", self.session.session_id());
        }
    }

    fn clear(&mut self) {
        self.session.clear_chat();
        self.scroll_back = 0;
        self.status = "Chat cleared".to_string();
    }

    fn copy_as_email(&mut self) {
        let Some(message) = self.session.last_assistant() else {
            self.status = "Nothing to copy yet".to_string();
            return;
        };
        let text = to_email_text(&message.content);
        self.status = match clipboard::copy_text(&text) {
            Ok(method) => format!("Copied as email text ({method})"),
            Err(err) => {
                log::warn!("Copy failed: {err}");
                "Copy failed".to_string()
            }
        };
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('e') if ctrl => self.copy_as_email(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => self.scroll_back = self.scroll_back.saturating_add(1),
            KeyCode::Down => self.scroll_back = self.scroll_back.saturating_sub(1),
            KeyCode::PageUp => self.scroll_back = self.scroll_back.saturating_add(10),
            KeyCode::PageDown => self.scroll_back = self.scroll_back.saturating_sub(10),
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
    }
}

pub fn run(session: ChatSession<HttpBackend>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.poll_replies();
        terminal.draw(|f| ui(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

/// Rows the transcript occupies once wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines.iter().map(|l| l.width().max(1).div_ceil(width)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Transcript panel
    let mut lines: Vec<Line> = app
        .session
        .messages()
        .iter()
        .flat_map(transcript::message_lines)
        .collect();
    if app.session.state() == SessionState::AwaitingReply {
        lines.push(Line::from(Span::styled(
            "JARVIS is thinking...",
            Style::default().fg(Color::DarkGray),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from("Ask JARVIS about your campaigns"));
    }

    let inner = chunks[0].inner(ratatui::layout::Margin::new(1, 1));
    let overflow = wrapped_height(&lines, inner.width).saturating_sub(inner.height);
    app.scroll_back = app.scroll_back.min(overflow);
    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("JARVIS"))
        .wrap(Wrap { trim: false })
        .scroll((overflow - app.scroll_back, 0));
    f.render_widget(transcript, chunks[0]);

    // Input panel
    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().borders(Borders::ALL).title("Message"));
    f.render_widget(input, chunks[1]);

    // Status and help
    let help = Line::from(vec![
        Span::styled(app.status.clone(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Enter: Send | Ctrl+L: Clear | Ctrl+E: Copy as email | Esc: Quit"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}
