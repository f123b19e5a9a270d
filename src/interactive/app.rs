//! TUI application state and logic

use crate::core::KeyboardState;
use crate::error::GameError;
use crate::game::{
    DispatchOutcome, GameMode, InputDispatcher, InputEvent, RevealTimeline, RevealTiming,
    RoundTracker,
};
use crate::output::share_text;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

const MAX_MESSAGES: usize = 5;
const FRAME: Duration = Duration::from_millis(40);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// The row currently flipping
#[derive(Debug, Clone)]
pub struct ActiveReveal {
    pub row: usize,
    pub timeline: RevealTimeline,
    pub started: Instant,
}

impl ActiveReveal {
    /// Tiles already showing their color at `now`
    #[must_use]
    pub fn shown(&self, now: Instant) -> usize {
        self.timeline.shown_by(now.saturating_duration_since(self.started))
    }
}

/// Application state
pub struct App<'a> {
    pub tracker: RoundTracker<'a>,
    pub dispatcher: InputDispatcher,
    pub timing: RevealTiming,
    pub reveal: Option<ActiveReveal>,
    pub messages: Vec<Message>,
    pub share_title: String,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(tracker: RoundTracker<'a>, timing: RevealTiming, share_title: &str) -> Self {
        let mut app = Self {
            tracker,
            dispatcher: InputDispatcher::new(),
            timing,
            reveal: None,
            messages: Vec::new(),
            share_title: share_title.to_string(),
            should_quit: false,
        };

        let resumed = app.tracker.session().guesses().len();
        if resumed > 0 {
            app.add_message(&format!("Resumed with {resumed} guesses"), MessageStyle::Info);
        } else {
            app.add_message("Type a word and press Enter", MessageStyle::Info);
        }
        if app.tracker.is_terminal() {
            app.announce_outcome();
        }
        app
    }

    /// Route a key press; returns without effect for key releases
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_random_round(),
                _ => {}
            }
            return;
        }

        let event = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(c) => InputEvent::LetterPressed(c),
            KeyCode::Backspace => InputEvent::BackspacePressed,
            KeyCode::Enter => InputEvent::EnterPressed,
            _ => return,
        };
        self.dispatch(event, now);
    }

    pub fn dispatch(&mut self, event: InputEvent, now: Instant) {
        let row = self.tracker.current_row();
        match self.dispatcher.dispatch(&mut self.tracker, event) {
            Ok(DispatchOutcome::Submitted(result)) => {
                let timeline = RevealTimeline::for_guess(&result.guess, &result.feedback, &self.timing);
                debug!(row, settle_ms = timeline.settle_at().as_millis(), "Reveal started");
                self.dispatcher.begin_reveal();
                self.reveal = Some(ActiveReveal {
                    row,
                    timeline,
                    started: now,
                });
                self.tick(now);
            }
            Ok(DispatchOutcome::Buffered | DispatchOutcome::Ignored) => {}
            Err(GameError::GameAlreadyOver) => {
                self.add_message("The round is over. Esc to quit", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Advance the reveal clock; lifts input suppression once settled
    pub fn tick(&mut self, now: Instant) {
        let Some(reveal) = &self.reveal else {
            return;
        };
        if !reveal
            .timeline
            .is_settled(now.saturating_duration_since(reveal.started))
        {
            return;
        }

        self.reveal = None;
        self.dispatcher.end_reveal();
        if self.tracker.is_terminal() {
            self.announce_outcome();
        }
    }

    fn announce_outcome(&mut self) {
        let Some(outcome) = self.tracker.outcome() else {
            return;
        };
        let style = if outcome.won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&outcome.to_string(), style);
        if matches!(self.tracker.session().mode(), GameMode::Random) {
            self.add_message("Ctrl-N for a new word, Esc to quit", MessageStyle::Info);
        }
    }

    fn new_random_round(&mut self) {
        if !matches!(self.tracker.session().mode(), GameMode::Random) || self.reveal.is_some() {
            return;
        }
        match RoundTracker::random(self.tracker.dictionary(), &mut rand::rng()) {
            Ok(tracker) => {
                self.tracker = tracker;
                self.dispatcher.reset();
                self.messages.clear();
                self.add_message("New word! Good luck", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Keyboard as the player should see it at `now`
    ///
    /// Keys from a row that is still flipping only light up once their tile
    /// has turned.
    #[must_use]
    pub fn visible_keyboard(&self, now: Instant) -> KeyboardState {
        let Some(reveal) = &self.reveal else {
            return self.tracker.keyboard().clone();
        };

        let mut keyboard = KeyboardState::new();
        for (guess, feedback) in self.tracker.history().take(reveal.row) {
            keyboard.apply(guess, feedback);
        }
        for step in reveal.timeline.steps().iter().take(reveal.shown(now)) {
            keyboard.update(step.letter as u8, step.class);
        }
        keyboard
    }

    /// Share text once the round is over and the last row has settled
    #[must_use]
    pub fn share(&self) -> Option<String> {
        if self.reveal.is_some() {
            return None;
        }
        let outcome = self.tracker.outcome()?;
        Some(share_text(
            &self.share_title,
            &outcome,
            self.tracker.history().map(|(_, feedback)| feedback),
        ))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Poll so the reveal keeps animating without key presses
        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share())
}
