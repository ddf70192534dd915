use crate::config::{Config, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::content::Content;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{BufferLogger, LogBuffer};
use crate::mail::SystemLauncher;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application with the given configuration and page
    /// content. Returns the result of the application execution.
    ///
    pub async fn start(config: Config, content: Content) -> Result<()> {
        let log_entries = LogBuffer::default();
        BufferLogger::init(Arc::clone(&log_entries), LevelFilter::Debug)?;

        info!("Starting application...");
        info!("👋 Hello! Welcome to the portfolio of {}.", content.name);
        let started = Instant::now();

        let store: Box<dyn PreferenceStore + Send> = match config.preferences_path() {
            Ok(path) => Box::new(FilePreferenceStore::new(path)),
            Err(e) => {
                warn!("Theme preference will not be saved: {}", e);
                Box::new(MemoryPreferenceStore::new())
            }
        };
        let state = State::new(
            content,
            &config,
            store,
            Box::new(SystemLauncher),
            log_entries,
            started,
        );
        info!("⚡ Page loaded in {}ms", started.elapsed().as_millis());

        let mut app = App {
            state: Arc::new(Mutex::new(state)),
        };
        app.start_ui().await?;

        app.state.lock().await.stop_timers();
        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;

        result
    }

    /// Draw and handle events until exit is requested. The terminal title
    /// follows the page title.
    ///
    async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        let mut title = String::new();
        loop {
            let mut state = self.state.lock().await;
            let page_title = state.get_page_title();
            if page_title != title {
                execute!(terminal.backend_mut(), SetTitle(&page_title))?;
                title = page_title;
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
