//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{sample_questions, shell_with};
//!
//! let generator = MockQuizGenerator::returning(sample_questions(3));
//! let mut app = shell_with(&generator, &MockViewLoader::new());
//! ```

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use campus_connect::adapters::{MockQuizGenerator, MockViewLoader};
use campus_connect::app::App;
use campus_connect::models::QuizQuestion;
use campus_connect::ui;
use ratatui::{backend::TestBackend, Terminal};

/// How long to wait for a background message before giving up.
pub const SETTLE_TIMEOUT: Duration = Duration::from_millis(250);

/// `count` distinct, well-formed questions.
pub fn sample_questions(count: usize) -> Vec<QuizQuestion> {
    (1..=count)
        .map(|n| {
            QuizQuestion::new(
                format!("Aptitude question {}", n),
                vec![
                    format!("{}", n),
                    format!("{}", n * 2),
                    format!("{}", n * 3),
                    format!("{}", n * 4),
                ],
                n % 4,
                format!("Explanation {}", n),
            )
        })
        .collect()
}

/// A shell sharing state with the given doubles.
pub fn shell_with(generator: &MockQuizGenerator, loader: &MockViewLoader) -> App {
    App::new(Arc::new(generator.clone()), Arc::new(loader.clone()))
}

/// Apply background messages until none arrive within [`SETTLE_TIMEOUT`].
pub async fn settle(app: &mut App) -> usize {
    let mut applied = 0;
    while app.process_next_message_within(SETTLE_TIMEOUT).await {
        applied += 1;
    }
    applied
}

/// Render one frame and return the buffer as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| ui::render(f, &app.view_state()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a thread-local subscriber writing here. Drop the guard to
    /// uninstall it.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
