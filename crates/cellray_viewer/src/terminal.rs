//! Terminal display sink and input handling

use std::{
    io::{self, stdout, BufWriter, Stdout, Write},
    time::Duration,
};

use cellray_renderer::{CellUpdate, DisplaySink};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Paints each cell as a space with a true-color background.
///
/// Owns the terminal for its lifetime: raw mode and the alternate screen are
/// restored on drop.
pub struct TerminalSink {
    buffer: BufWriter<Stdout>,
}

impl TerminalSink {
    pub fn new() -> io::Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        terminal::enable_raw_mode()?;

        Ok(Self {
            buffer: BufWriter::new(stdout),
        })
    }

    /// Terminal size in cells (columns, rows).
    pub fn size(&self) -> io::Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((cols as usize, rows as usize))
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_input(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                return Ok(Some(key_event));
            }
        }
        Ok(None)
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl DisplaySink for TerminalSink {
    fn put_cell(&mut self, update: CellUpdate) -> io::Result<()> {
        let color = update.color;
        queue!(
            self.buffer,
            MoveTo(to_u16(update.col), to_u16(update.row)),
            SetBackgroundColor(TermColor::Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            }),
            Print(' ')
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        queue!(self.buffer, ResetColor)?;
        self.buffer.flush()
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        let _ = queue!(self.buffer, ResetColor);
        let _ = self.buffer.flush();
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
    }
}

/// Key actions for the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    LookUp,
    LookDown,
    TurnLeft,
    TurnRight,
    Jump,
}

/// Parse keyboard input into actions
pub fn parse_key_event(event: KeyEvent) -> Action {
    if event.kind == KeyEventKind::Release {
        return Action::None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('w') => Action::MoveForward,
        KeyCode::Char('s') => Action::MoveBack,
        KeyCode::Char('a') => Action::StrafeLeft,
        KeyCode::Char('d') => Action::StrafeRight,
        KeyCode::Up => Action::LookUp,
        KeyCode::Down => Action::LookDown,
        KeyCode::Left => Action::TurnLeft,
        KeyCode::Right => Action::TurnRight,
        KeyCode::Char(' ') => Action::Jump,
        _ => Action::None,
    }
}
