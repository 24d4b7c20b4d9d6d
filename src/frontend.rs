use std::io;
use std::io::Stdout;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;

use crate::camera::Camera;
use crate::events::Event;
use crate::grid::Grid;
use crate::io::convert_event;

/// Somewhere to show generations and get input from
pub trait Frontend {
    /// Show `grid`, which is generation number `generation`
    fn present(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()>;

    /// Wait at most `timeout` for user input
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Event>>;
}

/// Shows nothing and never gets input
#[derive(Default)]
pub struct Headless;

impl Frontend for Headless {
    fn present(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()> {
        debug!(generation, population = grid.population(), "Generation");

        Ok(())
    }

    fn poll(&mut self, _timeout: Duration) -> anyhow::Result<Option<Event>> {
        Ok(None)
    }
}

/// Draws generations in braille in the alternate screen. The terminal is put back the way it was
/// when this is dropped.
pub struct Terminal {
    stdout: Stdout,
    cam: Camera,
}

impl Terminal {
    /// Take over the terminal to show an `n x n` grid
    pub fn enter(n: usize) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // From here on, dropping `term` undoes everything
        let mut term = Self {
            stdout: io::stdout(),
            cam: Camera::new(n, n),
        };
        crossterm::execute!(term.stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(term)
    }
}

impl Frontend for Terminal {
    fn present(&mut self, grid: &Grid, generation: u64) -> anyhow::Result<()> {
        self.cam.draw(grid);
        let s = self.cam.render();

        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        // Raw mode doesn't return the carriage on '\n'
        for line in s.lines() {
            queue!(self.stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(
            self.stdout,
            style::Print(format!(
                "generation {generation}  population {}  [space] pause  [q] quit",
                grid.population()
            )),
        )?;

        self.stdout.flush()?;

        Ok(())
    }

    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(convert_event(event::read()?))
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Nothing sensible to do if restoring fails
        let _ = crossterm::execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
