use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, terminal,
};
use gridlife::{Command, Frontend, Grid, GridWindow, Pos};
use std::{
    io::{self, BufRead, Write},
    thread,
    time::{Duration, Instant},
};

enum Key {
    Exit,
    Next,
    Scrolled,
    Ignored,
}

/// Full-screen raw mode renderer with a scrollable viewport
pub struct ConsoleRender {
    tl: Pos,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: Pos::default(),
            report: String::new(),
        })
    }

    fn handle_key(&mut self, key: KeyEvent) -> Key {
        if key.kind != KeyEventKind::Press {
            return Key::Ignored;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Exit,
            KeyCode::Char('x' | 'X') | KeyCode::Esc => Key::Exit,
            // arrows to move the viewport
            KeyCode::Up => {
                self.tl.row = self.tl.row.saturating_sub(1);
                Key::Scrolled
            }
            KeyCode::Down => {
                self.tl.row += 1;
                Key::Scrolled
            }
            KeyCode::Left => {
                self.tl.column = self.tl.column.saturating_sub(1);
                Key::Scrolled
            }
            KeyCode::Right => {
                self.tl.column += 1;
                Key::Scrolled
            }
            _ => Key::Next,
        }
    }
}

impl Frontend for ConsoleRender {
    fn render(&mut self, grid: &Grid, generation: usize) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // keep the bottom line for the footer
        let view_rows = usize::from(rows.saturating_sub(1));
        self.tl.row = self.tl.row.min(grid.rows().saturating_sub(1));
        self.tl.column = self.tl.column.min(grid.columns().saturating_sub(1));
        let window = GridWindow::new(grid, self.tl, view_rows, usize::from(cols));

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for cell in window.iter() {
            queue!(stdout, cursor::MoveTo(cell.column as u16, cell.row as u16))?;
            stdout.write_all("█".as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        write!(stdout, "gen {} | {}", generation, self.report)?;

        stdout.flush()
    }

    fn wait(&mut self, interactive: bool, delay: Duration) -> io::Result<Command> {
        if interactive {
            loop {
                if let Event::Key(key) = event::read()? {
                    match self.handle_key(key) {
                        Key::Exit => return Ok(Command::Exit),
                        Key::Next => return Ok(Command::Continue),
                        Key::Scrolled | Key::Ignored => {}
                    }
                }
            }
        }

        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            // make sure an event is present for us to take
            if !event::poll(remaining)? {
                return Ok(Command::Continue);
            }
            if let Event::Key(key) = event::read()? {
                if let Key::Exit = self.handle_key(key) {
                    return Ok(Command::Exit);
                }
            }
        }
    }

    fn report(&mut self, report: &str) -> io::Result<()> {
        report.clone_into(&mut self.report);
        Ok(())
    }

    fn live_report(&self) -> bool {
        true
    }
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("unable to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(io::stdout(), cursor::Show) {
            log::error!("unable to show cursor: {}", err);
        }
    }
}

/// Clears the screen and prints the whole grid for every generation
pub struct PlainRender {
    stdin: io::Stdin,
}
impl PlainRender {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Frontend for PlainRender {
    fn render(&mut self, grid: &Grid, generation: usize) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        write!(stdout, "{}", GridWindow::full(grid))?;
        writeln!(stdout, "generation {}", generation)?;
        stdout.flush()
    }

    fn wait(&mut self, interactive: bool, delay: Duration) -> io::Result<Command> {
        thread::sleep(delay);
        if !interactive {
            return Ok(Command::Continue);
        }

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed, nobody left to step the simulation
            return Ok(Command::Exit);
        }
        Ok(match line.trim() {
            "x" | "X" => Command::Exit,
            _ => Command::Continue,
        })
    }

    fn report(&mut self, report: &str) -> io::Result<()> {
        println!("{}", report);
        Ok(())
    }
}
