mod audio;
mod canvas;
mod clock;
mod director;
mod entity;
mod events;
mod field;
mod input;
mod player;
mod scene;
mod settings;
mod strings;
mod text;
mod timeline;

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use clock::{FrameClock, FPS};
use director::Director;
use input::{InputPump, Keys};
use settings::Settings;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut director = Director::new(Settings::load());
    let pump = InputPump::new(4);
    let mut clock = FrameClock::new(FPS);

    // Main loop: drain input, simulate every tick that has become due, then
    // render once per batch so slow frames catch up without drawing twice.
    // The key snapshot outlives the loop pass: most passes end with no tick
    // due, and key repeats absorbed there must still reach the next batch.
    let mut keys = Keys::default();
    loop {
        while let Some(key) = pump.try_next() {
            keys.absorb(&key);
            director.on_key(key);
        }

        let due = clock.ticks_due(Instant::now());
        for _ in 0..due {
            director.on_tick(&keys);
        }
        if due > 0 {
            keys = Keys::default();
            terminal.draw(|frame| director.render(frame))?;
        } else {
            thread::sleep(Duration::from_millis(1));
        }

        if director.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
