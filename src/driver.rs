use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use tracing::debug;
use tracing::info;

use crate::config::Config;
use crate::events::Event;
use crate::frontend::Frontend;
use crate::frontend::Headless;
use crate::frontend::Terminal;
use crate::init::initialize;
use crate::recorder::Recorder;
use crate::world::World;

/// Advances a [`World`] at a fixed interval, showing every generation and optionally recording it.
pub struct Driver<F, W: Write = BufWriter<File>> {
    world: World,
    frontend: F,
    recorder: Option<Recorder<W>>,

    /// Time between generations
    interval: Duration,

    /// Stop after this many generations. `None` runs until the user quits.
    limit: Option<u64>,

    paused: bool,
}

impl<F: Frontend> Driver<F> {
    pub fn new(world: World, frontend: F, interval: Duration) -> Self {
        Self {
            world,
            frontend,
            recorder: None,
            interval,
            limit: None,
            paused: false,
        }
    }
}

impl<F: Frontend, W: Write> Driver<F, W> {
    pub fn with_recorder<V: Write>(self, recorder: Recorder<V>) -> Driver<F, V> {
        Driver {
            world: self.world,
            frontend: self.frontend,
            recorder: Some(recorder),
            interval: self.interval,
            limit: self.limit,
            paused: self.paused,
        }
    }

    pub fn limit(mut self, generations: u64) -> Self {
        self.limit = Some(generations);
        self
    }

    /// Run until the user quits or the generation limit is hit. Returns the world as it was on
    /// the last frame.
    pub fn run(mut self) -> anyhow::Result<World> {
        self.show()?;

        loop {
            if self.limit.is_some_and(|limit| self.world.generation() >= limit) {
                info!(generations = self.world.generation(), "Generation limit reached");
                break;
            }

            let t = Instant::now();

            match self.frontend.poll(self.interval)? {
                Some(Event::Exit) => break,
                Some(Event::TogglePause) => {
                    self.paused = !self.paused;
                    debug!(paused = self.paused, "Toggled pause");
                }
                None => {}
            }

            thread::sleep(self.interval.saturating_sub(t.elapsed()));

            if self.paused {
                continue;
            }

            self.world.advance();
            self.show()?;
        }

        if let Some(recorder) = self.recorder {
            recorder.finish()?;
        }

        Ok(self.world)
    }

    /// Present and record the current generation
    fn show(&mut self) -> anyhow::Result<()> {
        let generation = self.world.generation();

        self.frontend
            .present(self.world.grid(), generation)
            .with_context(|| format!("Failed to present generation {generation}"))?;

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.push(self.world.grid())?;
        }

        Ok(())
    }
}

/// Build the first generation from `config` and animate it until done
pub fn run(config: &Config) -> anyhow::Result<()> {
    let grid = initialize(config.mode, config.size, None).context("Failed to build grid")?;
    let world = World::new(grid);

    info!(
        size = config.size,
        mode = %config.mode,
        interval_ms = config.interval.as_millis() as u64,
        population = world.population(),
        "Starting simulation"
    );

    let recorder = config
        .mov_file
        .as_deref()
        .map(|path| Recorder::create(path, config.size, config.frames))
        .transpose()?;

    let world = if config.headless {
        let driver = Driver::new(world, Headless, config.interval).limit(config.frames as u64);
        finish(driver, recorder)?
    } else {
        let terminal = Terminal::enter(config.size).context("Failed to set up terminal")?;
        finish(Driver::new(world, terminal, config.interval), recorder)?
    };

    info!(
        generations = world.generation(),
        population = world.population(),
        "Simulation stopped"
    );

    Ok(())
}

fn finish<F: Frontend>(
    driver: Driver<F>,
    recorder: Option<Recorder<BufWriter<File>>>,
) -> anyhow::Result<World> {
    match recorder {
        Some(recorder) => driver.with_recorder(recorder).run(),
        None => driver.run(),
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::Driver;
    use crate::events::Event;
    use crate::frontend::Frontend;
    use crate::frontend::Headless;
    use crate::grid::Grid;
    use crate::init::Mode;
    use crate::init::initialize;
    use crate::pattern::Pattern;
    use crate::recorder::Recorder;
    use crate::world::World;

    const TICK: Duration = Duration::from_millis(1);

    /// Replays a fixed list of inputs, then quits
    struct Scripted {
        inputs: VecDeque<Option<Event>>,
        shown: Vec<u64>,
    }

    impl Scripted {
        fn new(inputs: impl IntoIterator<Item = Option<Event>>) -> Self {
            Self {
                inputs: inputs.into_iter().collect(),
                shown: Vec::new(),
            }
        }
    }

    impl Frontend for &mut Scripted {
        fn present(&mut self, _grid: &Grid, generation: u64) -> anyhow::Result<()> {
            self.shown.push(generation);
            Ok(())
        }

        fn poll(&mut self, _timeout: Duration) -> anyhow::Result<Option<Event>> {
            Ok(self.inputs.pop_front().unwrap_or(Some(Event::Exit)))
        }
    }

    fn blinker() -> World {
        World::new(initialize(Mode::Pattern(Pattern::Blinker), 9, None).unwrap())
    }

    #[test]
    fn stops_at_limit() -> anyhow::Result<()> {
        let start = blinker();
        let first = start.grid().clone();

        let world = Driver::new(start, Headless, TICK).limit(4).run()?;

        assert_eq!(world.generation(), 4);
        assert_eq!(world.grid(), &first);

        Ok(())
    }

    #[test]
    fn exit_stops_immediately() -> anyhow::Result<()> {
        let mut frontend = Scripted::new([None, None, Some(Event::Exit)]);

        let world = Driver::new(blinker(), &mut frontend, TICK).run()?;

        assert_eq!(world.generation(), 2);
        assert_eq!(frontend.shown, vec![0, 1, 2]);

        Ok(())
    }

    #[test]
    fn pause_holds_the_generation() -> anyhow::Result<()> {
        let mut frontend = Scripted::new([
            None,
            Some(Event::TogglePause),
            None,
            None,
            Some(Event::TogglePause),
        ]);

        let world = Driver::new(blinker(), &mut frontend, TICK).run()?;

        // one step before pausing, one on the unpausing tick
        assert_eq!(world.generation(), 2);
        assert_eq!(frontend.shown, vec![0, 1, 2]);

        Ok(())
    }

    #[test]
    fn records_every_shown_frame() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("blinker.gif");

        let recorder = Recorder::create(&path, 9, 50)?;
        let world = Driver::new(blinker(), Headless, TICK)
            .limit(3)
            .with_recorder(recorder)
            .run()?;

        assert_eq!(world.generation(), 3);
        assert!(std::fs::read(&path)?.starts_with(b"GIF89a"));

        Ok(())
    }
}
