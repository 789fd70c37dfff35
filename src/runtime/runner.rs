use crate::app::StorefrontApp;
use crate::runtime::key_bindings::KeyBindings;
use crate::terminal::{Terminal, TerminalEvent};
use std::io;
use std::time::{Duration, Instant};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(120);

pub struct Runtime {
    app: StorefrontApp,
    terminal: Terminal,
    key_bindings: KeyBindings,
    poll_interval: Duration,
}

impl Runtime {
    pub fn new(app: StorefrontApp, terminal: Terminal) -> Self {
        Self {
            app,
            terminal,
            key_bindings: KeyBindings::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.app.should_exit() {
                if self.app.tick(Instant::now()) {
                    self.render()?;
                }

                let timeout = self.app.poll_timeout(Instant::now(), self.poll_interval);
                let event = self.terminal.poll_event(timeout)?;
                self.dispatch(event)?;
            }

            Ok(())
        })();

        self.app.dispose();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    pub fn into_app(self) -> StorefrontApp {
        self.app
    }

    fn dispatch(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                self.render()
            }
            TerminalEvent::Key(key) => {
                let command = self.key_bindings.resolve(key);
                tracing::trace!(?command, "key resolved");
                if self.app.handle(command, Instant::now()) {
                    self.render()?;
                }
                Ok(())
            }
            TerminalEvent::Tick => Ok(()),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.app.draw();
        self.terminal.render(&frame)
    }
}
