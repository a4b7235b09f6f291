use std::io::{self, Write};

use log::{debug, warn};

use crate::game::GameEvent;

/// Audio collaborator: plays a cue for each game event, fire-and-forget.
pub trait SoundPlayer {
    fn play(&mut self, event: GameEvent);
}

/// Rings the terminal bell, once for food and twice for a crash.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

const BELL: &[u8] = b"\x07";

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, event: GameEvent) {
        let rings = match event {
            GameEvent::Eat => 1,
            GameEvent::Wall => 2,
        };

        let result = (0..rings)
            .try_for_each(|_| self.out.write_all(BELL))
            .and_then(|()| self.out.flush());
        if let Err(error) = result {
            warn!("failed to ring bell for {event:?}: {error}");
        }
    }
}

/// Records events in the log without making any sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, event: GameEvent) {
        debug!("muted sound cue {event:?}");
    }
}

#[cfg(test)]
mod tests {
    use crate::game::GameEvent;

    use super::{SoundPlayer, TerminalBell};

    #[test]
    fn eat_rings_once_and_wall_twice() {
        let mut bell = TerminalBell::new(Vec::new());

        bell.play(GameEvent::Eat);
        assert_eq!(bell.out, b"\x07");

        bell.play(GameEvent::Wall);
        assert_eq!(bell.into_inner(), b"\x07\x07\x07");
    }
}
