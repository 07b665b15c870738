//! One playthrough of a level: the per-frame simulation step.
use crate::core::fog::FogState;
use crate::core::maze::{TileGrid, TileKind};
use crate::core::player::{Direction, Player};

/// Receives the "level completed" side effect of a session.
pub trait LevelUnlock {
    fn unlock(&mut self, completed_level: u32);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Completed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The exit was reached; the caller should leave the level.
    Completed,
}

pub struct LevelSession {
    level: u32,
    grid: TileGrid,
    fog: FogState,
    player: Player,
    sign_shown: bool,
    state: SessionState,
}

impl LevelSession {
    /// Starts a session with the area around `player` already revealed.
    pub fn new(level: u32, grid: TileGrid, player: Player) -> Self {
        let (rows, cols) = grid.extent();
        let mut session = Self {
            level,
            grid,
            fog: FogState::new(rows, cols),
            player,
            sign_shown: false,
            state: SessionState::Playing,
        };
        session.reveal_around_player();
        session
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn fog(&self) -> &FogState {
        &self.fog
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the sign hint is up. Stays set for the rest of the session.
    pub fn sign_shown(&self) -> bool {
        self.sign_shown
    }

    pub fn apply_intent(&mut self, dir: Direction, pressed: bool) {
        self.player.apply_intent(dir, pressed);
    }

    /// Releases every movement key, e.g. when the window loses focus.
    pub fn clear_intent(&mut self) {
        self.player.clear_intent();
    }

    /// Advances the level by `dt` seconds. Once the exit has been reached the
    /// session is finished and further ticks do nothing.
    pub fn tick(&mut self, dt: f32, progress: &mut impl LevelUnlock) -> TickOutcome {
        if self.state == SessionState::Completed {
            return TickOutcome::Completed;
        }

        self.player.update(dt, &self.grid);
        self.reveal_around_player();

        let (r, c) = self.player.cell();
        match self.grid.classify(r, c) {
            TileKind::Sign => {
                if !self.sign_shown {
                    log::debug!("sign read at ({}, {})", r, c);
                }
                self.sign_shown = true;
                TickOutcome::Continue
            }
            TileKind::Exit => {
                log::info!("level {} completed", self.level);
                progress.unlock(self.level);
                self.state = SessionState::Completed;
                TickOutcome::Completed
            }
            TileKind::Wall | TileKind::Floor => TickOutcome::Continue,
        }
    }

    fn reveal_around_player(&mut self) {
        let (r, c) = self.player.cell();
        self.fog.reveal_plus(r, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Unlocks(Vec<u32>);

    impl LevelUnlock for Unlocks {
        fn unlock(&mut self, completed_level: u32) {
            self.0.push(completed_level);
        }
    }

    const DT: f32 = 0.016;

    fn corridor() -> TileGrid {
        TileGrid::parse("WWWWWW\nW.S.EW\nWWWWWW\n")
    }

    #[test]
    fn start_area_is_revealed() {
        let session = LevelSession::new(1, corridor(), Player::at_cell(1, 1));
        let fog = session.fog();
        assert!(fog.is_revealed(1, 1));
        assert!(fog.is_revealed(0, 1));
        assert!(fog.is_revealed(2, 1));
        assert!(fog.is_revealed(1, 0));
        assert!(fog.is_revealed(1, 2));
        assert!(!fog.is_revealed(1, 3));
        assert_eq!(session.state(), SessionState::Playing);
    }

    #[test]
    fn idle_tick_changes_nothing() {
        let mut unlocks = Unlocks::default();
        let mut session = LevelSession::new(1, corridor(), Player::at_cell(1, 1));
        assert_eq!(session.tick(DT, &mut unlocks), TickOutcome::Continue);
        assert_eq!(session.fog().revealed_count(), 5);
        assert!(!session.sign_shown());
    }

    #[test]
    fn sign_stays_shown_after_leaving_it() {
        let mut unlocks = Unlocks::default();
        let mut session = LevelSession::new(3, corridor(), Player::at_cell(1, 1));
        session.apply_intent(Direction::Right, true);
        while session.player().cell() != (1, 2) {
            session.tick(DT, &mut unlocks);
        }
        assert!(session.sign_shown());
        while session.player().cell() == (1, 2) {
            session.tick(DT, &mut unlocks);
        }
        assert_eq!(session.player().cell(), (1, 3));
        assert!(session.sign_shown());
        assert!(unlocks.0.is_empty());
    }

    #[test]
    fn exit_unlocks_exactly_once() {
        let mut unlocks = Unlocks::default();
        let mut session = LevelSession::new(3, corridor(), Player::at_cell(1, 1));
        session.apply_intent(Direction::Right, true);
        let mut ticks = 0;
        while session.tick(DT, &mut unlocks) == TickOutcome::Continue {
            ticks += 1;
            assert!(ticks < 10_000, "never reached the exit");
        }
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.player().cell(), (1, 4));
        for _ in 0..20 {
            assert_eq!(session.tick(DT, &mut unlocks), TickOutcome::Completed);
        }
        assert_eq!(unlocks.0, vec![3]);
    }

    #[test]
    fn cleared_intent_stops_the_avatar() {
        let mut unlocks = Unlocks::default();
        let mut session = LevelSession::new(1, corridor(), Player::at_cell(1, 1));
        session.apply_intent(Direction::Right, true);
        session.tick(DT, &mut unlocks);
        let x = session.player().pos.x;
        assert!(x > 32.0);

        session.clear_intent();
        for _ in 0..10 {
            session.tick(DT, &mut unlocks);
        }
        assert_eq!(session.player().pos.x, x);
    }

    #[test]
    fn exit_cell_is_revealed_when_reached() {
        let mut unlocks = Unlocks::default();
        let mut session = LevelSession::new(1, corridor(), Player::at_cell(1, 1));
        session.apply_intent(Direction::Right, true);
        while session.tick(DT, &mut unlocks) == TickOutcome::Continue {}
        assert!(session.fog().is_revealed(1, 4));
        assert!(session.fog().is_revealed(1, 5));
    }
}
