use rand::Rng;

use crate::attack::{attack, fire};
use crate::board::Board;
use crate::common::{AttackOutcome, AttackReport, GameError, Result};
use crate::config::GameConfig;
use crate::console::{InputSource, OutputSink};
use crate::prompt::{intro, read_coordinate};
use crate::render::{render, Style, StyledText};

/// Position in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingPlayerMove,
    ResolvingPlayerAttack { row: usize, col: usize },
    AwaitingComputerMove,
    ResolvingComputerAttack { row: usize, col: usize },
    PlayerWon,
    ComputerWon,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::PlayerWon | TurnState::ComputerWon)
    }
}

/// Current status of a game, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Human-versus-computer game: both fleets and the player's view of the enemy.
///
/// The computer fires uniformly at random and keeps no record of its shots.
pub struct Game<R> {
    player: Board,
    enemy: Board,
    observation: Board,
    state: TurnState,
    turns: usize,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Start a game with both fleets placed at random.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        let player = Board::random(config, &mut rng)?;
        let enemy = Board::random(config, &mut rng)?;
        Self::from_boards(player, enemy, rng)
    }

    /// Start a game from prepared fleets.
    pub fn from_boards(player: Board, enemy: Board, rng: R) -> Result<Self> {
        if player.size() != enemy.size() {
            return Err(GameError::BoardSizeMismatch {
                target: enemy.size(),
                observed: player.size(),
            });
        }
        let observation = Board::new(enemy.size());
        Ok(Self {
            player,
            enemy,
            observation,
            state: TurnState::AwaitingPlayerMove,
            turns: 0,
            rng,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        match self.state {
            TurnState::PlayerWon => GameStatus::Won,
            TurnState::ComputerWon => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player
    }

    pub fn enemy_board(&self) -> &Board {
        &self.enemy
    }

    /// What the player has learned about the enemy fleet.
    pub fn observation(&self) -> &Board {
        &self.observation
    }

    /// Number of attacks the player has made.
    pub fn turns(&self) -> usize {
        self.turns
    }

    fn size(&self) -> usize {
        self.enemy.size()
    }

    /// Advance by exactly one transition. Terminal states are left unchanged.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<TurnState>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        let next = match self.state {
            TurnState::AwaitingPlayerMove => {
                output.emit(&StyledText::plain("\nYour grid:\n"))?;
                output.emit(&render(&self.player, true))?;
                output.emit(&StyledText::plain("\nEnemy grid:\n"))?;
                output.emit(&render(&self.observation, false))?;
                let (row, col) = read_coordinate(self.size(), input, output)?;
                TurnState::ResolvingPlayerAttack { row, col }
            }
            TurnState::ResolvingPlayerAttack { row, col } => {
                let report = attack(&mut self.enemy, &mut self.observation, row, col)?;
                self.turns += 1;
                announce(output, report)?;
                if report.all_ships_sunk {
                    output.emit(&StyledText::styled("You win!\n", Style::Ship))?;
                    TurnState::PlayerWon
                } else {
                    TurnState::AwaitingComputerMove
                }
            }
            TurnState::AwaitingComputerMove => {
                let size = self.size();
                let row = self.rng.random_range(0..size);
                let col = self.rng.random_range(0..size);
                output.emit(&StyledText::plain(format!(
                    "Enemy fires at ({}, {})\n",
                    row + 1,
                    col + 1
                )))?;
                TurnState::ResolvingComputerAttack { row, col }
            }
            TurnState::ResolvingComputerAttack { row, col } => {
                let report = fire(&mut self.player, row, col)?;
                announce(output, report)?;
                if report.all_ships_sunk {
                    output.emit(&StyledText::styled(
                        "The enemy has sunk all your ships. Game over!\n",
                        Style::Hit,
                    ))?;
                    TurnState::ComputerWon
                } else {
                    TurnState::AwaitingPlayerMove
                }
            }
            terminal @ (TurnState::PlayerWon | TurnState::ComputerWon) => terminal,
        };
        log::debug!("turn state {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(next)
    }

    /// Step until one fleet is gone.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<GameStatus>
    where
        I: InputSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        while !self.state.is_terminal() {
            self.step(input, output)?;
        }
        Ok(self.status())
    }
}

fn announce<O: OutputSink + ?Sized>(output: &mut O, report: AttackReport) -> Result<()> {
    let text = match report.outcome {
        AttackOutcome::Hit => StyledText::styled("Hit!\n", Style::Hit),
        AttackOutcome::Miss => StyledText::styled("Miss!\n", Style::Miss),
        AttackOutcome::AlreadyAttacked => StyledText::plain("Already attacked!\n"),
    };
    output.emit(&text)?;
    Ok(())
}

/// Run a full session the way the binary does: intro, then the turn loop.
pub fn play<R, I, O>(config: GameConfig, rng: R, input: &mut I, output: &mut O) -> Result<GameStatus>
where
    R: Rng,
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    let mut game = Game::new(config, rng)?;
    intro(config.size, input, output)?;
    game.run(input, output)
}
