use std::io::{self, Write};
use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::SessionRng;
use common::games::tictactoe::{SessionEvent, SessionObserver, TicTacToeSession};
use common::log;
use common::version::VERSION;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, sleep, sleep_until};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::config::Config;
use crate::render;
use crate::theme::ThemeSettings;

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

const BLINK_COUNT: u32 = 3;

/// Collects session notifications until the next redraw.
#[derive(Debug, Default)]
pub struct Notifications {
    messages: Vec<String>,
    game_over: bool,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Drains pending messages and whether a game finished since the last call.
    pub fn take(&mut self) -> (Vec<String>, bool) {
        (
            std::mem::take(&mut self.messages),
            std::mem::take(&mut self.game_over),
        )
    }
}

impl SessionObserver for Notifications {
    fn on_event(&mut self, event: &SessionEvent) {
        if matches!(event, SessionEvent::GameOver(_)) {
            self.game_over = true;
        }
        if let Some(message) = event.notification() {
            self.messages.push(message);
        }
    }
}

#[derive(Debug, PartialEq)]
enum Reply {
    Board,
    Lines(Vec<String>),
    Notice(String),
    Quit,
}

pub struct App {
    session: TicTacToeSession<Notifications>,
    theme: ThemeSettings,
    config: Config,
    config_manager: ClientConfigManager,
    config_path: PathBuf,
    ai_deadline: Option<Instant>,
}

impl App {
    pub fn new(
        config: Config,
        config_manager: ClientConfigManager,
        config_path: PathBuf,
        rng: SessionRng,
    ) -> Result<Self, String> {
        let session =
            TicTacToeSession::new(config.session.to_settings(), rng, Notifications::default())?;
        Ok(Self {
            session,
            theme: config.theme_settings(),
            config,
            config_manager,
            config_path,
            ai_deadline: None,
        })
    }

    pub async fn run(mut self) -> Result<(), String> {
        let mut out = io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.draw_intro(&mut out).map_err(terminal_error)?;
        self.draw_update(&mut out).await?;

        loop {
            self.schedule_ai_turn()?;

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.map_err(|e| format!("Failed to read input: {}", e))? else {
                        break;
                    };
                    if self.handle_line(&mut out, &line).await? == Reply::Quit {
                        break;
                    }
                }
                _ = wait_for_deadline(self.ai_deadline) => {
                    self.ai_deadline = None;
                    if self.session.game().is_ai_pending() {
                        self.session.complete_ai_turn()?;
                        self.draw_update(&mut out).await?;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    log!("Interrupted");
                    break;
                }
            }
        }

        log!(
            "Client exiting, scores {}",
            render::scores_text(self.session.scores())
        );
        Ok(())
    }

    /// Starts the AI's artificial delay when it is to move; drops the timer when a
    /// jump or settings change cancelled the pending move.
    fn schedule_ai_turn(&mut self) -> Result<(), String> {
        if !self.session.game().is_ai_pending() {
            self.ai_deadline = None;
        }
        if self.session.game().needs_ai_move() {
            self.session.begin_ai_turn()?;
            self.ai_deadline = Some(Instant::now() + self.session.settings().ai_delay);
        }
        Ok(())
    }

    async fn handle_line<W: Write>(&mut self, out: &mut W, line: &str) -> Result<Reply, String> {
        if line.trim().is_empty() {
            return Ok(Reply::Lines(Vec::new()));
        }
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                render::draw_error(out, &message).map_err(terminal_error)?;
                return Ok(Reply::Lines(Vec::new()));
            }
        };

        let reply = match self.execute(command) {
            Ok(reply) => reply,
            Err(message) => {
                log!("{:?} rejected: {}", command, message);
                render::draw_error(out, &message).map_err(terminal_error)?;
                return Ok(Reply::Lines(Vec::new()));
            }
        };

        match &reply {
            Reply::Board => self.draw_update(out).await?,
            Reply::Lines(lines) => render::draw_lines(out, lines).map_err(terminal_error)?,
            Reply::Notice(message) => {
                render::draw_notification(out, message, &self.theme).map_err(terminal_error)?
            }
            Reply::Quit => {}
        }
        Ok(reply)
    }

    fn execute(&mut self, command: Command) -> Result<Reply, String> {
        match command {
            Command::Place(index) => {
                self.session.place_mark(index)?;
            }
            Command::NewGame => self.session.new_game()?,
            Command::Jump(ply) => self.session.jump_to(ply)?,
            Command::Mode(mode) => self.session.set_mode(mode),
            Command::Difficulty(difficulty) => self.session.set_difficulty(difficulty),
            Command::PlayAs(mark) => self.session.set_human_mark(mark)?,
            Command::ResetScores => self.session.reset_scores(),
            Command::Theme(theme) => {
                self.theme.theme = theme;
                self.session
                    .observer_mut()
                    .push(format!("Theme set to {}", theme));
            }
            Command::Speed(speed) => {
                self.theme.animation_speed = speed;
                return Ok(Reply::Notice(format!("Animation speed set to {}", speed)));
            }
            Command::History => return Ok(Reply::Lines(render::history_lines(self.session.game()))),
            Command::Scores => {
                return Ok(Reply::Notice(render::scores_text(self.session.scores())));
            }
            Command::Save => {
                self.save_settings()?;
                return Ok(Reply::Notice(format!(
                    "Settings saved to {}",
                    self.config_path.display()
                )));
            }
            Command::Help => {
                return Ok(Reply::Lines(HELP_TEXT.lines().map(str::to_string).collect()));
            }
            Command::Quit => return Ok(Reply::Quit),
        }
        Ok(Reply::Board)
    }

    fn save_settings(&mut self) -> Result<(), String> {
        let mut config = self.config.clone();
        config.session.update_from_settings(self.session.settings());
        config.theme = self.theme.theme;
        config.animation_speed = self.theme.animation_speed;
        self.config_manager.set_config(&config)?;
        log!("Settings saved to {}", self.config_path.display());
        self.config = config;
        Ok(())
    }

    fn draw_intro<W: Write>(&self, out: &mut W) -> io::Result<()> {
        render::draw_lines(
            out,
            &[
                format!("Tic-Tac-Toe {}", VERSION),
                "Type a cell number 1-9 to play, 'help' for all commands.".to_string(),
            ],
        )
    }

    /// Board, status and any queued notifications; a finished game blinks its winning line.
    async fn draw_update<W: Write>(&mut self, out: &mut W) -> Result<(), String> {
        let (messages, game_over) = self.session.observer_mut().take();
        let game = self.session.game();

        writeln!(out).map_err(terminal_error)?;
        render::draw_board(out, game, &self.theme, true).map_err(terminal_error)?;
        if game_over && game.verdict().winning_line.is_some() {
            let half_step = self.theme.animation_duration() / (BLINK_COUNT * 2);
            for _ in 0..BLINK_COUNT {
                sleep(half_step).await;
                render::redraw_board(out, game, &self.theme, false).map_err(terminal_error)?;
                sleep(half_step).await;
                render::redraw_board(out, game, &self.theme, true).map_err(terminal_error)?;
            }
        }
        render::draw_status(out, game, &self.theme).map_err(terminal_error)?;
        for message in &messages {
            render::draw_notification(out, message, &self.theme).map_err(terminal_error)?;
        }
        Ok(())
    }
}

async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn terminal_error(error: io::Error) -> String {
    format!("Failed to write to terminal: {}", error)
}
