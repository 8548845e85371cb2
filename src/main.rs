use std::io::{self, BufRead, Write};

use chess_rules::board::{GameState, GameStateBuilder, GameStatus, RulesConfig};

/// Writes log records to stderr; the level comes from `CHESS_LOG`.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("CHESS_LOG")
        .ok()
        .and_then(|v| v.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Split `setoption name <words> value <words>` into name and value.
fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }
    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some((name_parts.join(" "), value))
}

fn prompt(game: &GameState, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} to move> ", game.to_play())?;
    out.flush()
}

fn show(game: &GameState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", game.board())?;
    match game.status() {
        GameStatus::Ongoing => Ok(()),
        status => writeln!(out, "{}", capitalize(&status.to_string())),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

fn run(config: RulesConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut config = config;
    let mut game = GameStateBuilder::starting_position()
        .config(config.clone())
        .build();

    show(&game, &mut stdout)?;
    prompt(&game, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            prompt(&game, &mut stdout)?;
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "new" => {
                game = GameStateBuilder::starting_position()
                    .config(config.clone())
                    .build();
                show(&game, &mut stdout)?;
            }
            "board" => show(&game, &mut stdout)?,
            "fen" => writeln!(stdout, "{}", game.to_fen())?,
            "moves" => {
                let moves: Vec<String> =
                    game.legal_moves_to_play().iter().map(|mv| mv.to_uci()).collect();
                writeln!(stdout, "{}", moves.join(" "))?;
            }
            "position" => {
                let loaded = match parts.get(1).copied() {
                    Some("startpos") => Ok(GameStateBuilder::starting_position()),
                    Some("fen") => GameState::from_fen(&parts[2..].join(" "))
                        .map(|g| GameStateBuilder::from_state(&g)),
                    _ => {
                        eprintln!("Usage: position startpos | position fen <fen>");
                        prompt(&game, &mut stdout)?;
                        continue;
                    }
                };
                match loaded {
                    Ok(builder) => {
                        game = builder.config(config.clone()).build();
                        show(&game, &mut stdout)?;
                    }
                    Err(err) => eprintln!("Invalid FEN: {err}"),
                }
            }
            "setoption" => match parse_setoption(&parts) {
                Some((name, value)) => {
                    if config.apply_option(&name, value.as_deref()) {
                        writeln!(stdout, "Option '{name}' takes effect on the next game")?;
                    }
                }
                None => eprintln!("Usage: setoption name <name> value <value>"),
            },
            text => {
                if game.is_game_over() {
                    eprintln!("Game is over; type 'new' to start again");
                } else {
                    match game.play(text) {
                        Ok(next) => {
                            game = next.conclude();
                            show(&game, &mut stdout)?;
                        }
                        Err(err) => eprintln!("Invalid move: {err}"),
                    }
                }
            }
        }
        prompt(&game, &mut stdout)?;
    }

    writeln!(stdout)?;
    Ok(())
}

fn main() {
    init_logging();
    let config = RulesConfig::from_env();
    log::info!("starting with {config:?}");

    if let Err(err) = run(config) {
        eprintln!("I/O error: {err}");
        std::process::exit(1);
    }
}
