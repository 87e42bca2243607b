use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use gom_core::Category;
use gom_engine::{
    DailyRotation, EngineError, QuizGame, RandomSelection, SelectionPolicy, SessionId,
};

pub fn run(
    catalog_path: &Path,
    seed: Option<u64>,
    daily: bool,
    state: &Path,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog_path)?;
    if catalog.is_empty() {
        return Err("no characters available (the catalog is empty)".into());
    }

    let policy: Box<dyn SelectionPolicy + Send> = if daily {
        Box::new(DailyRotation::new(state))
    } else if let Some(seed) = seed {
        Box::new(RandomSelection::seeded(seed))
    } else {
        Box::new(RandomSelection::from_os_rng())
    };

    let mut game = QuizGame::new(catalog, policy);
    let session = SessionId::from("terminal");

    println!("  {} Genius or Mason?", "Starting".bold());
    if daily {
        println!("  Daily rotation, state in {}", state.display());
    }
    println!("  Answer with a number or a category name; 'stop' to leave.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    'round: loop {
        let prompt = game.begin(&session).map_err(|e| e.to_string())?;
        println!("{}", prompt.text);
        for (i, choice) in prompt.choices.iter().enumerate() {
            println!("  [{}] {}", i + 1, choice.label());
        }

        loop {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break 'round, // EOF
                Err(e) => return Err(e.to_string()),
                _ => {}
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if ["stop", "quit", "q"].iter().any(|w| input.eq_ignore_ascii_case(w)) {
                match game.stop(&session) {
                    Ok(text) => println!("{text}"),
                    Err(e) => println!("{}", e.to_string().yellow()),
                }
                break 'round;
            }

            // A bare number selects from the displayed choices.
            let key = match input.parse::<usize>() {
                Ok(n) if (1..=Category::ALL.len()).contains(&n) => Category::ALL[n - 1].key(),
                _ => input,
            };

            match game.answer(&session, key) {
                Ok(reply) => {
                    if reply.is_correct {
                        println!("{}", reply.text.green());
                    } else {
                        println!("{}", reply.text.red());
                    }
                    if !reply.explanation.is_empty() {
                        println!("{}", reply.explanation.italic());
                    }
                    println!();
                    break;
                }
                Err(e @ EngineError::UnknownCategory(_)) => {
                    // Challenge stays in play; let the player try again.
                    println!("{}", e.to_string().yellow());
                }
                Err(e) => return Err(e.to_string()),
            }
        }

        print!("Play again? [y/N] ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        if !line.trim().eq_ignore_ascii_case("y") {
            println!("Goodbye!");
            break;
        }
        println!();
    }

    Ok(())
}
