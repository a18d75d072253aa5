//! Terminal front end for the quiz engine.
//!
//! Mirrors the single-screen flow: scoreboard on entry, one question at a
//! time with shuffled numbered answers, a final tally, the updated
//! scoreboard, and a "try again" prompt.

use std::io::{self, BufRead, Write};

use quiz_core::Clock;
use services::{QuizService, QuizSession};
use storage::Storage;

const BANK_TEXT: &str = include_str!("../assets/questions.txt");
const SCOREBOARD_PATH: &str = "scoreboard.txt";

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let storage = Storage::bundled(BANK_TEXT, SCOREBOARD_PATH);
    let service = QuizService::new(Clock::default_clock(), storage.bank, storage.scores);
    let mut rng = rand::rng();

    println!("Velkommen! Danish vocabulary quiz");
    println!("Answer with the option number, or type 'quit' to leave.");
    print_scoreboard(&service);

    let mut session = match service.start_session(&mut rng).await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Could not start the quiz: {e}");
            return;
        }
    };

    loop {
        while let Some((prompt, answers)) = current_view(&session) {
            println!();
            println!("{prompt}");
            for (i, answer) in answers.iter().enumerate() {
                println!("  {}) {answer}", i + 1);
            }

            let Some(choice) = read_choice(answers.len()) else {
                println!("Farvel!");
                return;
            };
            match service.submit_answer(&mut session, &answers[choice], &mut rng) {
                Ok(outcome) if outcome.correct => println!("Rigtigt!"),
                Ok(_) => println!("Forkert."),
                Err(e) => {
                    eprintln!("Error submitting answer: {e}");
                    return;
                }
            }
        }

        let tally = session.tally();
        println!();
        println!(
            "You answered {} out of {} questions correctly.",
            tally.correct(),
            tally.total()
        );
        print_scoreboard(&service);

        if !ask_try_again() {
            break;
        }
        if let Err(e) = service.restart(&mut session, &mut rng).await {
            eprintln!("Could not restart the quiz: {e}");
            return;
        }
    }

    println!("Farvel!");
}

/// Owned snapshot of the active question, so the session can be borrowed
/// mutably while the player answers.
fn current_view(session: &QuizSession) -> Option<(String, Vec<String>)> {
    session
        .current_question()
        .map(|q| (q.prompt().to_owned(), session.current_answers().to_vec()))
}

/// Read a 1-based option choice from stdin. `None` means quit or EOF.
fn read_choice(option_count: usize) -> Option<usize> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        let raw = input.trim();
        if raw.eq_ignore_ascii_case("quit") || raw.eq_ignore_ascii_case("q") {
            return None;
        }
        match raw.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Some(n - 1),
            _ => println!("Please enter a number between 1 and {option_count}."),
        }
    }
}

fn ask_try_again() -> bool {
    print!("Try again? (y/n) ");
    io::stdout().flush().ok();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => false,
        Ok(_) => {
            let raw = input.trim();
            raw.eq_ignore_ascii_case("y") || raw.eq_ignore_ascii_case("yes")
        }
    }
}

fn print_scoreboard(service: &QuizService) {
    match service.scoreboard() {
        Ok(entries) if entries.is_empty() => println!("No scores yet."),
        Ok(entries) => {
            println!();
            println!("=== SCOREBOARD ===");
            for entry in entries {
                println!("{}  {}  {}", entry.date(), entry.time(), entry.score());
            }
        }
        Err(e) => log::warn!("could not load the scoreboard: {e}"),
    }
}
