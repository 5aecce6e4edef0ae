//! Table simulator: deals 2-4 seats, auto-arranges every deal with the
//! solver, and settles the round.

use clap::Parser;
use colored::Colorize;
use shisanshui::cards::deck::Deck;
use shisanshui::gameplay::lane::Lane;
use shisanshui::gameplay::showdown::Showdown;
use shisanshui::gameplay::solver::Solver;
use shisanshui::gameplay::submission::Submission;

#[derive(Parser)]
#[command(about = "deal, arrange, and settle rounds of Thirteen Water")]
struct Args {
    /// seats at the table
    #[arg(long, default_value_t = 4)]
    seats: usize,
    /// rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: usize,
}

fn main() -> anyhow::Result<()> {
    shisanshui::log();
    let args = Args::parse();
    anyhow::ensure!((2..=4).contains(&args.seats), "tables seat 2 to 4");
    for round in 0..args.rounds {
        log::info!("round {}", round);
        let mut deck = Deck::new();
        let submissions = (0..args.seats)
            .map(|seat| {
                let deal = deck.deal();
                let arrangement = Solver::from(deal).suggest().swap_remove(0);
                Submission::try_from((seat, deal, arrangement)).expect("solver covers the deal")
            })
            .collect::<Vec<Submission>>();
        for submission in &submissions {
            println!("{}", submission);
            for lane in Lane::all() {
                println!("  {:<7} {}", lane.to_string(), submission.strength(lane));
            }
        }
        for settlement in Showdown::from(submissions).settle() {
            let line = settlement.to_string();
            match settlement.water() {
                w if w > 0 => println!("{}", line.green()),
                w if w < 0 => println!("{}", line.red()),
                _ => println!("{}", line),
            }
        }
    }
    Ok(())
}
