mod app;
mod card;
mod deck;
mod divine;
mod info;
mod tui;

use std::path::Path;
use std::process;

use app::App;
use card::Scope;
use deck::Deck;
use info::CardInfo;

fn main() {
    // Both card tables must load before any terminal state exists.
    let info = match CardInfo::load(Path::new("res")) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    // Parse optional seed from command-line arguments for reproducible readings.
    let seed: Option<u64> = std::env::args().nth(1).and_then(|s| s.parse().ok());

    let deck = match seed {
        Some(seed) => Deck::seeded(Scope::Major, seed),
        None => Deck::new(Scope::Major),
    };

    if let Err(e) = tui::run(App::new(info, deck)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
