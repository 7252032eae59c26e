use std::io;

use pokemon_tcg_check::providers::PokemonTcgProvider;
use pokemon_tcg_check::report;

/// Manual smoke check against the live API. Reports through the console
/// only and always exits 0; the outcome is for a human to read.
fn main() {
    env_logger::init();

    let provider = PokemonTcgProvider::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = report::run_smoke_check(&provider, &mut out) {
        log::error!("console write failed: {}", err);
    }
}
