use std::path::Path;
use std::sync::Arc;

use nukigata::{Board, Config, Ledger, Location, PatternLibrary, SwapRequest, Synthesizer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_or_default(Path::new("nukigata.toml")).unwrap();
    let library = Arc::new(PatternLibrary::from_config(&config.library).unwrap());
    let synthesizer = Synthesizer::new(config.synthesis);

    let board = Board::from_digits(&[
        "001122",
        "001122",
        "330011",
        "330011",
        "223300",
        "223300",
    ]).unwrap();
    let mut ledger = Ledger::new(board, library);

    // both 2x2 blocks on rows 2 and 3
    synthesizer.swap(&mut ledger, SwapRequest::new(Location(0, 2), Location(4, 2)).size(2)).unwrap();
    // two cells sharing neither row nor column
    synthesizer.swap(&mut ledger, SwapRequest::new(Location(0, 0), Location(5, 1))).unwrap();

    assert_eq!(format!("{}", ledger.current()), "201122
001120
110033
110033
223300
223300
");

    println!("{}", ledger);
    println!("{} moves", ledger.turn());
}
