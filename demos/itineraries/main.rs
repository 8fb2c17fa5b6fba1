//! Answers the queries of an itineraries file, one bottleneck per line.
//! I use it with `cargo run --example itineraries -- assets/itineraries.0.in`

use bottleneck_paths::{EngineSettings, QueryEngine, from_file};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("assets/itineraries.0.in"));

    let itineraries = match from_file(&path) {
        Ok(it) => it,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    };

    let engine = match QueryEngine::run(itineraries.graph, EngineSettings::default()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    for (answer, (u, v)) in engine
        .query_batch(&itineraries.queries)
        .into_iter()
        .zip(&itineraries.queries)
    {
        match answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("{} {}: {}", u, v, e),
        }
    }
}
