use catalog::{Catalog, Population};
use std::path::Path;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let data_dir = Path::new("data");

    for population in Population::ALL {
        println!("Loading {} catalog...\n", population);

        let start = Instant::now();
        let catalog = Catalog::load_from_files(data_dir, population)
            .expect("Failed to load catalog");
        let elapsed = start.elapsed();

        let (min_age, max_age) = catalog.age_bounds().unwrap_or_default();

        println!("=== {} ===", population);
        println!("Time taken: {:?}", elapsed);
        println!("Players: {}", catalog.len());
        println!("Leagues: {}", catalog.leagues().join(", "));
        println!("Ages: {}-{}\n", min_age, max_age);
    }
}
