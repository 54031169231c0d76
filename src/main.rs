use core::error::Error;
use env_logger::Env;
use koi::{
    constants::KOI_CLUTCH_SIZE,
    random::{seed_urandom, WyRng},
    Breeder, Genome,
};
use log::info;
use std::env;

/// Breed a clutch from two founders and print every fish as json.
///
/// usage: koi [seed] [clutch size]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => seed_urandom()?,
    };
    let count = match args.next() {
        Some(s) => s.parse()?,
        None => KOI_CLUTCH_SIZE,
    };

    info!("seed {seed}");
    let mut rng = WyRng::seeded(seed);
    let mother = Genome::founder(&mut rng);
    let father = Genome::founder(&mut rng);
    println!("mother: {}", mother.to_string()?);
    println!("father: {}", father.to_string()?);

    let breeder = Breeder::default();
    for (idx, child) in breeder
        .clutch(&mother, &father, count, &mut rng)?
        .iter()
        .enumerate()
    {
        println!("child {idx}: {}", child.to_string()?);
    }

    Ok(())
}
