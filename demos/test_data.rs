use rand::{rngs::StdRng, SeedableRng};
use regex_gen::Pattern;

fn main() {
    // rows of a fake user table, reproducible through the seed
    let columns: Vec<Pattern> = [
        r"[A-Z][a-z]{2,9} [A-Z][a-z]{2,12}",
        r"[a-z]{3,8}[0-9]{0,3}@(example|test)\.(com|org|net)",
        r"\+1-[2-9][0-9]{2}-[0-9]{3}-[0-9]{4}",
        r"(19[5-9]|200)[0-9]-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])",
    ]
    .iter()
    .map(|p| p.parse().unwrap())
    .collect();

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        let row: Vec<String> = columns
            .iter()
            .map(|c| c.generate(&mut rng).unwrap())
            .collect();
        println!("{}", row.join(", "));
    }
}
