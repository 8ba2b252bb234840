use odometer::{tabulate, ElementOdometer};
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sizes: BTreeSet<_> = ["S", "M", "L"].into_iter().collect();
    let colors: BTreeSet<_> = ["red", "blue"].into_iter().collect();
    let fits: BTreeSet<_> = ["slim", "regular"].into_iter().collect();

    let dimensions = [&sizes, &colors, &fits];
    println!("{}", tabulate(ElementOdometer::new(dimensions)?));

    let mut odometer = ElementOdometer::new(dimensions)?;
    while odometer.has_more() {
        let tuple = odometer.next_tuple()?;
        println!("{}", tuple.iter().map(|s| **s).collect::<Vec<_>>().join(" / "));
    }

    println!("{:?}", odometer);
    Ok(())
}
