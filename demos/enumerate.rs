use odometer::{radix, tabulate, IndexOdometer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sizes = [2, 3, 2];
    println!("{}", tabulate(IndexOdometer::new(&sizes)?));

    let mut odometer = IndexOdometer::new(&sizes)?;
    while odometer.has_more() {
        let position = odometer.advance()?;
        let ordinal = radix::encode(&position, &sizes);
        println!("{position:?} -> {ordinal:?}");
    }

    println!("{:?}", odometer);
    Ok(())
}
