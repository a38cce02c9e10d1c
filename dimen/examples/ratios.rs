//! Exact unit ratios and run-time unit descriptors.

use dimen::{Hour, Kilometre, KilometrePerHour, Millimetre, Ratio, Second, Unit};

fn main() {
    assert_eq!(Ratio::MILLI * Ratio::KILO, Ratio::ONE);
    println!("km/h = {} m/s", KilometrePerHour::RATIO);

    let km = Kilometre::descriptor();
    let mm = Millimetre::descriptor();
    match km.conversion_factor(&mm) {
        Ok(factor) => println!("1 {} = {} {}", km, factor, mm),
        Err(err) => println!("{}", err),
    }

    if let Err(err) = Hour::descriptor().conversion_factor(&km) {
        println!("{}", err);
    }

    let rate = km.divide(&Second::descriptor());
    println!("{} has dimension {}", rate, rate.dimension());
}
