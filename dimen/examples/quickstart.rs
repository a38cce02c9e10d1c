//! Minimal end-to-end example: convert lengths exactly and compute a velocity (length / time).

use dimen::literals::{km, m, s};
use dimen::{Centimetre, Decimetre, KilometrePerHour, Metre, Quantity};

fn main() {
    let d = km(1.25_f64);
    println!("{} = {}", d, d.to::<Metre>());

    let dm = Quantity::<Decimetre, i32>::new(2);
    let cm = dm.to::<Centimetre>();
    assert_eq!(cm.value(), 20);
    println!("{} = {}", dm, cm);

    let v = m(100.0_f64).per(s(20.0_f64));
    println!("{} ({}) = {}", v, v.dimension(), v.to::<KilometrePerHour>());

    let mut laps = Quantity::<Metre, u32>::new(1000);
    laps.increment();
    println!("{} m past the last full 400 m lap (of {} m)", (laps % 400u32).value(), laps.value());
}
