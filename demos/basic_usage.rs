// ============================================================================
// Basic Usage Example
// ============================================================================

use dtround::prelude::*;
use dtround::TimeDelta;

fn main() -> Result<(), RoundError> {
    // Render the engine's trace events (requires the `logging` feature).
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== dtround Example ===\n");

    let dt: Timestamp = "2048-04-16T08:32:02.065536".parse()?;
    println!("Input: {}\n", dt);

    // Snap to the quarter hour.
    println!("Quarter-hour grid:");
    let unit = TimeDelta::minutes(15);
    println!("  floor: {}", floor(dt, unit, None)?);
    println!("  ceil:  {}", ceil(dt, unit, None)?);
    println!("  round: {}", round(dt, unit, None)?);

    // Weeks measured from the 1st of the month.
    println!("\nWeek grid anchored at the 1st of the month:");
    let base = first_day_of_month(dt);
    println!("  base:  {}", base);
    let grid = Grid::new(TimeDelta::days(7))?.with_base(base);
    println!("  floor: {}", grid.floor(dt)?);
    println!("  ceil:  {}", grid.ceil(dt)?);

    // Offset-carrying values keep their offset.
    println!("\nZoned input:");
    let zoned: Timestamp = "2048-04-16T08:32:02+09:00".parse()?;
    println!("  input: {}", zoned);
    println!("  floor: {}", floor(zoned, TimeDelta::hours(1), None)?);

    // Usage errors surface as typed failures.
    println!("\nUsage errors:");
    let day: Timestamp = "2048-04-16".parse()?;
    match floor(zoned, TimeDelta::days(1), Some(day)) {
        Err(err) => println!("  mixing shapes: {}", err),
        Ok(_) => unreachable!(),
    }
    match floor(dt, TimeDelta::zero(), None) {
        Err(err) => println!("  zero unit:     {}", err),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
