use outcome_types::UnitOutcome;

fn main() {
    let outcome: UnitOutcome = UnitOutcome::success();
    let _ = outcome.value();
}
