//! 候診室操作範例：登記、移除、求解、輸出 JSON

use triage::report::render_patients;
use triage::{logging, solve, WaitingRoom};

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("=== Waiting Room Example ===\n");

    let mut room = WaitingRoom::new();
    room.admit("Ahmed", "Cardiac Arrest", 90, 30)?;
    room.admit("Mostafa", "Severe Bleeding", 70, 20)?;
    room.admit("Yasmine", "Broken Bone", 40, 30)?;
    let walk_in = room.admit("Mazen", "Mild Fever", 15, 10)?.id;

    println!("Waiting Room (Current Patients):");
    println!("{}", render_patients(room.patients()));

    // 輕症病患離開
    let left = room.remove(walk_in)?;
    println!("Removed {}\n", left);

    let result = solve(room.patients(), 60, Some(1))?;
    println!("{}", result.to_json()?);

    Ok(())
}
