use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_naval-combat"))
        .args(["--seed", "12345", "--show-boards"])
        .env("BATTLESHIP_LOG", "off")
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let last = stdout.trim().lines().last().expect("no output");
    let v: serde_json::Value = serde_json::from_str(last).expect("invalid json");
    let winner = v["winner"].as_str().expect("winner missing");
    assert!(winner == "player" || winner == "opponent");
    assert_eq!(v["scores"][winner], v["total_ships"]);
    assert_eq!(v["total_ships"], 9);
    assert!(stdout.contains("Opponent board"));
}

#[test]
fn sim_binary_rejects_bad_catalog() {
    let path = std::env::temp_dir().join("naval_combat_bad_catalog.json");
    std::fs::write(&path, r#"[{"name": "Huge", "length": 11, "quantity": 1}]"#).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_naval-combat"))
        .arg("--catalog")
        .arg(&path)
        .env("BATTLESHIP_LOG", "off")
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not fit"), "stderr: {}", stderr);
}

#[test]
fn sim_binary_writes_action_log() {
    let output = Command::new(env!("CARGO_BIN_EXE_naval-combat"))
        .args(["--seed", "42"])
        .env("BATTLESHIP_LOG", "info")
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INFO - You have placed all your ships."), "stderr: {}", stderr);
    assert!(stderr.contains("The opponent has placed 9 ships."));
    assert!(stderr.contains("The game has started!"));
    assert!(stderr.contains("You fired at "));
    assert!(stderr.contains("The opponent fired at "));
    assert!(stderr.contains("sank the "));
    assert!(stderr.contains("You won the game!") || stderr.contains("You lost the game."));
    assert!(!stderr.contains("DEBUG"));

    // the action log stays off stdout, which carries only the summary
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert_eq!(stdout.trim().lines().count(), 1);
}
