//! Spike Storm headless demo
//!
//! Plays one scripted session on the autopilot and prints the final frame
//! as JSON. Usage: `spike-storm [character] [seconds] [tuning.json]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use spike_storm::consts::SIM_DT;
    use spike_storm::sim::{Character, GameEvent, Playfield, Session, autopilot};
    use spike_storm::{Settings, Tuning};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let character = args
        .next()
        .map(|name| {
            Character::parse(&name).unwrap_or_else(|| {
                log::warn!("Unknown character '{}', playing as Fang", name);
                Character::Fang
            })
        })
        .unwrap_or(Character::Fang);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);
    let tuning_json = args.next().and_then(|path| match std::fs::read_to_string(&path) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            None
        }
    });

    let tuning = Tuning::load_or_default(tuning_json.as_deref());
    let mut session = Session::new(tuning, Settings::default(), Playfield::new(1280.0, 720.0), 2024);
    log::info!("Spike Storm (headless) starting...");
    session.start_session(character);

    let ticks = (seconds / SIM_DT).round() as u64;
    let mut snapshot = session.snapshot();
    let mut final_score = None;
    for i in 0..ticks {
        let input = autopilot(session.state());
        snapshot = session.advance(SIM_DT, &input);

        for event in session.drain_events() {
            match event {
                GameEvent::PlayerHit { hp_left } => {
                    log::info!("t={:.1}s hit, {} HP left", i as f32 * SIM_DT, hp_left)
                }
                GameEvent::AbilityTriggered { character } => {
                    log::info!("t={:.1}s {} used their ability", i as f32 * SIM_DT, character.as_str())
                }
                GameEvent::SessionEnded { score, .. } => final_score = Some(score),
                other => log::debug!("{:?}", other),
            }
        }

        if !session.is_running() {
            break;
        }
    }

    // Game over zeroes the live score, so prefer the one reported at the end
    println!(
        "Final score {} (best {}) after {} run(s) recorded",
        final_score.unwrap_or(snapshot.score),
        snapshot.high_score,
        session.high_scores().runs.len()
    );
    match snapshot.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `platform::web::wasm_start`, this is just to satisfy the compiler
}
