use std::time::Duration;

use actix::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, timeout};

use art_attack::config::SimulationConfig;
use art_attack::driver::*;
use art_attack::game::entities::{BotRegistration, TextStrategy, Wanderer};
use art_attack::game::grid::Grid;
use art_attack::game::systems::compute_winners;
use art_attack::game::{BotId, SimulationState};

fn wanderers(count: u64) -> Vec<BotRegistration> {
    (0..count)
        .map(|i| BotRegistration::new(format!("wanderer{}", i), Wanderer::seeded(i, 0.9)))
        .collect()
}

async fn spawn_driver(
    registrations: Vec<BotRegistration>,
) -> (Addr<SimulationDriver>, UnboundedReceiver<SimulationEvent>) {
    let mut rng = StdRng::seed_from_u64(7);
    let state = SimulationState::new(registrations, &mut rng).unwrap();
    let driver = SimulationDriver::new(state).start();
    let (recipient, rx) = EventForwarder::channel();
    driver.send(Subscribe(recipient)).await.unwrap();
    (driver, rx)
}

async fn next_event(rx: &mut UnboundedReceiver<SimulationEvent>) -> SimulationEvent {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for an event")
        .expect("event channel closed")
}

#[actix::test]
async fn test_run_ticks_until_max_rounds_then_scores_once() {
    let (driver, mut rx) = spawn_driver(wanderers(3)).await;
    let config = SimulationConfig::new(5, 200).unwrap();
    driver.send(StartSimulation { config }).await.unwrap();

    let mut turns = Vec::new();
    let (snapshot, result) = loop {
        match next_event(&mut rx).await {
            SimulationEvent::Turn(snapshot) => turns.push(snapshot.turn),
            SimulationEvent::Finished { snapshot, result } => break (snapshot, result),
            other => panic!("unexpected event {:?}", other),
        }
    };

    assert_eq!(turns, vec![2, 3, 4, 5]);
    assert_eq!(snapshot.turn, 5);
    assert_eq!(result, compute_winners(&snapshot.grid, &snapshot.bots));

    // Nothing fires after the terminal tick.
    sleep(Duration::from_millis(50)).await;
    assert!(rx.try_recv().is_err());

    let status = driver.send(GetStatus).await.unwrap();
    assert_eq!(status.phase, DriverPhase::Idle);
    assert_eq!(status.turn, 5);
    assert_eq!(status.result, Some(result));
}

#[actix::test]
async fn test_stop_cancels_without_scoring() {
    let (driver, mut rx) = spawn_driver(wanderers(2)).await;
    let config = SimulationConfig::new(1_000, 200).unwrap();
    driver.send(StartSimulation { config }).await.unwrap();

    match next_event(&mut rx).await {
        SimulationEvent::Turn(snapshot) => assert_eq!(snapshot.turn, 2),
        other => panic!("unexpected event {:?}", other),
    }
    driver.send(StopSimulation).await.unwrap();

    loop {
        match next_event(&mut rx).await {
            SimulationEvent::Turn(_) => continue,
            SimulationEvent::Stopped { .. } => break,
            other => panic!("unexpected event {:?}", other),
        }
    }

    sleep(Duration::from_millis(50)).await;
    assert!(rx.try_recv().is_err());

    let status = driver.send(GetStatus).await.unwrap();
    assert_eq!(status.phase, DriverPhase::Idle);
    assert_eq!(status.turn, 0);
    assert_eq!(status.result, None);
}

#[actix::test]
async fn test_stop_while_idle_is_quiet() {
    let (driver, mut rx) = spawn_driver(wanderers(2)).await;
    driver.send(StopSimulation).await.unwrap();
    driver.send(StopSimulation).await.unwrap();

    sleep(Duration::from_millis(20)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(driver.send(GetStatus).await.unwrap().turn, 0);
}

#[actix::test]
async fn test_restart_replaces_previous_schedule() {
    let (driver, mut rx) = spawn_driver(wanderers(2)).await;
    let config = SimulationConfig::new(3, 20).unwrap();
    driver.send(StartSimulation { config }).await.unwrap();
    driver.send(StartSimulation { config }).await.unwrap();
    let run_id = driver.send(GetStatus).await.unwrap().run_id;

    let mut turns = Vec::new();
    loop {
        match next_event(&mut rx).await {
            SimulationEvent::Turn(snapshot) => {
                assert_eq!(snapshot.run_id, run_id);
                turns.push(snapshot.turn);
            }
            SimulationEvent::Finished { snapshot, .. } => {
                assert_eq!(snapshot.run_id, run_id);
                break;
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
    assert_eq!(turns, vec![2, 3]);

    sleep(Duration::from_millis(150)).await;
    assert!(rx.try_recv().is_err());
}

#[actix::test]
async fn test_single_round_limit_still_terminates() {
    let (driver, mut rx) = spawn_driver(wanderers(2)).await;
    let config = SimulationConfig::new(1, 200).unwrap();
    driver.send(StartSimulation { config }).await.unwrap();

    assert!(matches!(next_event(&mut rx).await, SimulationEvent::Turn(_)));
    assert!(matches!(next_event(&mut rx).await, SimulationEvent::Finished { .. }));
}

#[actix::test]
async fn test_misbehaving_bots_do_not_halt_the_run() {
    let registrations = vec![
        BotRegistration::new("mute", TextStrategy(|_: BotId, _: &Grid| String::new())),
        BotRegistration::new("noisy", TextStrategy(|_: BotId, _: &Grid| "garbage".to_string())),
        BotRegistration::new("lost", TextStrategy(|_: BotId, _: &Grid| "pd:north".to_string())),
    ];
    let (driver, mut rx) = spawn_driver(registrations).await;
    let initial = driver.send(GetSnapshot).await.unwrap();

    let config = SimulationConfig::new(4, 200).unwrap();
    driver.send(StartSimulation { config }).await.unwrap();

    let (snapshot, result) = loop {
        if let SimulationEvent::Finished { snapshot, result } = next_event(&mut rx).await {
            break (snapshot, result);
        }
    };

    assert_eq!(snapshot.grid, initial.grid);
    assert_eq!(snapshot.bots, initial.bots);
    // Each bot still owns its start cell.
    assert!(result.tie);
    assert_eq!(result.winners.len(), 3);
    assert!(result.scores.iter().all(|s| s.cells == 1));
}

#[actix::test]
async fn test_reset_reinitializes_arena() {
    let (driver, mut rx) = spawn_driver(wanderers(4)).await;
    let config = SimulationConfig::new(3, 200).unwrap();
    driver.send(StartSimulation { config }).await.unwrap();
    loop {
        if let SimulationEvent::Finished { .. } = next_event(&mut rx).await {
            break;
        }
    }

    driver.send(ResetArena).await.unwrap();
    let snapshot = match next_event(&mut rx).await {
        SimulationEvent::Reset(snapshot) => snapshot,
        other => panic!("unexpected event {:?}", other),
    };

    assert_eq!(snapshot.turn, 1);
    assert_eq!(snapshot.grid.size(), 12);
    assert_eq!(snapshot.grid.owned_cells().count(), 4);
    for bot in &snapshot.bots {
        assert_eq!(snapshot.grid.owner(bot.pos), Some(bot.id));
    }

    let status = driver.send(GetStatus).await.unwrap();
    assert_eq!(status.phase, DriverPhase::Idle);
    assert_eq!(status.result, None);
}
