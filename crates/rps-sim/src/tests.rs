//! Integration tests for rps-sim.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rps_agent::Conversion;
use rps_core::{AgentId, Arena, Kind, SimConfig, SlotId, Tick, Vec2};

use crate::{
    BACKGROUND, Frame, FrameBuffer, HeadlessHost, Host, LoopState, NoopObserver, Population,
    SimBuilder, SimError, SimObserver, TickReport,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(group_size: u32, width: u32, height: u32) -> SimConfig {
    SimConfig {
        group_size,
        arena_width: width,
        arena_height: height,
        seed: Some(42),
        ..SimConfig::default()
    }
}

/// One sprite of each kind in a 600×600 arena: rock and scissors touching in
/// the top-left, paper in the far corner.
fn rock_next_to_scissors() -> Population {
    let mut pop = Population::create(&config(1, 600, 600)).unwrap();
    pop.agents.position[0] = Vec2::new(100.0, 100.0); // rock
    pop.agents.position[1] = Vec2::new(400.0, 370.0); // paper
    pop.agents.position[2] = Vec2::new(110.0, 100.0); // scissors
    pop
}

/// Turn every sprite into a rock.
fn all_rock(pop: &mut Population) {
    for kind in [Kind::Paper, Kind::Scissors] {
        let slots: Vec<SlotId> = pop.groups.occupants(kind).map(|(s, _)| s).collect();
        for slot in slots {
            let agent = pop.groups.transfer(slot, kind, Kind::Rock).unwrap();
            pop.agents.kind[agent.index()] = Kind::Rock;
        }
    }
}

/// Host that never has a surface.
#[derive(Default)]
struct NoSurfaceHost {
    locks: u32,
}

impl Host for NoSurfaceHost {
    type Surface = ();

    fn lock_surface(&mut self) -> Option<()> {
        self.locks += 1;
        None
    }

    fn draw(&mut self, _surface: &mut (), _frame: &Frame) {
        panic!("drew without a surface");
    }

    fn on_winner(&mut self, _winner: Kind) {}
}

#[derive(Debug, PartialEq)]
enum Event {
    TickStart(Tick),
    TickEnd(Tick),
    Frame(Tick),
    Winner(Kind),
    End(Option<Kind>),
}

#[derive(Default)]
struct Recorder(Vec<Event>);

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.push(Event::TickStart(tick));
    }
    fn on_tick_end(&mut self, report: &TickReport) {
        self.0.push(Event::TickEnd(report.tick));
    }
    fn on_frame(&mut self, frame: &Frame) {
        self.0.push(Event::Frame(frame.tick));
    }
    fn on_winner(&mut self, _tick: Tick, winner: Kind) {
        self.0.push(Event::Winner(winner));
    }
    fn on_sim_end(&mut self, _tick: Tick, winner: Option<Kind>) {
        self.0.push(Event::End(winner));
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use super::*;

    #[test]
    fn create_spawns_three_equal_groups() {
        let pop = Population::create(&SimConfig { seed: Some(1), ..SimConfig::default() }).unwrap();
        assert_eq!(pop.total(), 60);
        assert_eq!(pop.counts(), [20, 20, 20]);
        assert_eq!(pop.seed, 1);
        assert_eq!(pop.tick, Tick::ZERO);
        assert_eq!(pop.check_winner(), None);
        pop.check_invariants().unwrap();
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Population::create(&SimConfig { group_size: 0, ..SimConfig::default() });
        assert!(matches!(err, Err(SimError::Config(_))));

        let err = Population::create(&config(20, 30, 30));
        assert!(matches!(err, Err(SimError::Config(_))));
    }

    #[test]
    fn population_is_conserved_and_tables_stay_consistent() {
        let mut pop = Population::create(&SimConfig::default()).unwrap();
        for _ in 0..300 {
            let report = pop.tick().unwrap();
            assert_eq!(report.counts.iter().sum::<usize>(), 60);
            pop.check_invariants().unwrap();
        }
        assert_eq!(pop.tick, Tick(300));
    }

    #[test]
    fn sprites_stay_inside_the_walls() {
        let mut pop = Population::create(&config(5, 500, 700)).unwrap();
        let bounds = pop.arena.bounds(pop.agents.size);
        for _ in 0..500 {
            pop.tick().unwrap();
            for (i, &p) in pop.agents.position.iter().enumerate() {
                assert!(bounds.contains(p), "sprite {i} escaped to {p}");
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let cfg = config(10, 800, 900);
        let mut a = Population::create_seeded(&cfg, 9).unwrap();
        let mut b = Population::create_seeded(&cfg, 9).unwrap();
        for _ in 0..50 {
            let ra = a.tick().unwrap();
            let rb = b.tick().unwrap();
            assert_eq!(ra, rb);
        }
        assert_eq!(a.agents.position, b.agents.position);
        assert_eq!(a.agents.kind, b.agents.kind);
    }

    #[test]
    fn rock_eats_adjacent_scissors_into_the_same_slot() {
        let mut pop = rock_next_to_scissors();
        let report = pop.tick().unwrap();

        assert_eq!(report.tick, Tick::ZERO);
        assert_eq!(pop.tick, Tick(1));
        assert_eq!(pop.count(Kind::Rock), 2);
        assert_eq!(pop.count(Kind::Paper), 1);
        assert_eq!(pop.count(Kind::Scissors), 0);
        assert_eq!(
            report.conversions,
            vec![Conversion {
                predator: AgentId(0),
                prey:     AgentId(2),
                slot:     SlotId(2),
                from:     Kind::Scissors,
                to:       Kind::Rock,
            }]
        );
        assert_eq!(pop.groups.get(Kind::Rock, SlotId(2)), Some(AgentId(2)));
        assert_eq!(pop.groups.get(Kind::Scissors, SlotId(2)), None);
        assert_eq!(pop.agents.kind[2], Kind::Rock);
        assert_eq!(pop.agents.slot[2], SlotId(2));
    }

    #[test]
    fn winner_needs_the_whole_population() {
        let mut pop = rock_next_to_scissors();
        pop.tick().unwrap();
        assert_eq!(pop.check_winner(), None);

        all_rock(&mut pop);
        assert_eq!(pop.check_winner(), Some(Kind::Rock));
        let report = pop.tick().unwrap();
        assert_eq!(report.winner, Some(Kind::Rock));
        assert!(report.conversions.is_empty());
    }

    #[test]
    fn desynced_tables_are_reported() {
        let mut pop = rock_next_to_scissors();
        pop.agents.kind[1] = Kind::Scissors;
        assert!(matches!(pop.check_invariants(), Err(SimError::Invariant(_))));
    }

    #[test]
    fn frame_lists_every_sprite() {
        let pop = rock_next_to_scissors();
        let frame = pop.frame();
        assert_eq!(frame.sprites.len(), 3);
        assert_eq!(frame.sprites[1].kind, Kind::Paper);
        assert_eq!(frame.sprites[1].position, Vec2::new(400.0, 370.0));
        assert_eq!(frame.counts, [1, 1, 1]);
        assert_eq!(frame.total, 3);
        assert_eq!(frame.size, pop.agents.size);
    }
}

// ── Frames and score bars ─────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use super::*;

    fn frame_with(counts: [usize; 3]) -> Frame {
        Frame {
            tick:    Tick(3),
            arena:   Arena::new(1080, 1920),
            size:    89.0,
            sprites: Vec::new(),
            counts,
            total:   counts.iter().sum(),
        }
    }

    #[test]
    fn score_bars_split_the_width_by_count() {
        let bars = frame_with([30, 20, 10]).score_bars();
        assert_eq!(bars.map(|b| b.kind), Kind::ALL);
        assert_eq!((bars[0].left, bars[0].right), (0.0, 540.0));
        assert_eq!((bars[1].left, bars[1].right), (540.0, 900.0));
        assert_eq!((bars[2].left, bars[2].right), (900.0, 1080.0));
        for bar in bars {
            assert_eq!(bar.top, 1792.0);
            assert_eq!(bar.bottom, 1920.0);
        }
    }

    #[test]
    fn absent_kind_gets_an_empty_bar() {
        let bars = frame_with([0, 45, 15]).score_bars();
        assert_eq!(bars[0].width(), 0.0);
        assert_eq!(bars[1].left, 0.0);
        assert_eq!(bars[2].right, 1080.0);
    }

    #[test]
    fn colors() {
        let bars = frame_with([1, 1, 1]).score_bars();
        assert_eq!(bars[0].color.hex(), "#A6D0DD");
        assert_eq!(bars[1].color.hex(), "#FFD3B0");
        assert_eq!(bars[2].color.hex(), "#FF6969");
        assert_eq!(BACKGROUND.hex(), "#FFFDF2");
    }

    #[test]
    fn frame_buffer_shares_the_latest_frame() {
        let buffer = FrameBuffer::new();
        let reader = buffer.clone();
        assert!(reader.latest().is_none());

        buffer.publish(Arc::new(frame_with([1, 2, 3])));
        buffer.publish(Arc::new(frame_with([2, 2, 2])));
        assert_eq!(reader.latest().unwrap().counts, [2, 2, 2]);
    }
}

// ── Loop ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use super::*;

    #[test]
    fn step_ticks_publishes_and_draws() {
        let mut sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
            .seed(3)
            .build()
            .unwrap();
        assert_eq!(sim.state(), LoopState::Created);

        let mut rec = Recorder::default();
        assert_eq!(sim.step(&mut rec).unwrap(), LoopState::Running);
        assert_eq!(sim.population.tick, Tick(1));
        assert_eq!(sim.host.frames_drawn, 1);
        assert_eq!(sim.frames().latest().unwrap().tick, Tick(1));
        assert_eq!(
            rec.0,
            vec![Event::TickStart(Tick(0)), Event::TickEnd(Tick(0)), Event::Frame(Tick(1))]
        );
    }

    #[test]
    fn max_ticks_stops_without_winner() {
        let mut sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
            .seed(5)
            .max_ticks(5)
            .build()
            .unwrap();
        let winner = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(winner, None);
        assert_eq!(sim.population.tick, Tick(5));
        assert_eq!(sim.host.frames_drawn, 5);
        assert_eq!(sim.state(), LoopState::Stopped { winner: None });
    }

    #[test]
    fn missing_surface_skips_without_mutating() {
        let mut sim = SimBuilder::new(SimConfig::default(), NoSurfaceHost::default())
            .seed(8)
            .build()
            .unwrap();
        let before = sim.population.agents.position.clone();
        for _ in 0..10 {
            assert_eq!(sim.step(&mut NoopObserver).unwrap(), LoopState::Running);
        }
        assert_eq!(sim.host.locks, 10);
        assert_eq!(sim.skipped_frames(), 10);
        assert_eq!(sim.population.tick, Tick::ZERO);
        assert_eq!(sim.population.agents.position, before);
        assert!(sim.frames().latest().is_none());
    }

    #[test]
    fn external_stop_is_terminal() {
        let mut sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
            .seed(11)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.step(&mut rec).unwrap();
        sim.stop();

        let stopped = LoopState::Stopped { winner: None };
        assert_eq!(sim.step(&mut rec).unwrap(), stopped);
        assert_eq!(sim.step(&mut rec).unwrap(), stopped);
        assert_eq!(sim.population.tick, Tick(1));
        assert_eq!(rec.0.last(), Some(&Event::End(None)));
        assert_eq!(rec.0.iter().filter(|e| matches!(e, Event::End(_))).count(), 1);
    }

    #[test]
    fn existing_winner_stops_before_ticking() {
        let mut pop = rock_next_to_scissors();
        all_rock(&mut pop);
        let mut sim = SimBuilder::new(config(1, 600, 600), HeadlessHost::default())
            .population(pop)
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        let state = sim.step(&mut rec).unwrap();
        assert_eq!(state, LoopState::Stopped { winner: Some(Kind::Rock) });
        assert_eq!(sim.host.winner, Some(Kind::Rock));
        assert_eq!(sim.host.frames_drawn, 0);
        assert_eq!(sim.population.tick, Tick::ZERO);
        assert_eq!(rec.0, vec![Event::Winner(Kind::Rock), Event::End(Some(Kind::Rock))]);
    }

    #[test]
    fn winner_takes_precedence_over_tick_limit() {
        let mut pop = rock_next_to_scissors();
        all_rock(&mut pop);
        let mut sim = SimBuilder::new(config(1, 600, 600), HeadlessHost::default())
            .population(pop)
            .max_ticks(0)
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        let state = sim.step(&mut rec).unwrap();
        assert_eq!(state, LoopState::Stopped { winner: Some(Kind::Rock) });
        assert_eq!(sim.host.winner, Some(Kind::Rock));
        assert_eq!(rec.0, vec![Event::Winner(Kind::Rock), Event::End(Some(Kind::Rock))]);
    }

    #[test]
    fn failed_tick_stops_the_loop_and_ends_the_run() {
        // Sprite 1 (paper) is also filed in the rock table at the slot the
        // scissors will convert into, so the rock's bite cannot complete.
        let mut pop = rock_next_to_scissors();
        pop.groups.place(Kind::Rock, SlotId(2), AgentId(1)).unwrap();
        let mut sim = SimBuilder::new(config(1, 600, 600), HeadlessHost::default())
            .population(pop)
            .build()
            .unwrap();
        let running = sim.running_flag();

        let mut rec = Recorder::default();
        let err = sim.step(&mut rec);
        assert!(matches!(err, Err(SimError::Invariant(_))));
        assert_eq!(sim.state(), LoopState::Stopped { winner: None });
        assert!(!running.load(std::sync::atomic::Ordering::Acquire));
        assert_eq!(sim.host.frames_drawn, 0);
        assert_eq!(rec.0, vec![Event::TickStart(Tick::ZERO), Event::End(None)]);

        // Terminal: later steps neither fail nor report again.
        assert_eq!(sim.step(&mut rec).unwrap(), LoopState::Stopped { winner: None });
        assert_eq!(rec.0.len(), 2);
    }

    #[test]
    fn supplied_population_brings_its_own_limits() {
        let cfg = SimConfig { max_ticks: Some(2), seed: Some(4), ..SimConfig::default() };
        let pop = Population::create(&cfg).unwrap();
        let mut sim = SimBuilder::new(config(1, 600, 600), HeadlessHost::default())
            .population(pop)
            .build()
            .unwrap();

        assert_eq!(sim.run(&mut NoopObserver).unwrap(), None);
        assert_eq!(sim.population.tick, Tick(2));
        assert_eq!(sim.population.total(), 60);
    }

    #[test]
    fn single_sprite_groups_reach_a_winner() {
        let mut sim = SimBuilder::new(config(1, 600, 600), HeadlessHost::default())
            .population(rock_next_to_scissors())
            .max_ticks(200_000)
            .build()
            .unwrap();

        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.host.last_counts, [2, 1, 0]);

        // Scissors are gone, so paper can only gain.
        let winner = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(winner, Some(Kind::Paper));
        assert_eq!(sim.host.winner, Some(Kind::Paper));
        assert_eq!(sim.population.counts(), [0, 3, 0]);
    }

    #[test]
    fn small_crowded_arena_converges() {
        let mut sim = SimBuilder::new(config(2, 400, 400), HeadlessHost::default())
            .seed(7)
            .max_ticks(500_000)
            .build()
            .unwrap();
        let winner = sim.run(&mut NoopObserver).unwrap();
        let winner = winner.expect("no winner within the tick limit");
        assert_eq!(sim.population.count(winner), 6);
        assert!(sim.state().is_stopped());
    }

    #[test]
    fn tick_interval_paces_the_loop() {
        let mut sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
            .seed(2)
            .max_ticks(3)
            .tick_interval(Duration::from_millis(10))
            .build()
            .unwrap();
        let started = Instant::now();
        sim.run(&mut NoopObserver).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn spawned_loop_can_be_stopped() {
        let sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
            .seed(13)
            .build()
            .unwrap();
        let handle = sim.spawn(Recorder::default());

        let deadline = Instant::now() + Duration::from_secs(10);
        while handle.latest_frame().is_none() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(handle.latest_frame().is_some());

        handle.stop();
        assert!(!handle.is_running());
        let outcome = handle.join().unwrap();
        assert!(outcome.host.frames_drawn >= 1);
        assert!(outcome.ticks >= Tick(1));
        assert!(matches!(outcome.observer.0.last(), Some(Event::End(_))));
    }
}
