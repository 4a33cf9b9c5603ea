//! A scripted scenario exercising the chemistry engine end to end
//!
//! Plays both collaborator roles: reports contacts like a collision layer
//! would, and logs state-change notifications like an effects layer would.

use anyhow::{Result, bail};

use kagaku_core::{EntityId, EntitySpec, State, ThresholdSpec, World};

const DT: f32 = 0.1;
const MAX_TICKS: u32 = 100;

pub fn run() -> Result<()> {
    let mut world = World::new();

    let campfire = world.register(EntitySpec::fire_element("campfire"))?;
    let crate_id = world.register(EntitySpec {
        ignition: ThresholdSpec::new(2.0),
        ..EntitySpec::combustible_material("wooden crate")
    })?;
    let splash = world.register(EntitySpec::water_element("splash"))?;
    let spark = world.register(EntitySpec::electricity_element("spark"))?;
    let rail = world.register(EntitySpec::metal_material("rail"))?;

    log::info!("-- the crate is pushed against the campfire --");
    run_until(&mut world, &[(campfire, crate_id)], |world| {
        world.state_of(crate_id) == Some(State::Fire)
    })?;

    log::info!("-- a bucket of water lands on the burning crate --");
    run_until(&mut world, &[(splash, crate_id)], |world| {
        world.state_of(crate_id) == Some(State::Undefined)
    })?;

    log::info!("-- a spark jumps onto the metal rail --");
    run_until(&mut world, &[(spark, rail)], |world| {
        world.state_of(rail) == Some(State::Electricity)
    })?;

    log::info!("-- the spark is removed --");
    world.on_contact_end(spark, rail);
    report(&mut world);

    log::info!(
        "scenario complete after {} ticks, {} entities",
        world.current_tick(),
        world.entity_count()
    );
    Ok(())
}

/// Tick the world with the given contacts until `done`, logging every
/// notification along the way
fn run_until(
    world: &mut World,
    contacts: &[(EntityId, EntityId)],
    done: impl Fn(&World) -> bool,
) -> Result<()> {
    for _ in 0..MAX_TICKS {
        for &(a, b) in contacts {
            world.on_contact(a, b);
        }
        world.tick(DT);
        report(world);
        if done(world) {
            return Ok(());
        }
    }
    bail!("scenario stalled after {MAX_TICKS} ticks");
}

/// Drain and log this tick's state-change notifications
fn report(world: &mut World) {
    for event in world.drain_events() {
        let name = world
            .entity(event.entity)
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| event.entity.to_string());
        log::info!(
            "{name}: {:?} -> {:?} (sub-state {:?})",
            event.previous,
            event.current,
            event.sub_state
        );
    }
}
