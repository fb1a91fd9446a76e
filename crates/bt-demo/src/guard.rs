//! Guard context and its behavior tree.
//!
//! The guard patrols a one-dimensional corridor between waypoints, rests
//! when exhausted, and drops everything to chase an intruder while keeping
//! the alarm raised.

use bt_engine::builder::{action, condition, inverter, parallel, selector, sequence};
use bt_engine::{Node, Status};

const MAX_STAMINA: u32 = 5;

/// Shared state for every node of the guard's tree.
#[derive(Debug)]
pub struct Guard {
    pub position: i32,
    pub stamina: u32,
    pub alarm: bool,
    pub intruder: Option<i32>,
    pub caught: bool,
    route: Vec<i32>,
    next_waypoint: usize,
}

impl Guard {
    pub fn new(route: Vec<i32>) -> Self {
        Self {
            position: route.first().copied().unwrap_or_default(),
            stamina: MAX_STAMINA,
            alarm: false,
            intruder: None,
            caught: false,
            route,
            next_waypoint: 0,
        }
    }

    /// Moves one tile toward `target`; returns `true` once there.
    fn step_toward(&mut self, target: i32) -> bool {
        self.position += (target - self.position).signum();
        self.position == target
    }
}

/// Respond to intruders first, otherwise patrol, otherwise rest.
pub fn behavior() -> Node<Guard> {
    selector(vec![
        sequence(vec![
            condition("intruder_seen", |g: &Guard| g.intruder.is_some()),
            parallel(vec![action("raise_alarm", raise_alarm), action("chase", chase)]).named("engage"),
        ])
        .named("respond"),
        sequence(vec![
            inverter(condition("exhausted", |g: &Guard| g.stamina == 0)),
            action("walk_route", walk_route),
        ])
        .named("patrol"),
        action("rest", rest),
    ])
    .named("guard")
}

fn raise_alarm(guard: &mut Guard) -> Status {
    guard.alarm = true;
    Status::Success
}

fn chase(guard: &mut Guard) -> Status {
    let Some(target) = guard.intruder else {
        return Status::Failure;
    };
    if guard.step_toward(target) {
        guard.caught = true;
        guard.intruder = None;
        guard.alarm = false;
        tracing::info!(position = guard.position, "intruder caught");
        Status::Success
    } else {
        Status::Running
    }
}

fn walk_route(guard: &mut Guard) -> Status {
    let Some(&target) = guard.route.get(guard.next_waypoint) else {
        return Status::Failure;
    };
    guard.stamina = guard.stamina.saturating_sub(1);
    if guard.step_toward(target) {
        guard.next_waypoint = (guard.next_waypoint + 1) % guard.route.len();
        Status::Success
    } else {
        Status::Running
    }
}

fn rest(guard: &mut Guard) -> Status {
    guard.stamina = (guard.stamina + 2).min(MAX_STAMINA);
    if guard.stamina == MAX_STAMINA {
        Status::Success
    } else {
        Status::Running
    }
}
