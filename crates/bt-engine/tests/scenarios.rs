//! End-to-end evaluation scenarios for composites, leaves and decorators.

use bt_engine::builder::{action, condition, inverter, parallel, selector, sequence};
use bt_engine::{BehaviorTree, InitializationError, Node, Status};

/// Records which leaves ran, in order.
#[derive(Default)]
struct Journal {
    ran: Vec<&'static str>,
}

fn check(name: &'static str, result: bool) -> Node<Journal> {
    // Conditions only read the context; whether they ran shows in `node_status`.
    condition(name, move |_: &Journal| result)
}

fn step(name: &'static str, status: Status) -> Node<Journal> {
    action(name, move |journal: &mut Journal| {
        journal.ran.push(name);
        status
    })
}

fn tree(root: Node<Journal>) -> BehaviorTree<Journal> {
    BehaviorTree::new(Journal::default(), root).expect("context and root are set")
}

#[test]
fn sequence_suspends_on_running_action() {
    let mut tree = tree(sequence(vec![
        check("ready", true),
        step("work", Status::Running),
        check("done", true),
    ]));

    assert_eq!(tree.update(), Status::Running);

    let done = tree.find("done").unwrap();
    assert_eq!(tree.node_status(done), None);
    assert_eq!(tree.node_status(tree.find("ready").unwrap()), Some(Status::Success));
    assert_eq!(tree.context().ran, ["work"]);
}

#[test]
fn selector_falls_through_failed_condition() {
    let mut tree = tree(selector(vec![check("no", false), check("yes", true)]));

    assert_eq!(tree.update(), Status::Success);
    assert_eq!(tree.node_status(tree.find("no").unwrap()), Some(Status::Failure));
    assert_eq!(tree.node_status(tree.find("yes").unwrap()), Some(Status::Success));
}

#[test]
fn selector_stops_on_running() {
    let mut tree = tree(selector(vec![
        step("fails", Status::Failure),
        step("busy", Status::Running),
        step("fallback", Status::Success),
    ]));

    assert_eq!(tree.update(), Status::Running);
    assert_eq!(tree.context().ran, ["fails", "busy"]);
}

#[test]
fn parallel_failure_beats_earlier_running() {
    let mut tree = tree(parallel(vec![
        step("busy", Status::Running),
        step("broken", Status::Failure),
        step("after", Status::Success),
    ]));

    assert_eq!(tree.update(), Status::Failure);
    assert_eq!(tree.context().ran, ["busy", "broken"]);
}

#[test]
fn parallel_ticks_every_child_while_running() {
    let mut tree = tree(parallel(vec![
        step("a", Status::Running),
        step("b", Status::Success),
        step("c", Status::Running),
    ]));

    assert_eq!(tree.update(), Status::Running);
    assert_eq!(tree.update(), Status::Running);
    assert_eq!(tree.context().ran, ["a", "b", "c", "a", "b", "c"]);
}

#[test]
fn inverter_flips_conditions_and_keeps_running() {
    let mut flipped = tree(inverter(check("yes", true)));
    assert_eq!(flipped.update(), Status::Failure);

    let mut flipped = tree(inverter(check("no", false)));
    assert_eq!(flipped.update(), Status::Success);

    let mut flipped = tree(inverter(step("busy", Status::Running)));
    assert_eq!(flipped.update(), Status::Running);
}

#[test]
fn empty_composites_use_base_case() {
    assert_eq!(tree(selector(vec![])).update(), Status::Failure);
    assert_eq!(tree(sequence(vec![])).update(), Status::Success);
    assert_eq!(tree(parallel(vec![])).update(), Status::Success);
}

#[test]
fn missing_context_fails_before_any_tick() {
    let result = BehaviorTree::<Journal>::builder()
        .root(step("never", Status::Success))
        .build();

    assert_eq!(result.unwrap_err(), InitializationError::MissingContext);
}

#[test]
fn unreached_nodes_keep_previous_status() {
    // Once the gate opens the selector stops before `wait`, whose cached
    // status stays at the value from the last update that reached it.
    #[derive(Default)]
    struct Gate {
        open: bool,
    }

    let root = Node::selector(vec![
        Node::condition(|gate: &Gate| gate.open).named("open"),
        Node::action(|_: &mut Gate| Status::Running).named("wait"),
    ]);
    let mut tree = BehaviorTree::new(Gate::default(), root).unwrap();
    let wait = tree.find("wait").unwrap();

    assert_eq!(tree.update(), Status::Running);
    assert_eq!(tree.node_status(wait), Some(Status::Running));

    tree.context_mut().open = true;
    assert_eq!(tree.update(), Status::Success);
    assert_eq!(tree.node_status(wait), Some(Status::Running));
    assert_eq!(tree.ticks(), 2);
}

#[test]
fn running_action_resumes_from_context_state() {
    struct Patrol {
        waypoint: usize,
        route: Vec<u32>,
    }

    let walk = Node::action(|patrol: &mut Patrol| {
        patrol.waypoint += 1;
        if patrol.waypoint < patrol.route.len() {
            Status::Running
        } else {
            Status::Success
        }
    });
    let root = Node::sequence(vec![
        Node::condition(|patrol: &Patrol| !patrol.route.is_empty()),
        walk,
    ]);
    let mut tree = BehaviorTree::new(
        Patrol {
            waypoint: 0,
            route: vec![3, 7, 11],
        },
        root,
    )
    .unwrap();

    let statuses: Vec<_> = (0..3).map(|_| tree.update()).collect();
    assert_eq!(statuses, [Status::Running, Status::Running, Status::Success]);
    assert_eq!(tree.context().waypoint, 3);
}
