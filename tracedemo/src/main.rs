//! Traced walk through the reference kinds.
//!
//! A payload type logs its construction, mutation, and destruction while it
//! flows from a producer through views, into a stack, and finally into a
//! consumer. Run with `RUST_LOG=debug` to see every lifecycle event.

use log::{debug, info};

use ownref::{Own, Ref, RefMut};
use ownstack::OwnStack;

/// Payload whose lifecycle events are logged.
struct Trace {
    value: u32,
}

impl Trace {
    fn new(value: u32) -> Self {
        debug!("ctor Trace({})", value);
        Self { value }
    }

    /// Read-only operation, callable through any reference kind.
    fn observe(&self) {
        debug!("observe Trace({})", self.value);
    }

    /// Mutating operation, callable only through `Own` or `RefMut`.
    fn bump(&mut self) {
        self.value += 1;
        debug!("bump Trace -> {}", self.value);
    }
}

impl Drop for Trace {
    fn drop(&mut self) {
        debug!("dtor Trace({})", self.value);
    }
}

/// Produces a fresh payload, handing ownership to the caller.
fn produce(value: u32) -> Own<Trace> {
    Own::new(Trace::new(value))
}

/// Observes the payload; the signature guarantees the call cannot mutate it.
fn look(p: Ref<Trace>) {
    p.observe();
}

/// Mutates the payload without taking ownership of it.
fn modify(mut p: RefMut<Trace>) {
    p.bump();
    look(p.view());
}

/// Consumes the payload; it is destroyed when this function returns.
fn consume(mut p: Own<Trace>) {
    modify(p.view_mut());
}

/// One round of the produce/modify/store/consume flow.
fn exercise(mut stack: RefMut<OwnStack<Trace>>, round: u32) {
    let mut x = produce(round);

    // Write access is lent out; `x` still owns the payload afterwards.
    modify(x.view_mut());

    // Ownership moves into the stack; `x` is statically dead from here on.
    stack.push(x);

    modify(stack.top());
    look(stack.peek());

    let x = produce(round + 100);
    consume(x);
}

fn main() {
    env_logger::init();

    let mut stack = Own::new(OwnStack::new());

    for round in 0..2 {
        info!("round {}", round);
        exercise(stack.view_mut(), round);
    }

    info!("draining {} stored payloads", stack.len());
    while !stack.is_empty() {
        let handle = stack.pop();
        handle.observe();
    }
}
