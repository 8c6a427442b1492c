//! Walks each container through a short scripted sequence.
//!
//! ```text
//! cargo run -p nexus-containers --example tour
//! RUST_LOG=trace cargo run -p nexus-containers --example tour
//! ```
//!
//! The second form also shows the vector's reallocation events.

use nexus_containers::{List, Queue, Stack, Vector};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn vector_tour() {
    let mut vector: Vector<i32> = Vector::new();
    vector.push_back(1);
    vector.push_back(2);
    vector.push_back(3);
    info!(elements = %vector, len = vector.len(), capacity = vector.capacity(), "vector after pushes");

    vector.shrink_to_fit();
    info!(len = vector.len(), capacity = vector.capacity(), "vector after shrink_to_fit");

    if let Some(clamped) = vector.preallocate(1) {
        info!(%clamped, "vector preallocation");
    }
}

fn list_tour() {
    let mut list: List<i32> = List::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);
    info!(elements = %list, "list after pushes");

    list.pop_back();
    list.pop_front();
    list.push_front(0);
    list.push_back(4);
    info!(elements = %list, "list after pops and pushes at both ends");
}

fn queue_tour() {
    let mut queue: Queue<i32> = Queue::new();
    queue.join(1);
    queue.join(2);
    queue.join(3);
    info!(elements = %queue, "queue after joins");

    queue.fetch_head();
    queue.fetch_tail();
    queue.join(4);
    queue.join(5);
    info!(elements = %queue, "queue after fetching head and tail");
}

fn stack_tour() {
    let mut stack: Stack<i32> = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    info!(elements = %stack, "stack after pushes");

    stack.pop();
    stack.pop();
    stack.push(4);
    stack.push(5);
    info!(elements = %stack, "stack after two pops and two pushes");
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    vector_tour();
    list_tour();
    queue_tour();
    stack_tour();
}
