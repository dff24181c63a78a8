use std::error::Error;

use classic_containers::collections::circ::CircularQueue;
use classic_containers::collections::hash::{FixedHashTable, Name, Record};
use classic_containers::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use classic_containers::collections::stack::{ArrayStack, LinkedStack};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
#[allow(dead_code)]
struct Person {
    age: u32,
    height: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    singly_linked_list()?;
    doubly_linked_list();
    hash_table()?;
    circular_queue()?;
    stacks()?;

    Ok(())
}

fn singly_linked_list() -> Result<(), Box<dyn Error>> {
    println!("\n[SinglyLinkedList]\n");

    let mut list = SinglyLinkedList::init(10);
    list.append_tail(20);
    list.append_tail(30);
    list.append_head(5);
    println!("{list}");

    list.append_at(15, 2)?;
    println!("{list}");
    if let Err(err) = list.append_at(0, 0) {
        info!(%err, "append_at refused");
    }

    println!("Popped head: {:?}", list.pop_head());
    println!("Popped tail: {:?}", list.pop_tail());
    println!("Deleted index 1: {:?}", list.delete_at(1)?);
    println!("{list}");
    println!("Find 20: {:?}", list.find(&20));

    list.clear();
    println!("{list:?}");
    Ok(())
}

fn doubly_linked_list() {
    println!("\n[DoublyLinkedList]\n");

    let mut list = DoublyLinkedList::new();
    list.append_tail(10);
    list.append_tail(20);
    list.append_head(5);
    list.append_tail(30);
    println!("{list}");
    println!("Backwards: {:?}", list.iter().rev().collect::<Vec<_>>());

    println!("Popped from head: {:?}", list.pop_head());
    println!("Popped from tail: {:?}", list.pop_tail());
    println!("{list:?}");
}

fn hash_table() -> Result<(), Box<dyn Error>> {
    println!("\n[FixedHashTable]\n");

    let berkay = Name::new("Berkay")?;
    let fatih = Name::new("Fatih")?;

    let mut table = FixedHashTable::<Person>::new();
    let index = table.insert(Record::new(berkay, Person { age: 26, height: 191 }))?;
    info!(%berkay, index, "inserted");
    let index = table.insert(Record::new(fatih, Person { age: 26, height: 181 }))?;
    info!(%fatih, index, "inserted");
    println!("{table}");

    if let Err(err) = table.insert(Record::new(berkay, Person { age: 30, height: 170 })) {
        info!(%err, "second insert refused");
    }

    println!("lookup {berkay}: {:?}, idx: {:?}", table.lookup(&berkay), table.find(&berkay));
    println!("delete {fatih}: {:?}", table.delete(&fatih)?);
    if let Err(err) = table.delete(&fatih) {
        info!(%err, "second delete refused");
    }
    println!("{table:?}");
    Ok(())
}

fn circular_queue() -> Result<(), Box<dyn Error>> {
    println!("\n[CircularQueue]\n");

    let mut queue = CircularQueue::new(3);
    for i in 1..=3 {
        queue.enqueue(i)?;
    }
    if let Err(err) = queue.enqueue(4) {
        info!(%err, rejected = err.0, "enqueue refused");
    }
    println!("Dequeued: {:?}", queue.dequeue());
    queue.enqueue(4)?;
    println!("{queue:?}");
    Ok(())
}

fn stacks() -> Result<(), Box<dyn Error>> {
    println!("\n[ArrayStack]\n");

    let mut stack = ArrayStack::<i32>::new();
    stack.push(10)?;
    stack.push(20)?;
    stack.push(30)?;
    println!("{stack:?}");
    println!("Popped: {:?}", stack.pop());
    println!("Top element: {:?}", stack.peek());

    println!("\n[LinkedStack]\n");

    let mut stack = LinkedStack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);
    println!("{stack:?}");
    println!("Popped: {:?}", stack.pop());
    println!("Top: {:?}", stack.peek());
    Ok(())
}
