#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Person {
    age: u32,
    height: u32,
}

fn name(name: &str) -> Name {
    Name::new(name).expect("test names fit within NAME_SIZE")
}

fn person(name_str: &str, age: u32, height: u32) -> Record<Person> {
    Record::new(name(name_str), Person { age, height })
}

#[test]
fn test_hash_values() {
    type Table = FixedHashTable<Person>;
    assert_eq!(Table::hash(&name("Berkay")), 9);
    assert_eq!(Table::hash(&name("Fatih")), 16);
    assert_eq!(Table::hash(&name("Ayse")), 16, "Distinct names may share a slot.");
    assert_eq!(Table::hash(&name("")), 0, "The empty name hashes to the initial accumulator.");

    assert_eq!(FixedHashTable::<Person, 7>::hash(&name("Berkay")), 2);
    assert_eq!(FixedHashTable::<Person, 101>::hash(&name("Bob")), 26);
    assert_eq!(FixedHashTable::<Person, 1>::hash(&name("Bob")), 0);
}

#[test]
fn test_berkay_scenario() {
    let mut table = FixedHashTable::<Person, 20>::new();
    assert_eq!(table.insert(person("Berkay", 26, 191)), Ok(9));

    let found = table.lookup(&name("Berkay"));
    assert_eq!(found, Some(&person("Berkay", 26, 191)));
    assert_eq!(table.find(&name("Berkay")), Some(9));

    assert_eq!(
        table.delete(&person("Fatih", 26, 181)),
        Err(DeleteError::EmptySlot { index: 16 }),
        "Deleting a name that was never inserted should fail."
    );

    let err = table.insert(person("Berkay", 30, 170)).unwrap_err();
    assert_eq!(err.index, 9);
    assert_eq!(err.occupant, name("Berkay"));
    assert_eq!(
        err.into_record(),
        person("Berkay", 30, 170),
        "A rejected record should be handed back unchanged."
    );
    assert_eq!(
        table.lookup(&name("Berkay")).map(|record| record.payload.age),
        Some(26),
        "A rejected insert mustn't overwrite the occupant."
    );
    assert_eq!(table.len(), 1);
}

#[test]
fn test_collisions_are_rejected() {
    let mut table = FixedHashTable::<Person>::new();
    assert_eq!(table.insert(person("Fatih", 26, 181)), Ok(16));

    let err = table.insert(person("Ayse", 24, 165)).unwrap_err();
    assert_eq!(err.index, 16);
    assert_eq!(err.occupant, name("Fatih"));
    assert_eq!(
        err.to_string(),
        "Unable to insert Ayse, slot 16 is already occupied by Fatih!"
    );

    assert_eq!(
        table.delete(&name("Ayse")),
        Err(DeleteError::NameMismatch { index: 16, occupant: name("Fatih") }),
        "Deleting a colliding name mustn't remove the occupant."
    );
    assert_eq!(table.lookup(&name("Ayse")), None);
    assert_eq!(table.len(), 1);

    assert_eq!(table.delete(&name("Fatih")), Ok(person("Fatih", 26, 181)));
    assert!(table.is_empty());
    assert_eq!(table.insert(person("Ayse", 24, 165)), Ok(16), "The freed slot is reusable.");
}

#[test]
fn test_lookup_scans_every_slot() {
    let mut table = FixedHashTable::<Person>::new();
    for (i, n) in ["Can", "Eve", "Berkay", "Bob", "Fatih", "Emre"].into_iter().enumerate() {
        assert!(table.insert(person(n, i as u32, 0)).is_ok(), "{n} should have its own slot.");
    }

    for (expected_index, n) in [(0, "Can"), (3, "Eve"), (9, "Berkay"), (10, "Bob"), (16, "Fatih"), (17, "Emre")] {
        assert_eq!(table.find(&name(n)), Some(expected_index));
        assert_eq!(table.lookup(&name(n)).map(|record| record.name), Some(name(n)));
    }
    assert_eq!(table.find(&name("Zeynep")), None);

    assert_eq!(
        table.iter().map(|(index, _)| index).collect::<Vec<_>>(),
        [0, 3, 9, 10, 16, 17],
        "Iteration should visit occupied slots in order."
    );
    assert_eq!(table.iter().len(), 6);
}

#[test]
fn test_clear_is_idempotent() {
    let counter = CountedDrop::counter();
    let mut table = FixedHashTable::<CountedDrop, 5>::new();
    for n in ["a", "b", "c", "d", "e", "f", "g"] {
        let _ = table.insert(Record::new(name(n), CountedDrop::new(&counter)));
    }
    let stored = table.len();
    let rejected = 7 - stored;
    assert_eq!(counter.get(), rejected, "Rejected records are dropped by the caller.");

    table.clear();
    assert_eq!(counter.get(), 7, "clear should drop every stored record.");
    assert!(table.is_empty());

    table.clear();
    assert!(table.is_empty());
    assert!((0..table.capacity()).all(|index| table.slot(index).is_none()));
    assert!(table.slot(5).is_none(), "Out of range slots are reported as empty.");
}

#[test]
fn test_names() {
    assert!(Name::new("exactly twenty bytes").is_ok());
    assert_eq!(
        Name::new("twenty-one bytes long"),
        Err(NameTooLong { len: 21, max: NAME_SIZE })
    );
    assert_eq!("Berkay".parse::<Name>(), Ok(name("Berkay")));
    assert!(name("Berkay") == *"Berkay");
    assert_ne!(name("Berk"), name("Berkay"), "Prefixes aren't equal to the full name.");
}

#[test]
fn test_display() {
    let mut table = FixedHashTable::<Person, 4>::new();
    table.insert(person("Bob", 1, 1)).expect("an empty table accepts any name");
    let index = FixedHashTable::<Person, 4>::hash(&name("Bob"));
    let expected = (0..4)
        .map(|i| if i == index { format!("[{i}] Bob") } else { format!("[{i}] -") })
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(table.to_string(), expected);
}
