use roster_core::{
    validate_new, EmployeeInput, EmployeeRepository, InMemoryEmployeeRepository, NewEmployee,
    RepoError, StoreEvent,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn new_employee(name: &str) -> NewEmployee {
    validate_new(&EmployeeInput {
        nucleus_number: "302".to_string(),
        city: "VALENÇA".to_string(),
        leadership: "SONERA".to_string(),
        name: name.to_string(),
        phone: "24992640979".to_string(),
        modality: "Vôlei".to_string(),
        role: "Professor".to_string(),
        gender: "feminino".to_string(),
        ..EmployeeInput::default()
    })
    .unwrap()
}

fn recorded_events(repo: &mut InMemoryEmployeeRepository) -> Rc<RefCell<Vec<StoreEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    repo.subscribe(Box::new(move |event: &StoreEvent| {
        sink.borrow_mut().push(event.clone());
    }));
    events
}

#[test]
fn create_assigns_id_and_prepends() {
    let mut repo = InMemoryEmployeeRepository::new();

    let first = repo.create_employee(new_employee("Maria Silva")).unwrap();
    let second = repo.create_employee(new_employee("Ana Costa")).unwrap();

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);

    let listed = repo.list_employees();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], second);
    assert_eq!(listed[1], first);
}

#[test]
fn created_record_equals_input_plus_id() {
    let mut repo = InMemoryEmployeeRepository::new();
    let employee = new_employee("Maria Silva");
    let expected_fields = employee.fields().clone();

    let stored = repo.create_employee(employee).unwrap();

    let mut without_id = stored.clone();
    without_id.id = String::new();
    assert_eq!(without_id, expected_fields);
    assert_eq!(repo.get_employee(&stored.id), Some(stored));
}

#[test]
fn ids_stay_unique_across_create_and_delete_sequences() {
    let mut repo = InMemoryEmployeeRepository::new();
    let mut seen = HashSet::new();

    for round in 0..50 {
        let record = repo
            .create_employee(new_employee(&format!("Pessoa {round}")))
            .unwrap();
        assert!(seen.insert(record.id.clone()), "duplicate id {}", record.id);
        if round % 2 == 0 {
            repo.delete_employee(&record.id).unwrap();
        }
    }

    assert_eq!(repo.len(), 25);
}

#[test]
fn update_replaces_in_place() {
    let mut repo = InMemoryEmployeeRepository::new();
    let oldest = repo.create_employee(new_employee("Maria Silva")).unwrap();
    let newest = repo.create_employee(new_employee("Ana Costa")).unwrap();

    let mut changed = oldest.clone();
    changed.role = "Coordenador".to_string();
    let returned = repo.update_employee(changed.clone()).unwrap();
    assert_eq!(returned, changed);

    let listed = repo.list_employees();
    assert_eq!(listed[0].id, newest.id);
    assert_eq!(listed[1], changed);
}

#[test]
fn update_unknown_id_fails_and_leaves_store_unchanged() {
    let mut repo = InMemoryEmployeeRepository::new();
    let existing = repo.create_employee(new_employee("Maria Silva")).unwrap();
    let before = repo.list_employees();
    let events = recorded_events(&mut repo);

    let mut ghost = existing.clone();
    ghost.id = "missing-id".to_string();
    let err = repo.update_employee(ghost).unwrap_err();

    assert_eq!(err, RepoError::NotFound("missing-id".to_string()));
    assert_eq!(repo.list_employees(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn delete_removes_record_and_unknown_id_fails() {
    let mut repo = InMemoryEmployeeRepository::new();
    let keep = repo.create_employee(new_employee("Maria Silva")).unwrap();
    let gone = repo.create_employee(new_employee("Ana Costa")).unwrap();

    repo.delete_employee(&gone.id).unwrap();
    assert!(repo.list_employees().iter().all(|e| e.id != gone.id));
    assert!(repo.get_employee(&gone.id).is_none());

    let before = repo.list_employees();
    let err = repo.delete_employee(&gone.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(ref id) if *id == gone.id));
    assert_eq!(repo.list_employees(), before);
    assert_eq!(before, vec![keep]);
}

#[test]
fn list_returns_a_defensive_copy() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.create_employee(new_employee("Maria Silva")).unwrap();

    let mut snapshot = repo.list_employees();
    snapshot[0].name = "Outra Pessoa".to_string();
    snapshot.clear();

    let listed = repo.list_employees();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Maria Silva");
}

#[test]
fn every_successful_mutation_notifies_subscribers() {
    let mut repo = InMemoryEmployeeRepository::new();
    let events = recorded_events(&mut repo);

    let record = repo.create_employee(new_employee("Maria Silva")).unwrap();
    repo.update_employee(record.clone()).unwrap();
    repo.delete_employee(&record.id).unwrap();
    let _ = repo.delete_employee(&record.id);

    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::Created(record.id.clone()),
            StoreEvent::Updated(record.id.clone()),
            StoreEvent::Deleted(record.id.clone()),
        ]
    );
}

#[test]
fn unsubscribed_listener_stops_receiving_events() {
    let mut repo = InMemoryEmployeeRepository::new();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let subscription = repo.subscribe(Box::new(move |_: &StoreEvent| {
        *counter.borrow_mut() += 1;
    }));

    repo.create_employee(new_employee("Maria Silva")).unwrap();
    assert!(repo.unsubscribe(subscription));
    repo.create_employee(new_employee("Ana Costa")).unwrap();

    assert_eq!(*count.borrow(), 1);
    assert!(!repo.unsubscribe(subscription));
}
