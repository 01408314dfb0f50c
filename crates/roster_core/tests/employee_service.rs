use roster_core::{
    sample_employees, EmployeeInput, EmployeeRecord, EmployeeService, InMemoryEmployeeRepository,
    ServiceError, StoreEvent, CSV_HEADERS,
};
use std::cell::RefCell;
use std::rc::Rc;

fn input(name: &str, role: &str) -> EmployeeInput {
    EmployeeInput {
        nucleus_number: "306".to_string(),
        city: "VOLTA REDONDA".to_string(),
        nucleus_name: "Núcleo D - Basquete".to_string(),
        leadership: "MARCAO".to_string(),
        name: name.to_string(),
        phone: "24999112233".to_string(),
        modality: "Basquete".to_string(),
        role: role.to_string(),
        value: "R$ 2.800,00".to_string(),
        gender: "feminino".to_string(),
        ..EmployeeInput::default()
    }
}

fn empty_service() -> EmployeeService<InMemoryEmployeeRepository> {
    EmployeeService::new(InMemoryEmployeeRepository::new())
}

#[test]
fn create_update_delete_end_to_end() {
    let mut service = empty_service();

    let a = service.register(&input("Ana Costa", "Professor")).unwrap();
    let b = service.register(&input("Bruna Lima", "Técnico")).unwrap();

    let mut edit = EmployeeInput::from(&a);
    edit.role = "Coordenador".to_string();
    service.edit(&edit).unwrap();
    service.remove(&b.id).unwrap();

    let listed = service.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, a.id);
    assert_eq!(listed[0].role, "Coordenador");
    assert_eq!(listed[0].name, "Ana Costa");
}

#[test]
fn invalid_registration_never_reaches_the_store() {
    let mut service = empty_service();
    let events = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&events);
    service.subscribe(move |_: &StoreEvent| *counter.borrow_mut() += 1);

    let err = service.register(&input("A", "Professor")).unwrap_err();

    let ServiceError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name"]);
    assert!(service.list().is_empty());
    assert_eq!(*events.borrow(), 0);
}

#[test]
fn edit_with_stale_id_reports_not_found() {
    let mut service = empty_service();
    service.register(&input("Ana Costa", "Professor")).unwrap();

    let mut stale = input("Ana Costa", "Professor");
    stale.id = Some("stale-id".to_string());
    let err = service.edit(&stale).unwrap_err();

    assert_eq!(err, ServiceError::NotFound("stale-id".to_string()));
    assert_eq!(err.to_string(), "employee not found: stale-id");
}

#[test]
fn edit_without_id_is_a_validation_error() {
    let mut service = empty_service();
    let err = service.edit(&input("Ana Costa", "Professor")).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref e) if e.get("id").is_some()));
}

#[test]
fn remove_unknown_id_reports_not_found() {
    let mut service = empty_service();
    assert_eq!(
        service.remove("nope"),
        Err(ServiceError::NotFound("nope".to_string()))
    );
}

#[test]
fn subscribers_see_register_edit_and_remove() {
    let mut service = empty_service();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = service.subscribe(move |event: &StoreEvent| {
        sink.borrow_mut().push(event.clone());
    });

    let record = service.register(&input("Ana Costa", "Professor")).unwrap();
    service.edit(&EmployeeInput::from(&record)).unwrap();
    service.remove(&record.id).unwrap();
    assert!(service.unsubscribe(subscription));
    service.register(&input("Bruna Lima", "Técnico")).unwrap();

    assert_eq!(seen.borrow().len(), 3);
    assert!(seen.borrow().iter().all(|e| e.employee_id() == record.id));
}

#[test]
fn sample_roster_seeds_four_employees() {
    let service = EmployeeService::with_sample_data(InMemoryEmployeeRepository::new()).unwrap();

    let listed = service.list();
    assert_eq!(listed.len(), sample_employees().len());
    // Seeded in order, so the last sample is listed first.
    assert_eq!(listed[0].name, "Ana Costa");
    assert_eq!(listed[3].name, "Leandro Horacio");
    assert!(service.get(&listed[2].id).is_some());

    let summary = service.dashboard();
    assert_eq!(summary.total_employees, 4);
    assert_eq!(summary.distinct_nuclei, 4);
    assert_eq!(summary.distinct_cities, 3);
    assert_eq!(summary.total_value, 11_500.0);
}

#[test]
fn export_uses_the_filtered_view() {
    let service = EmployeeService::with_sample_data(InMemoryEmployeeRepository::new()).unwrap();

    let csv = service.export_csv("rio das fores");
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADERS.join(";"));
    assert_eq!(service.search("rio das fores").len(), 2);

    assert_eq!(service.export_csv("nenhum resultado"), "");
}

#[test]
fn edit_form_prefill_round_trips_through_validation() {
    let mut service = empty_service();
    let record = service.register(&input("Ana Costa", "Professor")).unwrap();

    let prefilled = EmployeeInput::from(&record);
    assert_eq!(prefilled.nucleus_number, "306");
    assert_eq!(prefilled.gender, "feminino");

    let saved = service.edit(&prefilled).unwrap();
    assert_eq!(saved, record);
}

#[test]
fn record_serialization_uses_camel_case_wire_fields() {
    let mut service = empty_service();
    let record = service.register(&input("Ana Costa", "Professor")).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], record.id);
    assert_eq!(json["nucleusNumber"], 306);
    assert_eq!(json["nucleusName"], "Núcleo D - Basquete");
    assert_eq!(json["leadershipPhone"], "");
    assert_eq!(json["gender"], "feminino");

    let decoded: EmployeeRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn form_input_deserializes_with_missing_fields_defaulted() {
    let value = serde_json::json!({
        "nucleusNumber": "301",
        "city": "RIO DAS FORES",
        "gender": "outros"
    });

    let input: EmployeeInput = serde_json::from_value(value).unwrap();
    assert_eq!(input.id, None);
    assert_eq!(input.city, "RIO DAS FORES");
    assert!(input.name.is_empty());
}
