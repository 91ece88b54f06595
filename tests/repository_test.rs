mod common;

use common::TestDb;
use substation_mapper::domain::machine::NewMachine;
use substation_mapper::repository::{
    DieselRepository, MachineReader, MachineWriter, RepositoryError, SubstationReader,
    SubstationWriter,
};

#[test]
fn creates_and_lists_substations_ordered_by_name() {
    let db = TestDb::new("test_substation_crud.db");
    let repo = DieselRepository::new(db.pool());

    let east = repo
        .create_substation("East Yard")
        .expect("Failed to create substation.");
    assert_eq!(east.name, "East Yard");

    repo.create_substation("Central")
        .expect("Failed to create substation.");

    let listed = repo.list_substations().expect("Failed to list substations.");
    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Central", "East Yard"]);
}

#[test]
fn duplicate_substation_name_is_a_conflict() {
    let db = TestDb::new("test_substation_duplicate.db");
    let repo = DieselRepository::new(db.pool());

    repo.create_substation("North")
        .expect("Failed to create substation.");
    let err = repo
        .create_substation("North")
        .expect_err("Duplicate name should be rejected.");

    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[test]
fn finds_machines_by_grid_position() {
    let db = TestDb::new("test_machine_position.db");
    let repo = DieselRepository::new(db.pool());

    let substation = repo
        .create_substation("West")
        .expect("Failed to create substation.");

    let machine_id = repo
        .create_machine(&NewMachine {
            substation_id: substation.id,
            position_x: 2,
            position_y: 5,
            name: "主变压器".to_string(),
            info: "500kV".to_string(),
            image_path: None,
        })
        .expect("Failed to create machine.");

    let found = repo
        .find_machine_at(substation.id, 2, 5)
        .expect("Failed to query position.")
        .expect("Machine should occupy the cell.");
    assert_eq!(found.id, machine_id);
    assert_eq!(found.name, "主变压器");
    assert_eq!(found.image_path, "");

    let vacant = repo
        .find_machine_at(substation.id, 3, 5)
        .expect("Failed to query position.");
    assert!(vacant.is_none());
}

#[test]
fn updates_keep_image_path_when_not_replaced() {
    let db = TestDb::new("test_machine_update.db");
    let repo = DieselRepository::new(db.pool());

    let substation = repo
        .create_substation("South")
        .expect("Failed to create substation.");
    let machine_id = repo
        .create_machine(&NewMachine {
            substation_id: substation.id,
            position_x: 0,
            position_y: 0,
            name: "开关柜".to_string(),
            info: String::new(),
            image_path: Some("uploads/old.jpg".to_string()),
        })
        .expect("Failed to create machine.");

    let affected = repo
        .update_machine_fields(machine_id, "开关柜 B", "SF6", None)
        .expect("Failed to update machine.");
    assert_eq!(affected, 1);

    let machine = repo.get_machine(machine_id).expect("Failed to get machine.");
    assert_eq!(machine.name, "开关柜 B");
    assert_eq!(machine.info, "SF6");
    assert_eq!(machine.image_path, "uploads/old.jpg");

    let affected = repo
        .update_machine_fields(machine_id, "开关柜 B", "SF6", Some("uploads/new.jpg"))
        .expect("Failed to update machine.");
    assert_eq!(affected, 1);

    let machine = repo.get_machine(machine_id).expect("Failed to get machine.");
    assert_eq!(machine.image_path, "uploads/new.jpg");
}

#[test]
fn missing_machine_is_not_found() {
    let db = TestDb::new("test_machine_missing.db");
    let repo = DieselRepository::new(db.pool());

    let err = repo
        .get_machine(424242)
        .expect_err("Missing machine should error.");
    assert!(matches!(err, RepositoryError::NotFound));
}
