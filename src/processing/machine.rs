use crate::domain::machine::{Machine, NewMachine};
use crate::processing::ProcessingError;
use crate::repository::{MachineReader, MachineWriter};
use crate::storage::ImageStore;

/// A requested grid placement, with an optional decoded photo.
#[derive(Debug)]
pub struct MachinePlacement {
    pub substation_id: i32,
    pub position_x: i32,
    pub position_y: i32,
    pub name: String,
    pub info: String,
    pub image: Option<Vec<u8>>,
}

/// Creates or updates the machine occupying a grid cell. A cell is addressed
/// by (substation, x, y); placing onto an occupied cell overwrites its name
/// and info, and replaces the stored photo only when a new one is supplied.
pub fn place_machine<R>(
    repo: &R,
    store: &ImageStore,
    placement: MachinePlacement,
) -> Result<Machine, ProcessingError>
where
    R: MachineReader + MachineWriter,
{
    let MachinePlacement {
        substation_id,
        position_x,
        position_y,
        name,
        info,
        image,
    } = placement;

    let image_path = match &image {
        Some(bytes) => Some(store.save(
            &format!("machine_{substation_id}_{position_x}_{position_y}"),
            bytes,
        )?),
        None => None,
    };

    let machine_id = match repo.find_machine_at(substation_id, position_x, position_y)? {
        Some(machine) => {
            repo.update_machine_fields(machine.id, &name, &info, image_path.as_deref())?;
            machine.id
        }
        None => repo.create_machine(&NewMachine {
            substation_id,
            position_x,
            position_y,
            name,
            info,
            image_path,
        })?,
    };

    log::info!("Placed machine {machine_id} at ({position_x}, {position_y}) in substation {substation_id}");

    Ok(repo.get_machine(machine_id)?)
}

/// Updates an existing machine's fields, optionally replacing its photo.
pub fn update_machine<R>(
    repo: &R,
    store: &ImageStore,
    machine_id: i32,
    name: &str,
    info: &str,
    image: Option<&[u8]>,
) -> Result<(), ProcessingError>
where
    R: MachineReader + MachineWriter,
{
    // 404 before any file is written
    repo.get_machine(machine_id)?;

    let image_path = match image {
        Some(bytes) => Some(store.save(&format!("machine_{machine_id}"), bytes)?),
        None => None,
    };

    repo.update_machine_fields(machine_id, name, info, image_path.as_deref())?;

    Ok(())
}
