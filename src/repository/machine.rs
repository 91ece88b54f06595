use diesel::prelude::*;

use crate::domain::machine::{Machine, NewMachine};
use crate::models::machine::{Machine as DbMachine, NewMachine as DbNewMachine};
use crate::repository::{DieselRepository, MachineReader, MachineWriter, RepositoryResult};

impl MachineReader for DieselRepository {
    fn get_machine(&self, machine_id: i32) -> RepositoryResult<Machine> {
        use crate::schema::machines;

        let mut conn = self.conn()?;

        let machine = machines::table
            .find(machine_id)
            .first::<DbMachine>(&mut conn)?;

        Ok(machine.into())
    }

    fn list_machines(&self, substation_id: i32) -> RepositoryResult<Vec<Machine>> {
        use crate::schema::machines;

        let mut conn = self.conn()?;

        let result = machines::table
            .filter(machines::substation_id.eq(substation_id))
            .load::<DbMachine>(&mut conn)?;

        Ok(result.into_iter().map(Machine::from).collect())
    }

    fn find_machine_at(
        &self,
        substation_id: i32,
        position_x: i32,
        position_y: i32,
    ) -> RepositoryResult<Option<Machine>> {
        use crate::schema::machines;

        let mut conn = self.conn()?;

        let machine = machines::table
            .filter(machines::substation_id.eq(substation_id))
            .filter(machines::position_x.eq(position_x))
            .filter(machines::position_y.eq(position_y))
            .first::<DbMachine>(&mut conn)
            .optional()?;

        Ok(machine.map(Machine::from))
    }
}

impl MachineWriter for DieselRepository {
    fn create_machine(&self, machine: &NewMachine) -> RepositoryResult<i32> {
        use crate::schema::machines;

        let mut conn = self.conn()?;

        let machine_id = diesel::insert_into(machines::table)
            .values(&DbNewMachine::from(machine))
            .returning(machines::id)
            .get_result::<i32>(&mut conn)?;

        Ok(machine_id)
    }

    fn update_machine_fields(
        &self,
        machine_id: i32,
        name: &str,
        info: &str,
        image_path: Option<&str>,
    ) -> RepositoryResult<usize> {
        use crate::schema::machines;

        let mut conn = self.conn()?;

        let target = machines::table.filter(machines::id.eq(machine_id));
        // A missing image path keeps the previously stored photo.
        let affected = match image_path {
            Some(path) => diesel::update(target)
                .set((
                    machines::name.eq(name),
                    machines::info.eq(info),
                    machines::image_path.eq(path),
                    machines::updated_at.eq(diesel::dsl::now),
                ))
                .execute(&mut conn)?,
            None => diesel::update(target)
                .set((
                    machines::name.eq(name),
                    machines::info.eq(info),
                    machines::updated_at.eq(diesel::dsl::now),
                ))
                .execute(&mut conn)?,
        };

        Ok(affected)
    }
}
