use diesel::prelude::*;

use crate::domain::substation::Substation;
use crate::models::substation::{NewSubstation, Substation as DbSubstation};
use crate::repository::{DieselRepository, RepositoryResult, SubstationReader, SubstationWriter};

impl SubstationReader for DieselRepository {
    fn list_substations(&self) -> RepositoryResult<Vec<Substation>> {
        use crate::schema::substations;

        let mut conn = self.conn()?;

        let result = substations::table
            .order(substations::name.asc())
            .load::<DbSubstation>(&mut conn)?;

        Ok(result.into_iter().map(Substation::from).collect())
    }
}

impl SubstationWriter for DieselRepository {
    fn create_substation(&self, name: &str) -> RepositoryResult<Substation> {
        use crate::schema::substations;

        let mut conn = self.conn()?;

        // UNIQUE(name) violations surface as a conflict
        let substation = diesel::insert_into(substations::table)
            .values(&NewSubstation { name })
            .get_result::<DbSubstation>(&mut conn)?;

        Ok(substation.into())
    }
}
