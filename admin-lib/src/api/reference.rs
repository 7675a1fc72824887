//! Reference collection endpoints
//!
//! Species, tags, and organizations are small unpaginated lists fetched
//! independently of the record tables; lookups are rebuilt from them
//! wholesale.

use crate::AdminClient;
use crate::auth::Organization;
use crate::error::Error;
use crate::model::Species;
use crate::model::Tag;

impl AdminClient {
    /// Fetches the species reference collection.
    pub async fn list_species(&self) -> Result<Vec<Species>, Error> {
        self.get_json("species", &[]).await
    }

    /// Fetches the capture tag reference collection.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, Error> {
        self.get_json("tags", &[]).await
    }

    /// Fetches the organizations visible to the current session.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, Error> {
        self.get_json("organizations", &[]).await
    }
}
