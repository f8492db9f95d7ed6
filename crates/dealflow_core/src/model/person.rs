//! Network contacts.

use super::{DealId, PersonId};
use serde::{Deserialize, Serialize};

/// Contact in the relationship network.
///
/// `connections` is treated as undirected when drawn, but nothing guarantees
/// the other person lists the reverse edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub connections: Vec<PersonId>,
    pub deals: Vec<DealId>,
    pub last_contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
