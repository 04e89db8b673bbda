/// Request to take one slot. `created_at` is assigned by the inbound edge
/// at the moment the request is accepted and becomes part of the record's
/// identity.
#[derive(Debug, Clone)]
pub struct ReserveSlot {
    pub company: String,
    pub driver: String,
    pub phone: String,
    pub dock: String,
    pub date: String,
    pub time: String,
    pub created_at: String,
}
