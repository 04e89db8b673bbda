use crate::modules::reservations::core::record::ReservationId;

#[derive(Debug, Clone)]
pub struct CancelReservation {
    pub id: ReservationId,
}
