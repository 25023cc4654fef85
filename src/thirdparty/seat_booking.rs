use anyhow::Result;

use crate::domain::ticket::AccountId;

/// Capability to reserve seats against an account
pub trait SeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) -> Result<()>;
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) -> Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) -> Result<()> {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}

/// Accepts every reservation and logs it
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) -> Result<()> {
        tracing::info!(
            account_id = account_id.get(),
            seats = total_seats_to_allocate,
            "Seats reserved"
        );
        Ok(())
    }
}
