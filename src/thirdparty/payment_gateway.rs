use anyhow::Result;

use crate::domain::ticket::AccountId;

/// Capability to take a payment from an account
pub trait TicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> Result<()>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> Result<()> {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

/// Accepts every payment and logs it
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingTicketPaymentService;

impl TicketPaymentService for LoggingTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) -> Result<()> {
        tracing::info!(
            account_id = account_id.get(),
            amount = total_amount_to_pay,
            "Payment taken"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_service_accepts_payment() {
        let service = LoggingTicketPaymentService;
        let account = AccountId::try_from(9).unwrap();
        assert!(service.make_payment(account, 60).is_ok());
    }
}
