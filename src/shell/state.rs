use std::sync::Arc;

use crate::config::AppConfig;
use crate::modules::reservations::use_cases::available_slots::handler::AvailableSlotsHandler;
use crate::modules::reservations::use_cases::cancel_reservation::handler::CancelReservationHandler;
use crate::modules::reservations::use_cases::list_reservations::handler::ListReservationsHandler;
use crate::modules::reservations::use_cases::reserve_slot::handler::ReserveSlotHandler;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::notifier::log_only::LogOnlyNotifier;
use crate::shared::infrastructure::notifier::twilio::TwilioNotifier;
use crate::shared::infrastructure::reservation_log::csv_file::CsvFileLog;

#[derive(Clone)]
pub struct AppState {
    pub admin_token: Option<String>,
    pub reserve_handler: Arc<ReserveSlotHandler<CsvFileLog>>,
    pub cancel_handler: Arc<CancelReservationHandler<CsvFileLog>>,
    pub availability: Arc<AvailableSlotsHandler<CsvFileLog>>,
    pub listing: Arc<ListReservationsHandler<CsvFileLog>>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let log = Arc::new(CsvFileLog::new(&config.log_path, config.default_dock()));
        let notifier: Arc<dyn Notifier> = match &config.twilio {
            Some(twilio) => Arc::new(TwilioNotifier::new(twilio.clone())),
            None => Arc::new(LogOnlyNotifier),
        };
        Self {
            admin_token: config.admin_token.clone(),
            reserve_handler: Arc::new(ReserveSlotHandler::new(
                config.docks.clone(),
                config.window.clone(),
                log.clone(),
                notifier,
            )),
            cancel_handler: Arc::new(CancelReservationHandler::new(log.clone())),
            availability: Arc::new(AvailableSlotsHandler::new(
                config.docks.clone(),
                config.window.clone(),
                log.clone(),
            )),
            listing: Arc::new(ListReservationsHandler::new(log)),
        }
    }
}
