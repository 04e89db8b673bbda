pub mod config;

pub mod shared {
    pub mod infrastructure {
        pub mod notifier;
        pub mod reservation_log;
    }
}

pub mod modules {
    pub mod reservations {
        pub mod core {
            pub mod codec;
            pub mod record;
            pub mod slots;
        }
        pub mod use_cases {
            pub mod reserve_slot {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_reservation {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod available_slots {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_reservations {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
