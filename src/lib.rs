pub mod shared {
    pub mod infrastructure {
        pub mod event_channel;
    }
}

pub mod modules {
    pub mod apartments {
        pub mod core {
            pub mod address;
            pub mod apartment;
            pub mod apartment_factory;
            pub mod booking;
            pub mod errors;
            pub mod events;
            pub mod period;
            pub mod ports;
            pub mod room;
        }
        pub mod application {
            pub mod apartment_application_service;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod add_apartment {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod book_apartment {
                pub mod command;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod apartment_repository_in_memory;
                pub mod booking_repository_in_memory;
            }
        }
    }
}

pub mod shell;
