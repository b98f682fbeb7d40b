// Composition root for the apartments bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the application service and expose it over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
