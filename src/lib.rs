//! Connectivity smoke check for the Pokemon TCG card catalog API.
//!
//! One GET against the public cards endpoint, a typed read of the reply,
//! and a console report. The binary wires the pieces together; everything
//! lives in library code so the flow stays testable against canned replies.

pub mod card;
pub mod providers;
pub mod report;

pub use card::{CardSearchResponse, CardSetInfo, PokemonTcgCard};
pub use providers::{ApiReply, PokemonTcgProvider, ProviderError, ProviderResult};
