//! Data transfer types for the recruiting API.
//!
//! Provides:
//! - Candidate (`candidato`) and job posting (`vaga`) requests and responses
//! - The application view (`candidatura`) pairing a posting with its candidates
//! - Paging envelopes and "show more" helpers
//! - Query string construction for listing filters
//!
//! Every type fills missing JSON fields with the same defaults the API
//! clients assume, so partial payloads deserialize cleanly.
//!
//! # Example
//!
//! ```
//! use talent_models::{CandidatoFilterRequest, QueryParams};
//!
//! let filter = CandidatoFilterRequest {
//!     nome: Some("Ana".into()),
//!     ..Default::default()
//! };
//! assert_eq!(filter.to_query_string(), "Nome=Ana&PageNumber=1&PageSize=5");
//! ```

mod candidatos;
mod paging;
mod query;
pub mod serde_date;
mod vagas;

pub use candidatos::{
    CANDIDATO_ACOES, CandidatoCriarEditarRequest, CandidatoFilterRequest, CandidatoResponse,
    CandidatoResumoResponse, Sexo,
};
pub use paging::{PageRequest, PagedResponse, SHOW_MORE_STEP};
pub use query::QueryParams;
pub use vagas::{
    TipoVaga, VAGA_ACOES, VagaCriarEditarRequest, VagaFilterRequest, VagaResponse,
    VagasComCandidatoResponse,
};
