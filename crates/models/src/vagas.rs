//! Job posting (`vaga`) and application (`candidatura`) models.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use talent_core::OptionStrExt;
use talent_core::validation::{MAX_TITLE_LENGTH, ValidationError, validate_required};

use crate::candidatos::CandidatoResumoResponse;
use crate::paging::PageRequest;
use crate::query::QueryParams;
use crate::serde_date;

/// Work arrangement of a posting, serialized as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[non_exhaustive]
pub enum TipoVaga {
    #[default]
    Remoto,
    Presencial,
    Hibrido,
}

impl TipoVaga {
    /// Numeric code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Remoto => 1,
            Self::Presencial => 2,
            Self::Hibrido => 3,
        }
    }

    /// Label shown in forms and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remoto => "Remoto",
            Self::Presencial => "Presencial",
            Self::Hibrido => "Híbrido",
        }
    }
}

impl std::fmt::Display for TipoVaga {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for TipoVaga {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Remoto),
            2 => Ok(Self::Presencial),
            3 => Ok(Self::Hibrido),
            other => Err(format!("Unknown tipo de vaga code: {other}")),
        }
    }
}

impl From<TipoVaga> for u8 {
    fn from(tipo: TipoVaga) -> Self {
        tipo.code()
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Filter for the job posting listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VagaFilterRequest {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_vaga: Option<TipoVaga>,
    pub somente_ativas: bool,
}

impl QueryParams for VagaFilterRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(titulo) = self.titulo.non_empty() {
            pairs.push(("Titulo", titulo.to_string()));
        }
        if let Some(tipo) = self.tipo_vaga {
            pairs.push(("TipoVaga", tipo.code().to_string()));
        }
        if let Some(localizacao) = self.localizacao.non_empty() {
            pairs.push(("Localizacao", localizacao.to_string()));
        }
        if self.somente_ativas {
            pairs.push(("SomenteAtivas", "true".to_string()));
        }
        self.page.push_pairs(&mut pairs);
        pairs
    }
}

/// Body for creating or editing a job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VagaCriarEditarRequest {
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    pub tipo_vaga: TipoVaga,
}

impl VagaCriarEditarRequest {
    /// Check required fields, first violation wins.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("titulo", &self.titulo)?;
        if self.titulo.trim().chars().count() > MAX_TITLE_LENGTH {
            return Err(ValidationError::new(
                "titulo",
                format!("Title must not exceed {MAX_TITLE_LENGTH} characters"),
            ));
        }
        validate_required("descricao", &self.descricao)?;
        validate_required("localizacao", &self.localizacao)
    }
}

impl From<&VagaResponse> for VagaCriarEditarRequest {
    fn from(vaga: &VagaResponse) -> Self {
        Self {
            titulo: vaga.titulo.clone(),
            descricao: vaga.descricao.clone(),
            localizacao: vaga.localizacao.clone(),
            tipo_vaga: vaga.tipo_vaga,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Row actions offered for every posting in the listing.
pub const VAGA_ACOES: [&str; 4] = ["editar", "excluir", "encerrar", "visualizar"];

/// Full job posting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VagaResponse {
    pub id: String,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    #[serde(with = "serde_date")]
    pub data_publicacao: DateTime<FixedOffset>,
    pub tipo_vaga: TipoVaga,
    pub encerrada: bool,
    pub acoes: Vec<String>,
    pub details: Vec<VagasComCandidatoResponse>,
}

impl Default for VagaResponse {
    fn default() -> Self {
        Self {
            id: String::new(),
            titulo: String::new(),
            descricao: String::new(),
            localizacao: String::new(),
            data_publicacao: Utc::now().fixed_offset(),
            tipo_vaga: TipoVaga::default(),
            encerrada: false,
            acoes: Vec::new(),
            details: Vec::new(),
        }
    }
}

impl VagaResponse {
    /// Status label shown in the listing.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.encerrada { "Encerrada" } else { "Ativa" }
    }

    /// Confirmation shown before deleting the posting.
    #[must_use]
    pub fn delete_prompt(&self) -> String {
        format!("Tem certeza que deseja excluir a vaga \"{}\"?", self.titulo)
    }

    /// Confirmation shown before closing the posting to new applications.
    #[must_use]
    pub fn close_prompt(&self) -> String {
        format!("Tem certeza que deseja encerrar a vaga \"{}\"?", self.titulo)
    }

    /// Attach the listing row actions, as the listing screen does after load.
    #[must_use]
    pub fn with_listing_actions(mut self) -> Self {
        self.acoes = VAGA_ACOES.iter().map(ToString::to_string).collect();
        self
    }
}

/// A posting together with the candidates who applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VagasComCandidatoResponse {
    pub vaga_id: String,
    pub vaga_titulo: String,
    #[serde(with = "serde_date")]
    pub data_publicacao: DateTime<FixedOffset>,
    pub candidatos: Vec<CandidatoResumoResponse>,
}

impl Default for VagasComCandidatoResponse {
    fn default() -> Self {
        Self {
            vaga_id: String::new(),
            vaga_titulo: String::new(),
            data_publicacao: Utc::now().fixed_offset(),
            candidatos: Vec::new(),
        }
    }
}
