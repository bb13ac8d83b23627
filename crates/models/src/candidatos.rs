//! Candidate (`candidato`) requests and responses.

use serde::{Deserialize, Serialize};
use talent_core::OptionStrExt;
use talent_core::validation::{
    ValidationError, validate_email, validate_name, validate_national_id, validate_phone,
};

use crate::paging::PageRequest;
use crate::query::QueryParams;

/// Gender as stored by the API, serialized as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[non_exhaustive]
pub enum Sexo {
    Masculino,
    Feminino,
    Outro,
    #[default]
    NaoInformado,
}

impl Sexo {
    /// Numeric code used on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Masculino => 1,
            Self::Feminino => 2,
            Self::Outro => 3,
            Self::NaoInformado => 4,
        }
    }

    /// Label shown in forms and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Masculino => "Masculino",
            Self::Feminino => "Feminino",
            Self::Outro => "Outro",
            Self::NaoInformado => "Não Informado",
        }
    }

    /// Noun phrase with article used in confirmation messages.
    #[must_use]
    pub const fn candidate_noun(self) -> &'static str {
        match self {
            Self::Feminino => "a candidata",
            _ => "o candidato",
        }
    }
}

impl std::fmt::Display for Sexo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Sexo {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Masculino),
            2 => Ok(Self::Feminino),
            3 => Ok(Self::Outro),
            4 => Ok(Self::NaoInformado),
            other => Err(format!("Unknown sexo code: {other}")),
        }
    }
}

impl From<Sexo> for u8 {
    fn from(sexo: Sexo) -> Self {
        sexo.code()
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Filter for the candidate listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CandidatoFilterRequest {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

impl QueryParams for CandidatoFilterRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in [
            ("Nome", &self.nome),
            ("Email", &self.email),
            ("Telefone", &self.telefone),
        ] {
            if let Some(value) = value.non_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        self.page.push_pairs(&mut pairs);
        pairs
    }
}

/// Body for creating or editing a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatoCriarEditarRequest {
    pub cpf: String,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub sexo: Sexo,
}

impl CandidatoCriarEditarRequest {
    /// Check required fields and identifier shapes, first violation wins.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_national_id(&self.cpf)?;
        validate_name(&self.nome)?;
        validate_email(&self.email)?;
        validate_phone(&self.telefone)
    }
}

impl From<&CandidatoResponse> for CandidatoCriarEditarRequest {
    fn from(candidato: &CandidatoResponse) -> Self {
        Self {
            cpf: candidato.cpf.clone(),
            nome: candidato.nome.clone(),
            email: candidato.email.clone(),
            telefone: candidato.telefone.clone(),
            sexo: candidato.sexo,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Row actions offered for every candidate.
pub const CANDIDATO_ACOES: [&str; 2] = ["editar", "excluir"];

/// Full candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatoResponse {
    pub id: String,
    pub cpf: String,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub sexo: Sexo,
    pub acoes: Vec<String>,
}

impl Default for CandidatoResponse {
    fn default() -> Self {
        Self {
            id: String::new(),
            cpf: String::new(),
            nome: String::new(),
            email: String::new(),
            telefone: String::new(),
            sexo: Sexo::default(),
            acoes: CANDIDATO_ACOES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CandidatoResponse {
    /// Confirmation prompt shown before deleting this candidate.
    #[must_use]
    pub fn delete_prompt(&self) -> String {
        format!(
            "Tem certeza que deseja excluir {} {}?",
            self.sexo.candidate_noun(),
            self.nome
        )
    }
}

/// Candidate summary embedded in application listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatoResumoResponse {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub telefone: String,
}
