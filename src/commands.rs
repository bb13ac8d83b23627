//! Subcommand execution.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use talent_core::{FormatError, try_format_national_id, try_format_phone_number};
use talent_models::{CandidatoResponse, PagedResponse, VagaResponse, VagasComCandidatoResponse};
use tracing::{debug, info, warn};

use crate::config::Command;
use crate::render;

/// Run a subcommand, reading payloads from `stdin` when the input is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read or parsed, if output fails,
/// or if a strict format request gets a value that cannot be formatted.
pub fn run<R: Read, W: Write>(command: &Command, stdin: R, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Cpf { value, strict } => {
            format_identifier(try_format_national_id, value, *strict, out)
        }
        Command::Telefone { value, strict } => {
            format_identifier(try_format_phone_number, value, *strict, out)
        }
        Command::Candidatos { input } => {
            let page: PagedResponse<CandidatoResponse> = read_payload(input, stdin)?;
            info!(items = page.items.len(), total = page.total_items, "Rendering candidates");
            render::render_candidatos(&page, out).context("Failed to write candidates")
        }
        Command::Vagas { input } => {
            let page: PagedResponse<VagaResponse> = read_payload(input, stdin)?;
            info!(items = page.items.len(), total = page.total_items, "Rendering job postings");
            render::render_vagas(&page, out).context("Failed to write job postings")
        }
        Command::Candidatura { input } => {
            let candidatura: VagasComCandidatoResponse = read_payload(input, stdin)?;
            info!(
                vaga_id = %candidatura.vaga_id,
                candidatos = candidatura.candidatos.len(),
                "Rendering applications"
            );
            render::render_candidatura(&candidatura, out).context("Failed to write applications")
        }
    }
}

fn format_identifier<F, W>(
    format: F,
    value: &str,
    strict: bool,
    out: &mut W,
) -> anyhow::Result<()>
where
    F: Fn(Option<&str>) -> Result<String, FormatError>,
    W: Write,
{
    let line = match format(Some(value)) {
        Ok(formatted) => {
            debug!(%formatted, "Formatted identifier");
            formatted
        }
        Err(e) if strict => return Err(e.into()),
        Err(e) => {
            warn!(kind = %e.kind(), error = %e, "Printing raw value");
            value.to_string()
        }
    };

    writeln!(out, "{line}").context("Failed to write output")
}

fn read_payload<T: DeserializeOwned, R: Read>(input: &Path, stdin: R) -> anyhow::Result<T> {
    if input.as_os_str() == "-" {
        debug!("Reading payload from stdin");
        return serde_json::from_reader(BufReader::new(stdin))
            .context("Failed to parse JSON payload from stdin");
    }

    let file = File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON payload from {}", input.display()))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use talent_core::IdentifierKind;

    use super::*;

    fn run_to_string(command: &Command, stdin: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(command, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn cpf_prints_canonical_form() {
        let command = Command::Cpf {
            value: "123 456 789 01".into(),
            strict: false,
        };
        assert_eq!(run_to_string(&command, "").unwrap(), "123.456.789-01\n");
    }

    #[test]
    fn lenient_mode_echoes_raw_value() {
        let command = Command::Telefone {
            value: "1133334".into(),
            strict: false,
        };
        assert_eq!(run_to_string(&command, "").unwrap(), "1133334\n");
    }

    #[test]
    fn strict_mode_fails_with_format_error() {
        let command = Command::Cpf {
            value: "12345678".into(),
            strict: true,
        };
        let err = run_to_string(&command, "").unwrap_err();
        let format_error = err.downcast_ref::<FormatError>().unwrap();
        assert_eq!(format_error.kind(), IdentifierKind::NationalId);
    }

    #[test]
    fn telefone_mobile() {
        let command = Command::Telefone {
            value: "(11) 99999-4444".into(),
            strict: true,
        };
        assert_eq!(run_to_string(&command, "").unwrap(), "(11) 99999-4444\n");
    }

    #[test]
    fn candidatos_from_stdin() {
        let payload = r#"{
            "items": [
                {"id": "c1", "nome": "Ana", "cpf": "12345678901", "email": "ana@example.com",
                 "telefone": "1133334444", "sexo": 2}
            ],
            "totalItems": 1
        }"#;
        let command = Command::Candidatos {
            input: PathBuf::from("-"),
        };
        let text = run_to_string(&command, payload).unwrap();
        assert!(text.contains("Ana\t123.456.789-01\tana@example.com\t(11) 3333-4444\tFeminino"));
        assert!(text.ends_with("1 de 1 candidato\n"));
    }

    #[test]
    fn vagas_from_stdin() {
        let payload = r#"{"items": [{"titulo": "Dev", "localizacao": "Recife",
            "dataPublicacao": "2025-01-02T00:00:00Z", "tipoVaga": 1}], "totalItems": 3}"#;
        let command = Command::Vagas {
            input: PathBuf::from("-"),
        };
        let text = run_to_string(&command, payload).unwrap();
        assert!(text.contains("Dev\tRecife\t02/01/2025\tRemoto\tAtiva"));
    }

    #[test]
    fn candidatura_from_stdin() {
        let payload = r#"{"vagaId": "v1", "vagaTitulo": "QA", "dataPublicacao": "2025-05-20",
            "candidatos": [{"id": "c1", "nome": "Davi", "email": "davi@example.com",
            "telefone": "61999887766"}]}"#;
        let command = Command::Candidatura {
            input: PathBuf::from("-"),
        };
        let text = run_to_string(&command, payload).unwrap();
        assert!(text.starts_with("Vaga: QA (publicada em 20/05/2025)\n"));
        assert!(text.contains("Davi\tdavi@example.com\t(61) 99988-7766"));
    }

    #[test]
    fn telefone_strict_reports_phone_kind() {
        let command = Command::Telefone {
            value: "123.456.789-01".into(),
            strict: true,
        };
        let text = run_to_string(&command, "").unwrap();
        assert_eq!(text, "(12) 34567-8901\n");

        let command = Command::Telefone {
            value: "1133334".into(),
            strict: true,
        };
        let err = run_to_string(&command, "").unwrap_err();
        let format_error = err.downcast_ref::<FormatError>().unwrap();
        assert_eq!(format_error.kind(), IdentifierKind::Phone);
    }

    #[test]
    fn candidatura_keeps_publication_offset() {
        let payload = r#"{"vagaId": "v1", "vagaTitulo": "QA",
            "dataPublicacao": "2025-01-15T23:30:00-03:00"}"#;
        let command = Command::Candidatura {
            input: PathBuf::from("-"),
        };
        let text = run_to_string(&command, payload).unwrap();
        assert!(text.starts_with("Vaga: QA (publicada em 15/01/2025)\n"));
    }

    #[test]
    fn malformed_payload_reports_context() {
        let command = Command::Vagas {
            input: PathBuf::from("-"),
        };
        let err = run_to_string(&command, "not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON payload"));
    }

    #[test]
    fn missing_file_reports_path() {
        let command = Command::Candidatos {
            input: PathBuf::from("/nonexistent/candidatos.json"),
        };
        let err = run(&command, io::empty(), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/candidatos.json"));
    }
}
