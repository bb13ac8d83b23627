//! Plain-text rendering of API payloads.
//!
//! Tables are tab-separated so they paste cleanly into spreadsheets. CPF and
//! phone cells use the canonical display form when the stored value can be
//! formatted, and the raw stored value otherwise. Empty cells print `-`.
//! Tabs and line breaks inside a cell become spaces so every row keeps its
//! column count.

use std::io::{self, Write};

use chrono::{DateTime, FixedOffset};
use talent_core::{StrExt, format_national_id, format_phone_number};
use talent_models::{CandidatoResponse, PagedResponse, VagaResponse, VagasComCandidatoResponse};

const EMPTY_CELL: &str = "-";

/// CPF for display: canonical when representable, raw otherwise.
#[must_use]
pub fn display_cpf(raw: &str) -> String {
    format_national_id(Some(raw)).unwrap_or_else(|| raw.to_string())
}

/// Phone number for display: canonical when representable, raw otherwise.
#[must_use]
pub fn display_phone(raw: &str) -> String {
    format_phone_number(Some(raw)).unwrap_or_else(|| raw.to_string())
}

/// Publication date as `dd/mm/yyyy`, in the offset the API sent it with.
#[must_use]
pub fn display_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn flatten_cell(cell: &str) -> String {
    cell.trim().replace(['\t', '\n', '\r'], " ")
}

const fn noun(count: u64, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn write_row<W: Write>(out: &mut W, cells: &[&str]) -> io::Result<()> {
    let line = cells
        .iter()
        .map(|cell| flatten_cell(cell).or_str(EMPTY_CELL).to_string())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{line}")
}

/// Render a candidate listing.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_candidatos<W: Write>(
    page: &PagedResponse<CandidatoResponse>,
    out: &mut W,
) -> io::Result<()> {
    write_row(out, &["Nome", "CPF", "E-mail", "Telefone", "Gênero"])?;
    for candidato in &page.items {
        write_row(
            out,
            &[
                candidato.nome.as_str(),
                display_cpf(&candidato.cpf).as_str(),
                candidato.email.as_str(),
                display_phone(&candidato.telefone).as_str(),
                candidato.sexo.label(),
            ],
        )?;
    }
    writeln!(
        out,
        "{} de {} {}",
        page.items.len(),
        page.total_items,
        noun(page.total_items, "candidato", "candidatos")
    )
}

/// Render a job posting listing.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_vagas<W: Write>(page: &PagedResponse<VagaResponse>, out: &mut W) -> io::Result<()> {
    write_row(
        out,
        &["Vaga", "Localização", "Data de publicação", "Tipo de vaga", "Status"],
    )?;
    for vaga in &page.items {
        write_row(
            out,
            &[
                vaga.titulo.as_str(),
                vaga.localizacao.as_str(),
                display_date(&vaga.data_publicacao).as_str(),
                vaga.tipo_vaga.label(),
                vaga.status_label(),
            ],
        )?;
    }
    writeln!(
        out,
        "{} de {} {}",
        page.items.len(),
        page.total_items,
        noun(page.total_items, "vaga", "vagas")
    )
}

/// Render the candidates who applied to one posting.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_candidatura<W: Write>(
    candidatura: &VagasComCandidatoResponse,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "Vaga: {} (publicada em {})",
        flatten_cell(&candidatura.vaga_titulo).or_str(EMPTY_CELL),
        display_date(&candidatura.data_publicacao)
    )?;

    if candidatura.candidatos.is_empty() {
        return writeln!(out, "Nenhum candidato inscrito");
    }

    write_row(out, &["Nome", "E-mail", "Telefone"])?;
    for candidato in &candidatura.candidatos {
        write_row(
            out,
            &[
                candidato.nome.as_str(),
                candidato.email.as_str(),
                display_phone(&candidato.telefone).as_str(),
            ],
        )?;
    }
    let count = candidatura.candidatos.len() as u64;
    writeln!(out, "{count} {}", noun(count, "candidato", "candidatos"))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use talent_models::{CandidatoResumoResponse, Sexo, TipoVaga};

    use super::*;

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn publicacao() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn display_falls_back_to_raw_value() {
        assert_eq!(display_cpf("12345678901"), "123.456.789-01");
        assert_eq!(display_cpf("123"), "123");
        assert_eq!(display_phone("11999994444"), "(11) 99999-4444");
        assert_eq!(display_phone("Tel: 1133334444 ext 123"), "Tel: 1133334444 ext 123");
    }

    #[test]
    fn candidatos_table() {
        let page = PagedResponse {
            items: vec![
                CandidatoResponse {
                    id: "c1".into(),
                    nome: "Ana Souza".into(),
                    cpf: "98765432100".into(),
                    email: "ana@example.com".into(),
                    telefone: "21987654321".into(),
                    sexo: Sexo::Feminino,
                    ..Default::default()
                },
                CandidatoResponse {
                    id: "c2".into(),
                    nome: "Bruno Lima".into(),
                    cpf: "123.456".into(),
                    email: "bruno@example.com".into(),
                    ..Default::default()
                },
            ],
            total_items: 12,
            ..Default::default()
        };

        let text = render_to_string(|out| render_candidatos(&page, out));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Nome\tCPF\tE-mail\tTelefone\tGênero");
        assert_eq!(
            lines[1],
            "Ana Souza\t987.654.321-00\tana@example.com\t(21) 98765-4321\tFeminino"
        );
        assert_eq!(
            lines[2],
            "Bruno Lima\t123.456\tbruno@example.com\t-\tNão Informado"
        );
        assert_eq!(lines[3], "2 de 12 candidatos");
    }

    #[test]
    fn vagas_table() {
        let page = PagedResponse {
            items: vec![VagaResponse {
                titulo: "Desenvolvedor Rust".into(),
                localizacao: "Belo Horizonte".into(),
                data_publicacao: publicacao(),
                tipo_vaga: TipoVaga::Hibrido,
                encerrada: true,
                ..Default::default()
            }],
            total_items: 1,
            ..Default::default()
        };

        let text = render_to_string(|out| render_vagas(&page, out));
        assert_eq!(
            text,
            "Vaga\tLocalização\tData de publicação\tTipo de vaga\tStatus\n\
             Desenvolvedor Rust\tBelo Horizonte\t09/03/2025\tHíbrido\tEncerrada\n\
             1 de 1 vaga\n"
        );
    }

    #[test]
    fn candidatura_lists_applicants() {
        let candidatura = VagasComCandidatoResponse {
            vaga_id: "v1".into(),
            vaga_titulo: "Analista de Dados".into(),
            data_publicacao: publicacao(),
            candidatos: vec![CandidatoResumoResponse {
                id: "c1".into(),
                nome: "Carla".into(),
                email: "carla@example.com".into(),
                telefone: "3133334444".into(),
            }],
        };

        let text = render_to_string(|out| render_candidatura(&candidatura, out));
        assert_eq!(
            text,
            "Vaga: Analista de Dados (publicada em 09/03/2025)\n\
             Nome\tE-mail\tTelefone\n\
             Carla\tcarla@example.com\t(31) 3333-4444\n\
             1 candidato\n"
        );
    }

    #[test]
    fn candidatura_without_applicants() {
        let candidatura = VagasComCandidatoResponse {
            vaga_titulo: "Designer".into(),
            data_publicacao: publicacao(),
            ..Default::default()
        };

        let text = render_to_string(|out| render_candidatura(&candidatura, out));
        assert!(text.ends_with("Nenhum candidato inscrito\n"));
    }

    #[test]
    fn late_evening_offset_keeps_calendar_date() {
        let publicada = DateTime::parse_from_rfc3339("2025-01-15T23:30:00-03:00").unwrap();
        assert_eq!(display_date(&publicada), "15/01/2025");

        let candidatura = VagasComCandidatoResponse {
            vaga_titulo: "QA".into(),
            data_publicacao: publicada,
            ..Default::default()
        };
        let text = render_to_string(|out| render_candidatura(&candidatura, out));
        assert!(text.starts_with("Vaga: QA (publicada em 15/01/2025)\n"));
    }

    #[test]
    fn control_characters_do_not_split_cells() {
        let candidatura = VagasComCandidatoResponse {
            vaga_titulo: "Dev\nSenior".into(),
            data_publicacao: publicacao(),
            candidatos: vec![CandidatoResumoResponse {
                id: "c1".into(),
                nome: "Ana\tSouza".into(),
                email: "a@b.c\r\n".into(),
                telefone: "1133334444".into(),
            }],
            ..Default::default()
        };

        let text = render_to_string(|out| render_candidatura(&candidatura, out));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Vaga: Dev Senior (publicada em 09/03/2025)");
        assert_eq!(lines[2], "Ana Souza\ta@b.c\t(11) 3333-4444");
        assert_eq!(lines[2].split('\t').count(), lines[1].split('\t').count());
    }

    #[test]
    fn footers_agree_with_count() {
        let mut page = PagedResponse::<CandidatoResponse> {
            total_items: 1,
            ..Default::default()
        };
        let text = render_to_string(|out| render_candidatos(&page, out));
        assert!(text.ends_with("0 de 1 candidato\n"));

        page.total_items = 0;
        let text = render_to_string(|out| render_candidatos(&page, out));
        assert!(text.ends_with("0 de 0 candidatos\n"));
    }
}
