use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, RunFonts};
use tracing::debug;

use crate::errors::RenderError;
use crate::export::sections::Sections;

/// OOXML sizes are in half-points.
const HEADING_SIZE_HALF_PT: usize = 28;
const BODY_SIZE_HALF_PT: usize = 24;
const BODY_FONT: &str = "Calibri";

/// Generate a DOCX document with two paragraphs per section:
/// a bold 14pt title run, then a 12pt Calibri run holding the body verbatim.
///
/// Newlines in the body become line breaks inside the same run.
pub fn render_docx(sections: &Sections) -> Result<Vec<u8>, RenderError> {
    let mut docx = Docx::new();

    for section in sections {
        docx = docx
            .add_paragraph(heading_paragraph(&section.title))
            .add_paragraph(body_paragraph(&section.body));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).map_err(RenderError::docx)?;

    let bytes = buf.into_inner();
    debug!(
        "Rendered DOCX: {} sections, {} bytes",
        sections.len(),
        bytes.len()
    );
    Ok(bytes)
}

fn heading_paragraph(title: &str) -> Paragraph {
    Paragraph::new().add_run(
        Run::new()
            .add_text(title)
            .bold()
            .size(HEADING_SIZE_HALF_PT),
    )
}

fn body_paragraph(body: &str) -> Paragraph {
    let mut run = Run::new()
        .size(BODY_SIZE_HALF_PT)
        .fonts(RunFonts::new().ascii(BODY_FONT).hi_ansi(BODY_FONT));

    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line.strip_suffix('\r').unwrap_or(line));
    }

    Paragraph::new().add_run(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sections::parse_sections;
    use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
    use serde_json::Value;

    struct ReadRun {
        text: String,
        bold: bool,
        /// Half-points, as stored in `w:sz`.
        size: Option<u64>,
        ascii_font: Option<String>,
    }

    fn read_run(run: &docx_rs::Run) -> ReadRun {
        let props: Value = serde_json::to_value(&run.run_property).unwrap();
        ReadRun {
            text: run
                .children
                .iter()
                .filter_map(|rc| match rc {
                    RunChild::Text(t) => Some(t.text.clone()),
                    RunChild::Break(_) => Some("\n".to_string()),
                    _ => None,
                })
                .collect(),
            bold: run.run_property.bold.is_some(),
            size: props["sz"].as_u64(),
            ascii_font: props["fonts"]["ascii"].as_str().map(String::from),
        }
    }

    /// Runs of every paragraph, one inner vec per paragraph.
    fn paragraphs(bytes: &[u8]) -> Vec<Vec<ReadRun>> {
        let docx = read_docx(bytes).unwrap();
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(
                    p.children
                        .iter()
                        .filter_map(|pc| match pc {
                            ParagraphChild::Run(run) => Some(read_run(run)),
                            _ => None,
                        })
                        .collect(),
                ),
                _ => None,
            })
            .collect()
    }

    fn paragraph_text(para: &[ReadRun]) -> String {
        para.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_output_is_a_zip_package() {
        let bytes = render_docx(&parse_sections("## Timeline\n2 weeks")).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_heading_and_body_paragraph_per_section_in_order() {
        let sections = parse_sections("## Cost Estimate\nTotal: $5000\n## Timeline\n2 weeks");
        let paras = paragraphs(&render_docx(&sections).unwrap());

        assert_eq!(paras.len(), 4);
        let texts: Vec<String> = paras.iter().map(|p| paragraph_text(p)).collect();
        assert_eq!(texts, vec!["Cost Estimate", "Total: $5000", "Timeline", "2 weeks"]);

        for (i, para) in paras.iter().enumerate() {
            assert_eq!(para.len(), 1, "paragraph {i} should hold one run");
            let run = &para[0];
            if i % 2 == 0 {
                assert!(run.bold);
                assert_eq!(run.size, Some(28));
                assert_eq!(run.ascii_font, None);
            } else {
                assert!(!run.bold);
                assert_eq!(run.size, Some(24));
                assert_eq!(run.ascii_font.as_deref(), Some("Calibri"));
            }
        }
    }

    #[test]
    fn test_empty_body_still_gets_a_body_paragraph() {
        let sections = parse_sections("## Cost\n### Labour\n40h");
        let paras = paragraphs(&render_docx(&sections).unwrap());

        assert_eq!(paras.len(), 4);
        let texts: Vec<String> = paras.iter().map(|p| paragraph_text(p)).collect();
        assert_eq!(texts, vec!["Cost", "", "Labour", "40h"]);
        let bold: Vec<bool> = paras.iter().map(|p| p.iter().any(|r| r.bold)).collect();
        assert_eq!(bold, vec![true, false, true, false]);
    }

    #[test]
    fn test_multiline_body_stays_in_one_run() {
        let sections = parse_sections("## WBS\n- Planning: 10h\n- Design: 20h");
        let paras = paragraphs(&render_docx(&sections).unwrap());
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[1].len(), 1);
        assert_eq!(paras[1][0].text, "- Planning: 10h\n- Design: 20h");
    }

    #[test]
    fn test_duplicate_headings_render_once() {
        let sections = parse_sections("## A\nfirst\n## A\nsecond");
        let paras = paragraphs(&render_docx(&sections).unwrap());
        let texts: Vec<String> = paras.iter().map(|p| paragraph_text(p)).collect();
        assert_eq!(texts, vec!["A", "second"]);
    }
}
