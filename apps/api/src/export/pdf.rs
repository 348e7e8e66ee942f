//! PDF renderer — one bold 14pt heading and one 12pt body paragraph per section.
//!
//! Documents are assembled directly with `lopdf`: A4 pages, standard Type1
//! Helvetica fonts (nothing embedded), greedy word wrap from the static width
//! tables, and a new page whenever the next line would cross the bottom margin.
//! Body text is written as-is; markdown inside it is not interpreted.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::errors::RenderError;
use crate::export::font_metrics::{get_metrics, PdfFont};
use crate::export::sections::Sections;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 72.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;
/// Baseline-to-baseline distance as a multiple of the font size.
const LEADING: f32 = 1.2;
const TAB_WIDTH: usize = 4;

/// A line of laid-out text or vertical space.
enum Block {
    Text { font: PdfFont, size: f32, text: String },
    Gap(f32),
}

/// Renders `sections` into PDF bytes.
pub fn render_pdf(sections: &Sections) -> Result<Vec<u8>, RenderError> {
    let blocks = layout(sections);
    let pages = paginate(&blocks);
    let bytes = write_document(&pages)?;
    debug!(
        "Rendered PDF: {} sections, {} pages, {} bytes",
        sections.len(),
        pages.len(),
        bytes.len()
    );
    Ok(bytes)
}

fn layout(sections: &Sections) -> Vec<Block> {
    let text_width = PAGE_WIDTH - 2.0 * MARGIN;
    let mut blocks = Vec::new();

    for section in sections {
        push_paragraph(
            &mut blocks,
            &section.title,
            PdfFont::HelveticaBold,
            HEADING_SIZE,
            text_width,
        );
        push_paragraph(
            &mut blocks,
            &section.body,
            PdfFont::Helvetica,
            BODY_SIZE,
            text_width,
        );
        blocks.push(Block::Gap(BODY_SIZE * LEADING));
    }

    blocks
}

fn push_paragraph(blocks: &mut Vec<Block>, text: &str, font: PdfFont, size: f32, width_pt: f32) {
    let metrics = get_metrics(font);
    let max_width_em = width_pt / size;
    let tab = " ".repeat(TAB_WIDTH);

    // an empty paragraph still occupies one (blank) line
    if text.lines().next().is_none() {
        blocks.push(Block::Text {
            font,
            size,
            text: String::new(),
        });
        return;
    }

    for source_line in text.lines() {
        let source_line = source_line.replace('\t', &tab);
        for line in metrics.wrap_line(&source_line, max_width_em) {
            blocks.push(Block::Text {
                font,
                size,
                text: line,
            });
        }
    }
}

/// Splits blocks into per-page operation lists.
fn paginate(blocks: &[Block]) -> Vec<Vec<Operation>> {
    let top = PAGE_HEIGHT - MARGIN;
    let mut pages = Vec::new();
    let mut current: Vec<Operation> = Vec::new();
    let mut y = top;

    for block in blocks {
        match block {
            Block::Gap(height) => {
                // gaps never open a page
                if y < top {
                    y -= height;
                }
            }
            Block::Text { font, size, text } => {
                let line_height = size * LEADING;
                if y - line_height < MARGIN && y < top {
                    pages.push(std::mem::take(&mut current));
                    y = top;
                }
                y -= line_height;
                current.extend(text_operations(*font, *size, MARGIN, y, text));
            }
        }
    }

    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }
    pages
}

fn text_operations(font: PdfFont, size: f32, x: f32, y: f32, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(font.resource_name().as_bytes().to_vec()),
                Object::Real(size.into()),
            ],
        ),
        Operation::new("Td", vec![Object::Real(x.into()), Object::Real(y.into())]),
        Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}

fn write_document(pages: &[Vec<Operation>]) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = lopdf::Dictionary::new();
    for font in [PdfFont::Helvetica, PdfFont::HelveticaBold] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content {
            operations: operations.clone(),
        };
        let encoded = content.encode().map_err(RenderError::pdf)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH.into()),
                Object::Real(PAGE_HEIGHT.into()),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(RenderError::pdf)?;
    Ok(buf)
}

/// Encodes text for a `WinAnsiEncoding` font; unmappable characters become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => match c {
                '€' => 0x80,
                '‚' => 0x82,
                'ƒ' => 0x83,
                '„' => 0x84,
                '…' => 0x85,
                '†' => 0x86,
                '‡' => 0x87,
                'ˆ' => 0x88,
                '‰' => 0x89,
                'Š' => 0x8A,
                '‹' => 0x8B,
                'Œ' => 0x8C,
                'Ž' => 0x8E,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '˜' => 0x98,
                '™' => 0x99,
                'š' => 0x9A,
                '›' => 0x9B,
                'œ' => 0x9C,
                'ž' => 0x9E,
                'Ÿ' => 0x9F,
                _ => b'?',
            },
        })
        .collect()
}
