//! PDF rendering of reports with lopdf

use crate::Result;
use crate::constants::{BOLD_FONT_KEY, REGULAR_FONT_KEY};
use crate::error::ErgoError;
use crate::font::{FontMetrics, HelveticaMetrics};
use crate::report::{Entry, Report};
use crate::style::{Color, ReportStyle};
use crate::text::wrap_text;
use lopdf::{
    Document, Object, ObjectId,
    content::{Content, Operation},
    dictionary,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument, trace};

/// Extension trait for lopdf::Document to draw ergonomics reports
pub trait ReportDrawing {
    /// Draw a report with its top-left corner at `position` on a page.
    ///
    /// When the report reaches the bottom margin, drawing continues on new
    /// pages that share the source page's MediaBox and Resources. The page
    /// must reference fonts named `F1` and `F1-Bold` (see
    /// [`new_report_document`]).
    ///
    /// # Returns
    /// The ID of the last page drawn on
    fn draw_report(
        &mut self,
        page_id: ObjectId,
        report: &Report,
        style: &ReportStyle,
        position: (f32, f32),
    ) -> Result<ObjectId> {
        self.draw_report_with_metrics(page_id, report, style, position, &HelveticaMetrics)
    }

    /// Draw a report, measuring text with the given font metrics
    fn draw_report_with_metrics(
        &mut self,
        page_id: ObjectId,
        report: &Report,
        style: &ReportStyle,
        position: (f32, f32),
        metrics: &dyn FontMetrics,
    ) -> Result<ObjectId>;

    /// Create the operations for the first page without adding them to the document
    ///
    /// Lines that would overflow onto later pages are not included.
    fn create_report_content(
        &self,
        report: &Report,
        style: &ReportStyle,
        position: (f32, f32),
    ) -> Result<Vec<Operation>> {
        self.create_report_content_with_metrics(report, style, position, &HelveticaMetrics)
    }

    /// Create the first page's operations using the given font metrics
    fn create_report_content_with_metrics(
        &self,
        report: &Report,
        style: &ReportStyle,
        position: (f32, f32),
        metrics: &dyn FontMetrics,
    ) -> Result<Vec<Operation>>;
}

impl ReportDrawing for Document {
    #[instrument(skip(self, report, style, metrics), fields(sections = report.sections.len()))]
    fn draw_report_with_metrics(
        &mut self,
        page_id: ObjectId,
        report: &Report,
        style: &ReportStyle,
        position: (f32, f32),
        metrics: &dyn FontMetrics,
    ) -> Result<ObjectId> {
        if !matches!(self.get_object(page_id), Ok(Object::Dictionary(_))) {
            return Err(ErgoError::PageNotFound(page_id));
        }

        let lines = layout_report(report, style, metrics);
        let pages = paginate(&lines, position.1, style);
        debug!("Report laid out as {} lines on {} pages", lines.len(), pages.len());

        let mut current_page = page_id;
        for (index, placed) in pages.iter().enumerate() {
            if index > 0 {
                current_page = create_new_page(self, current_page, style)?;
            }
            if placed.is_empty() {
                continue;
            }
            let operations = page_operations(placed, position.0, style, metrics);
            add_operations_to_page(self, current_page, operations)?;
        }

        Ok(current_page)
    }

    fn create_report_content_with_metrics(
        &self,
        report: &Report,
        style: &ReportStyle,
        position: (f32, f32),
        metrics: &dyn FontMetrics,
    ) -> Result<Vec<Operation>> {
        let lines = layout_report(report, style, metrics);
        let pages = paginate(&lines, position.1, style);
        Ok(pages
            .first()
            .map(|placed| page_operations(placed, position.0, style, metrics))
            .unwrap_or_default())
    }
}

/// Create a one-page document with the report fonts registered.
///
/// # Returns
/// The document and the ID of its single page
pub fn new_report_document(style: &ReportStyle) -> Result<(Document, ObjectId)> {
    let mut doc = Document::with_version("1.5");
    let bold_font_name = style.bold_font_name();
    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        style.page_width.into(),
        style.page_height.into(),
    ];

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![],
        "Count" => 0,
        "MediaBox" => media_box.clone(),
    });

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => style.font_name.as_str(),
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => bold_font_name.as_str(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT_KEY => font_id,
            BOLD_FONT_KEY => bold_font_id,
        },
    });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box,
        "Resources" => resources_id,
    });
    append_page(&mut doc, pages_id, page_id)?;

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok((doc, page_id))
}

/// Render a report into a new document using the style's page origin
pub fn render_report(report: &Report, style: &ReportStyle) -> Result<Document> {
    render_report_with_metrics(report, style, &HelveticaMetrics)
}

/// Render a report into a new document, measuring text with `metrics`
pub fn render_report_with_metrics(
    report: &Report,
    style: &ReportStyle,
    metrics: &dyn FontMetrics,
) -> Result<Document> {
    let (mut doc, page_id) = new_report_document(style)?;
    doc.draw_report_with_metrics(page_id, report, style, style.origin(), metrics)?;
    Ok(doc)
}

/// Render a report and write it as a PDF file at `path`
#[instrument(skip(report, style, metrics, path), fields(path = %path.as_ref().display()))]
pub fn save_report_pdf<P: AsRef<Path>>(
    report: &Report,
    style: &ReportStyle,
    metrics: &dyn FontMetrics,
    path: P,
) -> Result<()> {
    let mut doc = render_report_with_metrics(report, style, metrics)?;
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    doc.save_to(&mut writer)?;
    writer.flush()?;
    debug!("Saved report with {} pages", doc.get_pages().len());
    Ok(())
}

/// A single visual line of a laid-out report
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Title(String),
    Heading(String),
    Value { label: String, value: String },
    Note { text: String, bullet: bool },
}

/// A line together with the vertical space it takes, including spacing above
#[derive(Debug, Clone)]
struct LaidOutLine {
    line: Line,
    advance: f32,
    /// Draw a rule under the line
    ruled: bool,
}

/// Turn a report into visual lines, wrapping notes to the content width
fn layout_report(
    report: &Report,
    style: &ReportStyle,
    metrics: &dyn FontMetrics,
) -> Vec<LaidOutLine> {
    let body_advance = style.line_height(style.body_font_size);
    let bullet_indent = metrics.text_width("- ", style.body_font_size);
    let note_width = style.content_width() - bullet_indent;

    let mut lines = vec![LaidOutLine {
        line: Line::Title(report.title.clone()),
        advance: style.line_height(style.title_font_size),
        ruled: false,
    }];

    for section in &report.sections {
        lines.push(LaidOutLine {
            line: Line::Heading(section.title.clone()),
            advance: style.section_spacing + style.line_height(style.heading_font_size),
            ruled: style.rule_color.is_some(),
        });

        for entry in &section.entries {
            match entry {
                Entry::Value { label, value } => lines.push(LaidOutLine {
                    line: Line::Value {
                        label: label.clone(),
                        value: value.clone(),
                    },
                    advance: body_advance,
                    ruled: false,
                }),
                Entry::Note(note) => {
                    let wrapped = wrap_text(note, note_width, style.body_font_size, metrics);
                    for (i, text) in wrapped.into_iter().enumerate() {
                        lines.push(LaidOutLine {
                            line: Line::Note {
                                text,
                                bullet: i == 0,
                            },
                            advance: body_advance,
                            ruled: false,
                        });
                    }
                }
            }
        }
    }

    trace!("Laid out {} lines", lines.len());
    lines
}

/// Assign baselines to lines, starting a new page when the bottom margin is reached.
///
/// The first page is left empty when not even the first line fits below
/// `start_y`. A line taller than a whole page is placed alone on a new page.
fn paginate<'a>(
    lines: &'a [LaidOutLine],
    start_y: f32,
    style: &ReportStyle,
) -> Vec<Vec<(&'a LaidOutLine, f32)>> {
    let page_top = style.page_height - style.top_margin;
    let mut pages = vec![Vec::new()];
    let mut y = start_y;
    // The caller's page may start anywhere; only pages we create start at the top
    let mut fresh_page = false;

    for line in lines {
        let fits = y - line.advance >= style.bottom_margin;
        let page_is_empty = pages.last().is_none_or(Vec::is_empty);
        if !fits && !(page_is_empty && fresh_page) {
            pages.push(Vec::new());
            y = page_top;
            fresh_page = true;
        }
        y -= line.advance;
        if let Some(page) = pages.last_mut() {
            page.push((line, y));
        }
    }

    pages
}

/// Generate drawing operations for one page of placed lines
fn page_operations(
    placed: &[(&LaidOutLine, f32)],
    x: f32,
    style: &ReportStyle,
    metrics: &dyn FontMetrics,
) -> Vec<Operation> {
    let mut operations = Vec::new();
    let bullet_indent = metrics.text_width("- ", style.body_font_size);

    for (laid_out, y) in placed {
        let y = *y;
        match &laid_out.line {
            Line::Title(text) => operations.extend(text_operations(
                text,
                x,
                y,
                BOLD_FONT_KEY,
                style.title_font_size,
                style.heading_color,
            )),
            Line::Heading(text) => operations.extend(text_operations(
                text,
                x,
                y,
                BOLD_FONT_KEY,
                style.heading_font_size,
                style.heading_color,
            )),
            Line::Value { label, value } => {
                operations.extend(text_operations(
                    label,
                    x,
                    y,
                    REGULAR_FONT_KEY,
                    style.body_font_size,
                    style.text_color,
                ));
                operations.extend(text_operations(
                    value,
                    x + style.value_column,
                    y,
                    BOLD_FONT_KEY,
                    style.body_font_size,
                    style.text_color,
                ));
            }
            Line::Note { text, bullet } => {
                if *bullet {
                    operations.extend(text_operations(
                        "-",
                        x,
                        y,
                        REGULAR_FONT_KEY,
                        style.body_font_size,
                        style.text_color,
                    ));
                }
                operations.extend(text_operations(
                    text,
                    x + bullet_indent,
                    y,
                    REGULAR_FONT_KEY,
                    style.body_font_size,
                    style.text_color,
                ));
            }
        }

        if laid_out.ruled {
            if let Some(color) = style.rule_color {
                let rule_y = y - style.body_font_size * 0.3;
                operations.extend(rule_operations(
                    x,
                    x + style.content_width(),
                    rule_y,
                    color,
                    style.rule_width,
                ));
            }
        }
    }

    trace!("Generated {} operations", operations.len());
    operations
}

/// Operations showing one line of text at a baseline
fn text_operations(
    text: &str,
    x: f32,
    y: f32,
    font_key: &str,
    font_size: f32,
    color: Color,
) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font_key.as_bytes().to_vec()), font_size.into()],
        ),
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Operations stroking a horizontal rule
fn rule_operations(start_x: f32, end_x: f32, y: f32, color: Color, width: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![width.into()]),
        Operation::new("m", vec![start_x.into(), y.into()]),
        Operation::new("l", vec![end_x.into(), y.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Encode text for a WinAnsiEncoding Type1 font.
///
/// Latin-1 code points map to the same byte; anything else becomes `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
            _ => b'?',
        })
        .collect()
}

/// Encode operations and append them to a page's content
fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}

/// Add a page to the end of a Pages tree node
fn append_page(doc: &mut Document, pages_id: ObjectId, page_id: ObjectId) -> Result<()> {
    let Ok(Object::Dictionary(pages_dict)) = doc.get_object_mut(pages_id) else {
        return Err(ErgoError::Drawing("Invalid Pages object".to_string()));
    };

    if let Ok(Object::Array(kids)) = pages_dict.get_mut(b"Kids") {
        kids.push(page_id.into());
    }
    let count = match pages_dict.get(b"Count") {
        Ok(Object::Integer(count)) => *count,
        _ => 0,
    };
    pages_dict.set("Count", Object::Integer(count + 1));

    Ok(())
}

/// Create a page after `source_page_id` sharing its MediaBox and Resources
fn create_new_page(
    doc: &mut Document,
    source_page_id: ObjectId,
    style: &ReportStyle,
) -> Result<ObjectId> {
    debug!("Creating new page for report continuation");

    let Ok(Object::Dictionary(page_dict)) = doc.get_object(source_page_id) else {
        return Err(ErgoError::PageNotFound(source_page_id));
    };

    let Ok(Object::Reference(pages_id)) = page_dict.get(b"Parent") else {
        return Err(ErgoError::Drawing(
            "Could not find parent Pages object".to_string(),
        ));
    };
    let pages_id = *pages_id;

    let media_box = page_dict.get(b"MediaBox").ok().cloned().unwrap_or_else(|| {
        Object::Array(vec![
            0.into(),
            0.into(),
            style.page_width.into(),
            style.page_height.into(),
        ])
    });
    let resources = page_dict.get(b"Resources").ok().cloned();

    let mut new_page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box,
    };
    if let Some(resources) = resources {
        new_page_dict.set("Resources", resources);
    }

    let new_page_id = doc.add_object(new_page_dict);
    append_page(doc, pages_id, new_page_id)?;

    trace!("Created new page {:?}", new_page_id);
    Ok(new_page_id)
}
