//! Downloadable PDF report, available behind the `pdf-report` feature

use crate::error::{Result, ResumeAnalyzerError};
use crate::output::formatter::text_report_lines;
use crate::output::report::AnalysisReport;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_TOP: f32 = 277.0;
const MARGIN_BOTTOM: f32 = 20.0;
const LINE_STEP: f32 = 7.0;

/// Renders the plain-text report sections onto A4 pages.
pub struct PdfFormatter;

impl PdfFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &AnalysisReport) -> Result<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new("AI Resume Analysis Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ResumeAnalyzerError::ReportGeneration(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ResumeAnalyzerError::ReportGeneration(e.to_string()))?;

        {
            let mut writer = PageWriter {
                doc: &doc,
                layer: doc.get_page(page).get_layer(layer),
                y: MARGIN_TOP,
            };

            for line in text_report_lines(report) {
                if line.is_empty() {
                    writer.advance(LINE_STEP / 2.0);
                    continue;
                }
                let (font, size) = if is_heading(&line) { (&bold, 13.0) } else { (&regular, 11.0) };
                writer.write_line(&line, font, size);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| ResumeAnalyzerError::ReportGeneration(e.to_string()))
    }
}

impl Default for PdfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_heading(line: &str) -> bool {
    line == "AI RESUME ANALYSIS REPORT" || line.ends_with(':')
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl PageWriter<'_> {
    fn write_line(&mut self, text: &str, font: &IndirectFontRef, size: f32) {
        if self.y < MARGIN_BOTTOM {
            self.new_page();
        }
        self.layer.use_text(text, size, Mm(MARGIN_LEFT), Mm(self.y), font);
        self.advance(LINE_STEP);
    }

    fn advance(&mut self, step: f32) {
        self.y -= step;
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = MARGIN_TOP;
    }
}
