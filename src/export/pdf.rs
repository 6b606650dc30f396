use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Helvetica without an embedded font only covers the standard encoding:
/// anything outside printable ASCII is replaced.
fn pdf_text(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '…' => '.',
            '–' | '—' => '-',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '?',
        })
        .collect()
}

/// Paginated table writer (A4 landscape, Helvetica).
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            next_id: 4,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// New page plus its content stream
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let text = pdf_text(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, col_widths: &[f32], row: &[String], font_size: f32) {
        let mut x = self.margin;

        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        for (text, w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            content.rect(x, y, *w, self.row_h);
            x += w;
        }
        content.stroke();
        content.restore_state();
    }

    /// Column widths from header and content, scaled down to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 6.5 + 8.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * 5.2 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Data rows that fit below the title and the header row.
    fn rows_per_page(&self) -> usize {
        let usable = self.page_h - 2.0 * self.margin - 30.0 - self.row_h;
        ((usable / self.row_h).floor() as usize).max(1)
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize, pages: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {} / {}", page, pages);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 25.0,
            self.font_size,
            &pg,
        );
    }

    /// Multi-page table with a title. An empty table still gets one page
    /// with the header row.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let chunks: Vec<&[Vec<String>]> = if rows.is_empty() {
            vec![&rows[..0]]
        } else {
            rows.chunks(self.rows_per_page()).collect()
        };
        let pages = chunks.len();

        for (idx, chunk) in chunks.into_iter().enumerate() {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, idx + 1, pages);

            let mut y = self.page_h - self.margin - 30.0;

            self.fill_band(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            for (i, row) in chunk.iter().enumerate() {
                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.96);
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                y -= self.row_h;
            }

            self.finalize_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
