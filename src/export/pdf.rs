//! Minimal single-page PDF writer for receipts.
//!
//! Produces an A4 page of left-aligned text using the standard Helvetica
//! fonts, which every viewer ships. Text is limited to the WinAnsi subset;
//! other characters are written as `?`.

use std::fmt::Write as _;

use crate::error::ExportError;

const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;
const MARGIN: u32 = 56;
const TITLE_SIZE: u32 = 20;
const BODY_SIZE: u32 = 12;
const LEADING: u32 = 18;
/// Characters per body line before wrapping
const WRAP_COLUMNS: usize = 80;

/// Lines that fit below the title
const MAX_BODY_LINES: usize = ((PAGE_HEIGHT - 2 * MARGIN - 2 * LEADING) / LEADING) as usize;

/// Render `title` and `lines` as a complete PDF file.
pub fn render_pdf(title: &str, lines: &[String]) -> Result<Vec<u8>, ExportError> {
    let wrapped: Vec<String> = lines.iter().flat_map(|l| wrap(l, WRAP_COLUMNS)).collect();
    if wrapped.len() > MAX_BODY_LINES {
        return Err(ExportError::RenderFailed {
            message: format!(
                "receipt has {} lines, page holds {}",
                wrapped.len(),
                MAX_BODY_LINES
            ),
        });
    }

    let content = page_content(title, &wrapped);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
        ),
        font("Helvetica-Bold"),
        font("Helvetica"),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{}\nendobj\n", index + 1, body);
    }

    let xref_start = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = write!(out, "{:010} 00000 n \n", offset);
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_start
    );

    Ok(out.into_bytes())
}

fn font(base: &str) -> String {
    format!("<< /Type /Font /Subtype /Type1 /BaseFont /{base} /Encoding /WinAnsiEncoding >>")
}

fn page_content(title: &str, lines: &[String]) -> String {
    let mut y = PAGE_HEIGHT - MARGIN - TITLE_SIZE;
    let mut content = String::new();
    let _ = write!(
        content,
        "BT /F1 {TITLE_SIZE} Tf {MARGIN} {y} Td ({}) Tj ET",
        escape(title)
    );
    y -= 2 * LEADING;

    for line in lines {
        if !line.is_empty() {
            let _ = write!(
                content,
                "\nBT /F2 {BODY_SIZE} Tf {MARGIN} {y} Td ({}) Tj ET",
                escape(line)
            );
        }
        y -= LEADING;
    }
    content
}

/// Escape a PDF literal string, replacing non-ASCII with `?`.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Split `line` on word boundaries into chunks of at most `width` chars.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word.char_indices().nth(width).map_or(word.len(), |(i, _)| i);
            let rest = word.split_off(split);
            lines.push(word);
            word = rest;
        }
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
