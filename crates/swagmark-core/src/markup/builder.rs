use super::MarkupLanguage;

/// Append-only markup document.
///
/// Every block method leaves the buffer ending in a blank line, so blocks can
/// be emitted in any order without further separators.
#[derive(Debug, Clone)]
pub struct MarkupDocBuilder {
    language: MarkupLanguage,
    buf: String,
}

impl MarkupDocBuilder {
    pub fn new(language: MarkupLanguage) -> Self {
        Self {
            language,
            buf: String::new(),
        }
    }

    /// The top-level document title.
    pub fn document_title(&mut self, title: &str) -> &mut Self {
        self.start_block();
        let marker = match self.language {
            MarkupLanguage::Asciidoc => "=",
            MarkupLanguage::Markdown => "#",
        };
        self.buf.push_str(&format!("{marker} {title}\n\n"));
        self
    }

    /// A section title. Level 1 sits directly below the document title;
    /// levels are clamped to `1..=5`.
    pub fn section_title(&mut self, level: usize, title: &str) -> &mut Self {
        self.start_block();
        let depth = level.clamp(1, 5) + 1;
        let marker = match self.language {
            MarkupLanguage::Asciidoc => "=".repeat(depth),
            MarkupLanguage::Markdown => "#".repeat(depth),
        };
        self.buf.push_str(&format!("{marker} {title}\n\n"));
        self
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.start_block();
        self.buf.push_str(text.trim_end());
        self.buf.push_str("\n\n");
        self
    }

    /// A single line ending in a hard line break. Consecutive lines form one
    /// block.
    pub fn text_line(&mut self, text: &str) -> &mut Self {
        let brk = match self.language {
            MarkupLanguage::Asciidoc => " +",
            MarkupLanguage::Markdown => "  ",
        };
        self.buf.push_str(text);
        self.buf.push_str(brk);
        self.buf.push('\n');
        self
    }

    /// A verbatim block.
    pub fn listing(&mut self, text: &str) -> &mut Self {
        self.start_block();
        let fence = match self.language {
            MarkupLanguage::Asciidoc => "----",
            MarkupLanguage::Markdown => "```",
        };
        self.buf
            .push_str(&format!("{fence}\n{}\n{fence}\n\n", text.trim_end()));
        self
    }

    pub fn unordered_list<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        self.start_block();
        for item in items {
            self.buf.push_str("* ");
            self.buf.push_str(item.as_ref());
            self.buf.push('\n');
        }
        self.buf.push('\n');
        self
    }

    /// A table whose first row is the header.
    pub fn table_with_header_row(
        &mut self,
        header: &[&str],
        rows: &[Vec<String>],
    ) -> &mut Self {
        self.start_block();
        match self.language {
            MarkupLanguage::Asciidoc => {
                self.buf.push_str("[options=\"header\"]\n|===\n");
                self.table_row(header.iter().copied());
                for row in rows {
                    self.table_row(row.iter().map(String::as_str));
                }
                self.buf.push_str("|===\n\n");
            }
            MarkupLanguage::Markdown => {
                self.table_row(header.iter().copied());
                self.buf.push('|');
                for _ in header {
                    self.buf.push_str("---|");
                }
                self.buf.push('\n');
                for row in rows {
                    self.table_row(row.iter().map(String::as_str));
                }
                self.buf.push('\n');
            }
        }
        self
    }

    /// The finished document, ending in exactly one newline.
    pub fn finish(self) -> String {
        let mut out = self.buf.trim_end().to_string();
        out.push('\n');
        out
    }

    fn table_row<'a>(&mut self, cells: impl Iterator<Item = &'a str>) {
        for cell in cells {
            let escaped = escape_cell(self.language, cell);
            self.buf.push('|');
            self.buf.push_str(&escaped);
        }
        if self.language == MarkupLanguage::Markdown {
            self.buf.push('|');
        }
        self.buf.push('\n');
    }

    fn start_block(&mut self) {
        if !self.buf.is_empty() && !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
    }
}

fn escape_cell(language: MarkupLanguage, cell: &str) -> String {
    let escaped = cell.replace('|', "\\|");
    match language {
        MarkupLanguage::Asciidoc => escaped,
        // A newline would end the Markdown table row.
        MarkupLanguage::Markdown => escaped
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
