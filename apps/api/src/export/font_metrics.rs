//! Static width tables for the two standard PDF fonts the exporter uses.
//!
//! Widths come from the Adobe core-font AFM files, expressed in em units
//! (AFM value / 1000). Tables cover ASCII 0x20..=0x7E; index = (char as usize) - 32.
//! Anything else is measured with `average_char_width`.

/// Standard Type1 fonts available in every PDF viewer without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
}

impl PdfFont {
    /// `BaseFont` name in the PDF font dictionary.
    pub fn base_font(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used by content-stream `Tf` operators.
    pub fn resource_name(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "F1",
            PdfFont::HelveticaBold => "F2",
        }
    }
}

/// Static character-width table for a font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word wrap of a single source line at `max_width_em`.
    ///
    /// A line that already fits is returned untouched. Otherwise leading
    /// indentation is kept on every produced line and words wider than a full
    /// line are split between characters. Always returns at least one line.
    pub fn wrap_line(&self, line: &str, max_width_em: f32) -> Vec<String> {
        if self.measure_str(line) <= max_width_em {
            return vec![line.to_string()];
        }

        let content = line.trim_start();
        let indent = &line[..line.len() - content.len()];
        let indent_w = self.measure_str(indent);
        let available = (max_width_em - indent_w).max(self.average_char_width);

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in content.split_whitespace() {
            for piece in self.split_long_word(word, available) {
                let piece_w = self.measure_str(&piece);
                if current.is_empty() {
                    current = piece;
                    current_width = piece_w;
                } else if current_width + self.space_width + piece_w > available {
                    lines.push(format!("{indent}{current}"));
                    current = piece;
                    current_width = piece_w;
                } else {
                    current.push(' ');
                    current.push_str(&piece);
                    current_width += self.space_width + piece_w;
                }
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(format!("{indent}{current}"));
        }
        lines
    }

    fn split_long_word(&self, word: &str, available: f32) -> Vec<String> {
        if self.measure_str(word) <= available {
            return vec![word.to_string()];
        }
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0_f32;
        for c in word.chars() {
            let mut buf = [0u8; 4];
            let w = self.measure_str(c.encode_utf8(&mut buf));
            if !piece.is_empty() && width + w > available {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(c);
            width += w;
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

/// Returns the static metric table for the given font.
pub fn get_metrics(font: PdfFont) -> &'static FontMetricTable {
    match font {
        PdfFont::Helvetica => &HELVETICA_TABLE,
        PdfFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.611,
    space_width: 0.278,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_known_widths() {
        let m = get_metrics(PdfFont::Helvetica);
        // H(0.722) + i(0.222)
        assert!((m.measure_str("Hi") - 0.944).abs() < 1e-4);
        assert!((m.measure_str(" ") - m.space_width).abs() < 1e-6);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Work Breakdown Structure";
        assert!(
            get_metrics(PdfFont::HelveticaBold).measure_str(text)
                > get_metrics(PdfFont::Helvetica).measure_str(text)
        );
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let m = get_metrics(PdfFont::Helvetica);
        assert!((m.measure_str("é") - m.average_char_width).abs() < 1e-6);
    }

    #[test]
    fn test_short_line_is_not_wrapped() {
        let m = get_metrics(PdfFont::Helvetica);
        assert_eq!(m.wrap_line("Total: $5000", 40.0), vec!["Total: $5000"]);
    }

    #[test]
    fn test_long_line_wraps_and_keeps_every_word() {
        let m = get_metrics(PdfFont::Helvetica);
        let line = "Backend developer hours cover API design, persistence, and integration work";
        let wrapped = m.wrap_line(line, 15.0);
        assert!(wrapped.len() > 1);
        for l in &wrapped {
            assert!(m.measure_str(l) <= 15.0 + 1e-4, "line too wide: {l}");
        }
        assert_eq!(wrapped.join(" "), line);
    }

    #[test]
    fn test_indent_is_repeated_on_continuation_lines() {
        let m = get_metrics(PdfFont::Helvetica);
        let wrapped = m.wrap_line("    - one two three four five six", 6.0);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.starts_with("    ")));
    }

    #[test]
    fn test_overlong_word_is_split() {
        let m = get_metrics(PdfFont::Helvetica);
        let word = "a".repeat(100);
        let wrapped = m.wrap_line(&word, 10.0);
        assert!(wrapped.len() > 1);
        assert_eq!(wrapped.concat(), word);
    }

    #[test]
    fn test_fitting_line_keeps_inner_spacing() {
        let m = get_metrics(PdfFont::Helvetica);
        assert_eq!(m.wrap_line("| QA   | 20    |", 40.0), vec!["| QA   | 20    |"]);
    }

    #[test]
    fn test_blank_line_yields_one_empty_line() {
        let m = get_metrics(PdfFont::Helvetica);
        assert_eq!(m.wrap_line("", 10.0), vec![String::new()]);
    }
}
