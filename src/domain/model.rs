use std::collections::BTreeMap;
use std::fmt::Write;

pub const DEFAULT_MARKER: char = '*';
pub const DEFAULT_MIN_WIDTH: usize = 15;

/// Item name to occurrence count. Keys are exact, untrimmed strings and
/// iterate in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub found: bool,
    pub count: usize,
}

/// 表格與直方圖的排版設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub marker: char,
    pub min_width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            min_width: DEFAULT_MIN_WIDTH,
        }
    }
}

impl FrequencyTable {
    /// Counts every non-empty line. Blank lines are skipped; nothing is trimmed.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for line in lines {
            let item = line.as_ref();
            if item.is_empty() {
                continue;
            }
            match counts.get_mut(item) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(item.to_string(), 1);
                }
            }
        }
        Self { counts }
    }

    /// `str::lines` drops both `\n` and `\r\n` terminators.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn lookup(&self, item: &str) -> Lookup {
        match self.counts.get(item) {
            Some(&count) => Lookup { found: true, count },
            None => Lookup {
                found: false,
                count: 0,
            },
        }
    }

    pub fn list_all(&self) -> Vec<(&str, usize)> {
        self.entries().collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(item, &count)| (item.as_str(), count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Item column width: the configured minimum, widened for longer names.
    pub fn column_width(&self, min_width: usize) -> usize {
        self.counts
            .keys()
            .map(|item| item.chars().count())
            .fold(min_width, usize::max)
    }

    pub fn render_listing(&self, options: &DisplayOptions) -> String {
        let width = self.column_width(options.min_width);
        let mut out = String::new();
        for (item, count) in self.entries() {
            let _ = writeln!(out, "{:<width$} {}", item, count, width = width);
        }
        out
    }

    pub fn render_histogram(&self, options: &DisplayOptions) -> String {
        let width = self.column_width(options.min_width);
        let mut out = String::new();
        for (item, count) in self.entries() {
            let bar: String = std::iter::repeat(options.marker).take(count).collect();
            let _ = writeln!(out, "{:<width$} {}", item, bar, width = width);
        }
        out
    }

    /// Backup file body: `"<item> <count>"` per line in listing order.
    pub fn to_persisted(&self) -> String {
        let mut out = String::new();
        for (item, count) in self.entries() {
            let _ = writeln!(out, "{} {}", item, count);
        }
        out
    }

    /// Splits on the last space so item names containing spaces survive.
    pub fn parse_persisted_line(line: &str) -> Option<(&str, usize)> {
        let (item, count) = line.rsplit_once(' ')?;
        let count = count.parse().ok()?;
        Some((item, count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
