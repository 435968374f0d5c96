// scraped version scanner
//
// --- General form ---
//
// prefix numbers suffix
//
//     "v2.0.0"            ("v",        (2,0,0),   "")
//     "1.0.0-beta"        ("",         (1,0,0),   "-beta")
//     "RELEASE126"        ("RELEASE",  (126),     "")
//     "17-0.15.0-alpha1"  ("17-",      (0,15,0),  "-alpha1")
//     "curl-7_85_0"       ("curl-",    (7,85,0),  "")
//     "abc"               ("abc",      (),        "")
//
// --- Numeric runs ---
//
// A numeric run is one or more digit runs joined by delimiters. Consecutive
// delimiters collapse into one, a delimiter that is not followed by a digit
// ends the run and is left for the suffix.
//
//     "1.....1.alpha1"    run "1.....1"  -> (1,1), suffix ".alpha1"
//     "1."                run "1"        -> (1),   suffix "."
//
// Leading zeros carry no meaning: "15.05.01" -> (15,5,1)
//
// --- Choosing a run ---
//
// Scraped strings often contain several numeric runs (build numbers, dates,
// a release name with digits in it). The version is the first run that
// touches a '.', either by having several segments or by sitting right next
// to a dot. Later runs are build tails and never win, however long:
//
//     "v1-rev4-1.18.0-rc"       runs (1) (4) (1,18,0)        -> (1,18,0)
//     "1.2-2012.01.24"          runs (1,2) (2012,1,24)       -> (1,2)
//     "v1.2 (2023.10.16)"                                    -> (1,2)
//
// When that run is a single number, or there is none, a '_' run of two or
// more segments takes over (underscore release tags):
//
//     "curl-7_85_0"         '.' runs (7) (85) (0)      '_' run (7,85,0)
//
// Without either, the first digit run is the version: "RELEASE126" -> (126)
//
// Everything before the chosen run is the prefix, unless it is made only of
// delimiters (".1" has an empty prefix). Everything after the last digit of
// the run is the suffix.
//
// Digits are ASCII only, so every run boundary is also a char boundary.

pub(crate) const DOT: u8 = b'.';
pub(crate) const UNDERSCORE: u8 = b'_';

/// The structural split of one raw version string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parts<'a> {
    pub prefix: &'a str,
    pub numbers: Vec<u64>,
    pub suffix: &'a str,
}

/// Split a raw version string into prefix, numeric segments and suffix.
///
/// Never fails. A string without digits comes back as all prefix with no
/// numbers, an empty or whitespace-only string comes back empty.
pub fn split(raw: &str) -> Parts<'_> {

    if raw.trim().is_empty() {
        return Parts::default();
    }

    let Some(run) = select_run(raw) else {
        return Parts {
            prefix: raw,
            numbers: Vec::new(),
            suffix: "",
        };
    };

    let prefix = &raw[..run.start];
    let prefix = if prefix.bytes().all(|c| c == run.delimiter) {
        ""
    } else {
        prefix
    };

    Parts {
        prefix,
        numbers: run.numbers,
        suffix: &raw[run.end..],
    }
}

fn select_run(raw: &str) -> Option<NumericRun> {

    let dotted = scan_runs(raw, DOT).find(|run| touches_delimiter(raw.as_bytes(), run));
    if dotted.as_ref().is_some_and(|run| run.numbers.len() > 1) {
        return dotted;
    }

    let underscored = longest(scan_runs(raw, UNDERSCORE)).filter(|run| run.numbers.len() > 1);
    if let Some(run) = &underscored {
        tracing::trace!(raw, start = run.start, end = run.end, "using underscore delimited run");
        return underscored;
    }

    dotted.or_else(|| scan_runs(raw, DOT).next())
}

/// the run has several segments, or a delimiter right before or after it
fn touches_delimiter(v: &[u8], run: &NumericRun) -> bool {
    run.numbers.len() > 1
        || (run.start > 0 && v[run.start - 1] == run.delimiter)
        || v.get(run.end) == Some(&run.delimiter)
}

/// keep the run with the most segments, the first one wins a tie
fn longest<I: Iterator<Item = NumericRun>>(runs: I) -> Option<NumericRun> {
    runs.fold(None, |best, run| match best {
        Some(best) if best.numbers.len() >= run.numbers.len() => Some(best),
        _ => Some(run),
    })
}

fn digits_to_number(digits: &[u8]) -> u64 {
    // saturate rather than fail, the parser is total
    digits.iter().fold(0u64, |n, d| {
        n.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    })
}

// --- RunIterator ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRun {

    /// byte index of the first digit
    pub start: usize,

    /// byte index one past the last digit
    pub end: usize,

    pub numbers: Vec<u64>,

    pub delimiter: u8,
}

/// Iterates every numeric run of a string, left to right.
///
/// The cursor lives in the iterator, one per scanned string.
pub struct RunIterator<'a> {
    v: &'a [u8],
    idx: usize,
    delimiter: u8,
}

impl<'a> RunIterator<'a> {

    fn digits_end(&self, from: usize) -> usize {
        self.v[from..]
            .iter()
            .position(|c| !c.is_ascii_digit())
            .map_or(self.v.len(), |n| from + n)
    }

    fn delimiters_end(&self, from: usize) -> usize {
        self.v[from..]
            .iter()
            .position(|c| *c != self.delimiter)
            .map_or(self.v.len(), |n| from + n)
    }
}

impl<'a> Iterator for RunIterator<'a> {
    type Item = NumericRun;

    fn next(&mut self) -> Option<Self::Item> {

        let start = self.idx + self.v[self.idx..].iter().position(u8::is_ascii_digit)?;

        let mut numbers = Vec::new();
        let mut part_start = start;

        let end = loop {
            let part_end = self.digits_end(part_start);
            numbers.push(digits_to_number(&self.v[part_start..part_end]));

            // look past the delimiters, only a digit continues the run
            let next = self.delimiters_end(part_end);
            if next > part_end && next < self.v.len() && self.v[next].is_ascii_digit() {
                part_start = next;
            } else {
                break part_end;
            }
        };

        self.idx = end;

        Some(NumericRun {
            start,
            end,
            numbers,
            delimiter: self.delimiter,
        })
    }
}

pub fn scan_runs(v: &str, delimiter: u8) -> RunIterator<'_> {
    RunIterator {
        v: v.as_bytes(),
        idx: 0,
        delimiter,
    }
}

// ---/RunIterator ---------------------------------------------------

#[cfg(test)]
mod test {

    use super::*;

    fn assert_split(raw: &str, prefix: &str, numbers: &[u64], suffix: &str) {
        let parts = split(raw);
        assert_eq!(parts.prefix, prefix, "prefix of {raw:?}");
        assert_eq!(parts.numbers, numbers, "numbers of {raw:?}");
        assert_eq!(parts.suffix, suffix, "suffix of {raw:?}");
    }

    #[test]
    fn plain() {
        assert_split("1.2.3", "", &[1, 2, 3], "");
        assert_split("0.0", "", &[0, 0], "");
        assert_split("100", "", &[100], "");
        assert_split("15.05.01", "", &[15, 5, 1], "");
        assert_split("007", "", &[7], "");
    }

    #[test]
    fn prefixes() {
        assert_split("v2.0.0", "v", &[2, 0, 0], "");
        assert_split("v1", "v", &[1], "");
        assert_split("RELEASE126", "RELEASE", &[126], "");
        assert_split(".1", "", &[1], "");
        assert_split("..1.2", "", &[1, 2], "");
        assert_split("release-1.4", "release-", &[1, 4], "");
    }

    #[test]
    fn suffixes() {
        assert_split("1.0.0-beta", "", &[1, 0, 0], "-beta");
        assert_split("1.", "", &[1], ".");
        assert_split("1.1.alpha1", "", &[1, 1], ".alpha1");
        assert_split("1.....1.alpha1", "", &[1, 1], ".alpha1");
        assert_split("1.....1........alpha1", "", &[1, 1], "........alpha1");
        assert_split("1.2.48.sec06", "", &[1, 2, 48], ".sec06");
        assert_split(
            "2.10.0-M1-virtualized.rdev-4217-2012-01-24-g9118644",
            "",
            &[2, 10, 0],
            "-M1-virtualized.rdev-4217-2012-01-24-g9118644",
        );

        // dotted dates and build numbers after the version stay in the suffix
        assert_split("1.2-2012.01.24", "", &[1, 2], "-2012.01.24");
        assert_split("3.1-build.2023.10.16", "", &[3, 1], "-build.2023.10.16");
        assert_split("1.0.0-beta.1.2.3.4", "", &[1, 0, 0], "-beta.1.2.3.4");
        assert_split("1.-2.3.4", "", &[1], ".-2.3.4");
    }

    #[test]
    fn compound_prefixes() {
        assert_split("17-0.15.0-alpha1", "17-", &[0, 15, 0], "-alpha1");
        assert_split("v1-rev4-1.18.0-rc", "v1-rev4-", &[1, 18, 0], "-rc");
        assert_split("curl-7_85_0", "curl-", &[7, 85, 0], "");
        assert_split("OpenSSL_1_1_1w", "OpenSSL_", &[1, 1, 1], "w");

        // a dotted run with more than one segment beats an underscore run
        assert_split("pkg_2_1-3.4", "pkg_2_1-", &[3, 4], "");

        assert_split("v1.2 (2023.10.16)", "v", &[1, 2], " (2023.10.16)");
        assert_split("v2.0.0-20240101.1.2.3", "v", &[2, 0, 0], "-20240101.1.2.3");
        assert_split("x.5-1.2.3", "x.", &[5], "-1.2.3");
        assert_split("build42-final7", "build", &[42], "-final7");
    }

    #[test]
    fn no_numbers() {
        assert_split("", "", &[], "");
        assert_split("   ", "", &[], "");
        assert_split("abc", "abc", &[], "");
        assert_split("release-", "release-", &[], "");
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_split("99999999999999999999999.1", "", &[u64::MAX, 1], "");
    }

    #[test]
    fn non_ascii() {
        assert_split("版本1.2.3-测试", "版本", &[1, 2, 3], "-测试");
        // non-ascii digits are not digits
        assert_split("v١.٢", "v١.٢", &[], "");
    }

    #[test]
    fn runs() {
        let runs: Vec<_> = scan_runs("a1.2-b3..4.c", DOT).map(|r| r.numbers).collect();
        assert_eq!(runs, vec![vec![1, 2], vec![3, 4]]);

        let run = scan_runs("x10.20y", DOT).next().unwrap();
        assert_eq!((run.start, run.end), (1, 6));
    }
}
