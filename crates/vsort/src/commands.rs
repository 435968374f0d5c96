use std::io::Write;

use anyhow::{Context, Result};
use camino::Utf8Path;
use version::Version;
use version_group::{Bound, InclusionPolicy};

use crate::args;
use crate::config::Config;

/// versions from --file, else the positional arguments, else stdin
pub fn input_strings(matches: &clap::ArgMatches) -> Result<Vec<String>> {

    if let Some(path) = matches.get_one::<String>("file") {
        return version_report::read_version_strings_from_file(Utf8Path::new(path));
    }

    if let Some(versions) = args::pull_many_opt(matches, "versions") {
        return Ok(versions.into_iter().cloned().collect());
    }

    tracing::debug!("reading versions from stdin");
    version_report::read_version_strings(std::io::stdin().lock()).context("failed to read stdin")
}

/// `vsort parse`
pub fn parse_cmd<W: Write>(out: W, raws: &[String], json: bool) -> Result<()> {

    let versions = version::parse_all(raws);

    if json {
        let mut out = out;
        for v in &versions {
            writeln!(out, "{}", v.to_json()?)?;
        }
        return Ok(());
    }

    let mut tw = tabwriter::TabWriter::new(out);
    writeln!(&mut tw, "raw\tprefix\tnumbers\tsuffix\tvalid")?;
    for v in &versions {
        writeln!(&mut tw, "{}\t{}\t{}\t{}\t{}", v.raw(), v.prefix(), v.numbers(), v.suffix(), v.is_valid())?;
    }
    tw.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct SortOptions {
    pub skip_invalid: bool,
    pub semver: bool,
    pub descending: bool,
}

impl SortOptions {
    pub fn from_matches(matches: &clap::ArgMatches, config: &Config) -> Self {
        let descending = if matches.get_flag("ascending") {
            false
        } else if matches.get_flag("descending") {
            true
        } else {
            config.sort.descending
        };
        Self {
            skip_invalid: matches.get_flag("skip-invalid") || config.sort.skip_invalid,
            semver: matches.get_flag("semver"),
            descending,
        }
    }
}

/// `vsort sort`
pub fn sort_cmd<W: Write>(mut out: W, raws: &[String], opts: SortOptions) -> Result<()> {

    let mut versions = version::parse_all(raws);

    if opts.skip_invalid {
        versions.retain(Version::is_valid);

        if opts.semver {
            versions.retain(Version::is_semver);
        }
    } else {
        let mut err = 0;
        for v in &versions {
            if !v.is_valid() {
                eprintln!("error: invalid version string: {}", v);
                err += 1;
            }
            if opts.semver && !v.is_semver() {
                eprintln!("error: version is not semver: {}", v);
                err += 1;
            }
        }
        if err > 0 {
            anyhow::bail!("{err} versions rejected");
        }
    }

    let mut sorted = version_group::sort(versions);

    if opts.descending {
        sorted.reverse();
    }

    for v in sorted {
        writeln!(out, "{}", v)?;
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub enum GroupView {
    #[default]
    Versions,
    Tree,
    Table,
}

/// `vsort groups`
pub fn groups_cmd<W: Write>(mut out: W, raws: &[String], view: GroupView, max_items: usize) -> Result<()> {

    let versions = version::parse_all(raws);

    match view {
        GroupView::Versions => version_report::write_versions(&mut out, &versions, max_items),
        GroupView::Tree => version_report::write_group_tree(&mut out, &versions),
        GroupView::Table => {
            let index = version_group::build_index(versions);
            version_report::write_group_table(out, &index)
        }
    }
}

fn policy(exclude: bool) -> InclusionPolicy {
    if exclude {
        InclusionPolicy::Exclude
    } else {
        InclusionPolicy::Include
    }
}

pub struct RangeOptions<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub exclude_from: bool,
    pub exclude_to: bool,
}

/// `vsort range`
pub fn range_cmd<W: Write>(mut out: W, raws: &[String], opts: RangeOptions<'_>) -> Result<()> {

    let from = version::parse(opts.from);
    let to = version::parse(opts.to);

    let index = version_group::build_index(version::parse_all(raws));
    let found = index.query_range(
        Bound::new(&from, policy(opts.exclude_from)),
        Bound::new(&to, policy(opts.exclude_to)),
    );

    if found.is_empty() && index.get(&from.group_id()).is_none() && from.raw() != version_group::SCAN_ALL_START {
        tracing::warn!("no versions with the numbers of {}, use \"0\" to start from the lowest", from);
    }

    for v in found {
        writeln!(out, "{}", v)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    fn strings(raws: &[&str]) -> Vec<String> {
        raws.iter().map(|s| s.to_string()).collect()
    }

    fn output<F>(f: F) -> Result<String>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn sort_descending() -> Result<()> {
        let raws = strings(&["2.0.0", "1.0.0", "1.10.0", "1.2.0", "1.1.0", "1.2.0"]);
        let opts = SortOptions { skip_invalid: false, semver: false, descending: true };
        let out = output(|w| sort_cmd(w, &raws, opts))?;
        assert_eq!(out, "2.0.0\n1.10.0\n1.2.0\n1.1.0\n1.0.0\n");

        let opts = SortOptions { descending: false, ..opts };
        let out = output(|w| sort_cmd(w, &raws, opts))?;
        assert_eq!(out, "1.0.0\n1.1.0\n1.2.0\n1.10.0\n2.0.0\n");
        Ok(())
    }

    #[test]
    fn sort_invalid() -> Result<()> {
        let raws = strings(&["1.0", "latest", "v2.0"]);
        let opts = SortOptions { skip_invalid: false, semver: false, descending: false };
        assert!(output(|w| sort_cmd(w, &raws, opts)).is_err());

        let opts = SortOptions { skip_invalid: true, ..opts };
        assert_eq!(output(|w| sort_cmd(w, &raws, opts))?, "1.0\nv2.0\n");

        let opts = SortOptions { semver: true, ..opts };
        let raws = strings(&["1.0.0", "1.0", "2.0.0-rc.1"]);
        assert_eq!(output(|w| sort_cmd(w, &raws, opts))?, "1.0.0\n2.0.0-rc.1\n");
        Ok(())
    }

    #[test]
    fn parse_table() -> Result<()> {
        let out = output(|w| parse_cmd(w, &strings(&["v1.2.3-rc1", "abc"]), false))?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("v1.2.3-rc1"));
        assert!(lines[1].contains("1.2.3"));
        assert!(lines[1].ends_with("true"));
        assert!(lines[2].ends_with("false"));
        Ok(())
    }

    #[test]
    fn parse_json() -> Result<()> {
        let out = output(|w| parse_cmd(w, &strings(&["1.0", "curl-7_85_0"]), true))?;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(r#""prefix":"curl-""#));
        assert!(lines[1].contains(r#""numbers":[7,85,0]"#));
        Ok(())
    }

    #[test]
    fn range() -> Result<()> {
        let raws = strings(&["1.0.0", "1.0.1", "1.1.0", "1.1.1", "1.2.0", "2.0.0"]);
        let opts = RangeOptions { from: "1.0.0", to: "2.0.0", exclude_from: true, exclude_to: true };
        let out = output(|w| range_cmd(w, &raws, opts))?;
        assert_eq!(out, "1.0.1\n1.1.0\n1.1.1\n1.2.0\n");

        let opts = RangeOptions { from: "0", to: "1.0.1", exclude_from: false, exclude_to: false };
        let out = output(|w| range_cmd(w, &raws, opts))?;
        assert_eq!(out, "1.0.0\n1.0.1\n");

        let opts = RangeOptions { from: "1.5", to: "2.0.0", exclude_from: false, exclude_to: false };
        assert_eq!(output(|w| range_cmd(w, &raws, opts))?, "");
        Ok(())
    }

    #[test]
    fn groups_views() -> Result<()> {
        let raws = strings(&["1.0", "v1.0", "2.0"]);
        let out = output(|w| groups_cmd(w, &raws, GroupView::Versions, 0))?;
        assert!(out.starts_with("versions: 3\ngroups: 2\n"));

        let out = output(|w| groups_cmd(w, &raws, GroupView::Tree, 0))?;
        assert!(out.contains("├─ 1 (1 groups, 2 versions)"));

        let out = output(|w| groups_cmd(w, &raws, GroupView::Table, 0))?;
        assert_eq!(out.lines().count(), 3);
        Ok(())
    }
}
