use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use itertools::Itertools;
use version::Version;
use version_group::{SortedVersionGroups, VersionGroup};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn index_of(versions: &[Version]) -> SortedVersionGroups {
    version_group::build_index(versions.iter().cloned())
}

fn write_totals<W: Write>(w: &mut W, versions: usize, groups: usize) -> Result<()> {
    writeln!(w, "versions: {versions}")?;
    writeln!(w, "groups: {groups}")?;
    writeln!(w)?;
    Ok(())
}

/// Every group in order with its members beneath it.
///
/// With `max_items > 0` each group shows at most that many members, followed
/// by a line counting the hidden ones.
pub fn write_versions<W: Write>(w: &mut W, versions: &[Version], max_items: usize) -> Result<()> {

    let index = index_of(versions);
    write_totals(w, versions.len(), index.len())?;

    for group in index.groups() {
        let sorted = group.sorted_versions();
        writeln!(w, "┌─ {} ({} versions)", group.id(), sorted.len())?;

        let shown = if max_items > 0 { sorted.len().min(max_items) } else { sorted.len() };
        let hidden = sorted.len() - shown;

        for (i, v) in sorted.iter().take(shown).enumerate() {
            let marker = if i + 1 == shown && hidden == 0 { "└──" } else { "├──" };
            write!(w, "{marker} {}", v.raw())?;
            if let Some(t) = v.release_time() {
                write!(w, " (released {})", t.format(DATE_FORMAT))?;
            }
            writeln!(w)?;
        }

        if hidden > 0 {
            writeln!(w, "└── ... {hidden} more")?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Groups bucketed by their leading number.
pub fn write_group_tree<W: Write>(w: &mut W, versions: &[Version]) -> Result<()> {

    let index = index_of(versions);
    write_totals(w, versions.len(), index.len())?;

    let by_major = index.groups().iter().group_by(|g| g.group_numbers().major());
    let buckets = by_major
        .into_iter()
        .map(|(major, groups)| (major, groups.collect_vec()))
        .collect_vec();

    for (i, (major, groups)) in buckets.iter().enumerate() {
        let last = i + 1 == buckets.len();
        let marker = if last { "└─" } else { "├─" };
        let child = if last { "  " } else { "│ " };
        let major = major.map_or_else(|| String::from("-"), |m| m.to_string());
        let count: usize = groups.iter().map(|g| g.len()).sum();

        writeln!(w, "{marker} {major} ({} groups, {count} versions)", groups.len())?;

        for (j, group) in groups.iter().enumerate() {
            let sub = if j + 1 == groups.len() { "└─" } else { "├─" };
            writeln!(w, "{child}{sub} {} ({} versions)", group.id(), group.len())?;
        }
    }

    Ok(())
}

fn first_last(group: &VersionGroup) -> (Option<Arc<Version>>, Option<Arc<Version>>) {
    let sorted = group.sorted_versions();
    (sorted.first().cloned(), sorted.last().cloned())
}

/// One aligned row per group: id, member count, lowest and highest member.
pub fn write_group_table<W: Write>(w: W, index: &SortedVersionGroups) -> Result<()> {

    let mut tw = tabwriter::TabWriter::new(w);
    writeln!(&mut tw, "group\tversions\tfirst\tlast")?;

    for group in index.groups() {
        let (first, last) = first_last(group);
        let first = first.as_ref().map_or("", |v| v.raw());
        let last = last.as_ref().map_or("", |v| v.raw());
        writeln!(&mut tw, "{}\t{}\t{}\t{}", group.id(), group.len(), first, last)?;
    }

    tw.flush()?;
    Ok(())
}
