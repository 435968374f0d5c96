use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use camino::Utf8Path;
use version::Version;

/// one trimmed, non-blank raw version string per line
pub fn read_version_strings<R: BufRead>(reader: R) -> Result<Vec<String>> {

    let mut raws = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", line_num + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        raws.push(String::from(line));
    }

    Ok(raws)
}

pub fn read_version_strings_from_file(path: &Utf8Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let raws = read_version_strings(BufReader::new(file)).with_context(|| format!("reading {path}"))?;
    tracing::debug!("read {} version strings from {}", raws.len(), path);
    Ok(raws)
}

/// parse every line, invalid versions included
pub fn read_versions<R: BufRead>(reader: R) -> Result<Vec<Version>> {
    Ok(version::parse_all(read_version_strings(reader)?))
}

pub fn read_versions_from_file(path: &Utf8Path) -> Result<Vec<Version>> {
    Ok(version::parse_all(read_version_strings_from_file(path)?))
}

#[cfg(test)]
mod test {

    use super::*;
    use camino::Utf8PathBuf;
    use std::io::Write;

    #[test]
    fn trims_and_skips_blanks() -> Result<()> {
        let input = "1.0.0\n\n   v2.0  \n\t\n1.0.0-beta\r\nabc\n";
        let raws = read_version_strings(input.as_bytes())?;
        assert_eq!(raws, vec!["1.0.0", "v2.0", "1.0.0-beta", "abc"]);

        let versions = read_versions(input.as_bytes())?;
        assert_eq!(versions.len(), 4);
        assert!(!versions[3].is_valid());
        Ok(())
    }

    #[test]
    fn from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = Utf8PathBuf::from_path_buf(dir.path().join("versions.txt"))
            .map_err(|p| anyhow::anyhow!("non utf8 path {}", p.display()))?;

        let mut file = File::create(&path)?;
        writeln!(file, "1.2.3")?;
        writeln!(file)?;
        writeln!(file, "curl-7_85_0")?;
        drop(file);

        let versions = read_versions_from_file(&path)?;
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].numbers().as_slice(), &[7, 85, 0]);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let err = read_versions_from_file(Utf8Path::new("/does/not/exist/versions.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/does/not/exist/versions.txt"));
    }
}
