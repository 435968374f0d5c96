use clap::{Command, arg};

pub fn pull_many_opt<'a>(matches: &'a clap::ArgMatches, key: &str) -> Option<Vec<&'a String>> {
    matches.get_many::<String>(key).map(|v| v.collect::<Vec<&String>>())
}

fn versions_arg() -> clap::Arg {
    arg!([versions] ... "Version strings, read from --file or stdin when not given")
}

pub fn get_cli() -> Command {

    Command::new("vsort")
        .version(clap::crate_version!())
        .about("vsort : parse, sort, group and window scraped release versions")
        .arg(arg!(-c --config <file> "use a specific config file").global(true))
        .arg(arg!(--file <path> "read versions from a file, one per line").global(true))
        .subcommand_required(true)
        .subcommand(
            Command::new("parse")
                .about("show how versions are split into prefix, numbers and suffix")
                .arg(versions_arg())
                .arg(arg!(--json "output in json lines format"))
        )
        .subcommand(
            Command::new("sort")
                .about("sort versions")
                .long_about("Sort versions by their numbers, then by release time, suffix and raw text within equal numbers. Repeated version strings are printed once. Highest first unless --ascending is given.")
                .arg(versions_arg())
                .arg(arg!(--"skip-invalid" "Skip invalid versions"))
                .arg(arg!(--semver "Require semver versions"))
                .arg(arg!(--ascending "output in ascending order")
                    .overrides_with("descending")
                )
                .arg(arg!(--descending "output in descending order (default)")
                    .overrides_with("ascending")
                )
        )
        .subcommand(
            Command::new("groups")
                .about("show versions grouped by their numbers")
                .arg(versions_arg())
                .arg(arg!(--tree "show groups bucketed by major version"))
                .arg(arg!(--table "show one line per group")
                    .conflicts_with("tree")
                )
                .arg(arg!(--"max-items" <N> "show at most N versions per group, 0 shows all")
                    .value_parser(clap::value_parser!(usize))
                )
        )
        .subcommand(
            Command::new("range")
                .about("list versions between two versions")
                .long_about("List versions from the group of --from up to --to. A --from of \"0\" starts at the lowest group.")
                .arg(versions_arg())
                .arg(arg!(--from <version> "lower bound").required(true))
                .arg(arg!(--to <version> "upper bound").required(true))
                .arg(arg!(--"exclude-from" "do not include the lower bound itself"))
                .arg(arg!(--"exclude-to" "do not include the upper bound itself"))
        )
}
