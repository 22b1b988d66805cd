use std::path::PathBuf;

use crate::models::errors::{EditorError, EditorResult};
use crate::models::station::StationKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub station_kind: Option<StationKind>,
    pub slot_count: Option<usize>,
    pub config: Option<PathBuf>,
    /// JSON file of slot records to open the session with.
    pub load: Option<PathBuf>,
    pub help: bool,
}

pub const USAGE: &str = "Usage: station_slots [OPTIONS]

Options:
  -k, --kind <KIND>     planetary | interstellar | distributor
  -n, --slots <INT>     Number of slots
  -c, --config <FILE>   JSON editor config
  -l, --load <FILE>     JSON slot list to edit
  -h, --help            Print help";

pub fn parse() -> EditorResult<Args> {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I>(args: I) -> EditorResult<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--kind" | "-k" => parsed.station_kind = Some(value(&arg, iter.next())?.parse()?),
            "--slots" | "-n" => parsed.slot_count = Some(value(&arg, iter.next())?.parse()?),
            "--config" | "-c" => parsed.config = Some(value(&arg, iter.next())?.into()),
            "--load" | "-l" => parsed.load = Some(value(&arg, iter.next())?.into()),
            "--help" | "-h" => parsed.help = true,
            other => {
                return Err(EditorError::InvalidArgument(format!(
                    "unknown argument: {}",
                    other
                )))
            }
        }
    }

    Ok(parsed)
}

fn value(flag: &str, next: Option<String>) -> EditorResult<String> {
    next.ok_or_else(|| EditorError::InvalidArgument(format!("{} requires a value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let args = parse_from(argv(&["-k", "ils", "--slots", "5", "-c", "cfg.json", "--load", "s.json"]))
            .unwrap();
        assert_eq!(args.station_kind, Some(StationKind::Interstellar));
        assert_eq!(args.slot_count, Some(5));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.load, Some(PathBuf::from("s.json")));
        assert!(!args.help);
    }

    #[test]
    fn no_flags_gives_defaults() {
        assert_eq!(parse_from(Vec::new()).unwrap(), Args::default());
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = parse_from(argv(&["--slots"])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: --slots requires a value");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            parse_from(argv(&["--kind", "orbital"])),
            Err(EditorError::UnknownStationKind(_))
        ));
        assert!(matches!(
            parse_from(argv(&["--slots", "many"])),
            Err(EditorError::Parse(_))
        ));
        assert!(matches!(
            parse_from(argv(&["--warp"])),
            Err(EditorError::InvalidArgument(_))
        ));
    }
}
