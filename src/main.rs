// SPDX-License-Identifier: MPL-2.0
use watch_player::app::{self, Flags};
use watch_player::config::DEFAULT_MEDIA_DURATION_SECS;
use watch_player::domain::video::ContentKind;
use watch_player::error::{Error, Result};

const HELP: &str = "\
watch_player - media player with auto-hiding controls

USAGE:
  watch_player [OPTIONS]

OPTIONS:
  --source <URI>          Media source identifier [default: sim://demo]
  --title <TEXT>          Title shown in the top bar [default: Untitled]
  --description <TEXT>    Optional description line
  --duration <SECS>       Length of the simulated media [default: 90]
  --episode <S:E>         Mark the media as season S, episode E
  --config-dir <DIR>      Read settings.toml from DIR
  -h, --help              Print this help
";

fn parse_episode(value: &str) -> Result<ContentKind> {
    let (season, episode) = value
        .split_once(':')
        .ok_or_else(|| Error::Args(format!("expected S:E, got {value:?}")))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|err| Error::Args(format!("invalid episode number {part:?}: {err}")))
    };
    Ok(ContentKind::Episode {
        season: parse(season)?,
        episode: parse(episode)?,
    })
}

/// Parses the command line. `Ok(None)` means help was printed.
fn parse_args() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let duration: f64 = args
        .opt_value_from_str("--duration")?
        .unwrap_or(DEFAULT_MEDIA_DURATION_SECS);
    if !duration.is_finite() || duration <= 0.0 {
        return Err(Error::Args(format!("duration must be positive, got {duration}")));
    }

    let flags = Flags {
        source: args
            .opt_value_from_str("--source")?
            .unwrap_or_else(|| "sim://demo".to_string()),
        title: args
            .opt_value_from_str("--title")?
            .unwrap_or_else(|| "Untitled".to_string()),
        description: args.opt_value_from_str("--description")?,
        kind: args
            .opt_value_from_fn("--episode", parse_episode)?
            .unwrap_or_default(),
        duration,
        config_dir: args.opt_value_from_os_str("--config-dir", |s| {
            Ok::<_, std::convert::Infallible>(std::path::PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Args(format!("unexpected arguments: {remaining:?}")));
    }
    Ok(Some(flags))
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(flags) = parse_args().inspect_err(|_| eprint!("{HELP}"))? else {
        return Ok(());
    };
    log::info!("starting {} ({})", flags.title, flags.source);
    app::run(flags)?;
    Ok(())
}
