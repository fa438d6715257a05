use clap::{Arg, Command};
use dfplayer_driver::{serial, timer, DfPlayer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Command::new("DFPlayer Example - Play Track")
        .about("Initializes a DFPlayer Mini module and plays one track")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .use_value_delimiter(false)
                .required(true),
        )
        .arg(
            Arg::new("track")
                .help("Track index in the root of the storage")
                .long("track")
                .takes_value(true),
        )
        .arg(
            Arg::new("folder")
                .help("Folder number; plays --track from this folder")
                .long("folder")
                .takes_value(true),
        )
        .arg(
            Arg::new("volume")
                .help("Volume from 0 to 30")
                .long("volume")
                .takes_value(true),
        )
        .arg(
            Arg::new("seconds")
                .help("How long to play before sending stop")
                .long("seconds")
                .takes_value(true),
        )
        .get_matches();

    let port_name = matches.value_of("port").unwrap();
    let track: u16 = matches.value_of_t("track").unwrap_or(1);
    let folder: Option<u8> = matches.value_of_t("folder").ok();
    let volume: Option<i32> = matches.value_of_t("volume").ok();
    let seconds: u64 = matches.value_of_t("seconds").unwrap_or(10);

    let mut port = match serial::open(port_name) {
        Ok(port) => port,
        Err(e) => {
            let cause = std::error::Error::source(&e)
                .map(|s| s.to_string())
                .unwrap_or_default();
            eprintln!("{}. Error: {}", e, cause);
            std::process::exit(1);
        }
    };

    let mut player = DfPlayer::new(&mut port);
    player.initialize();

    if let Some(volume) = volume {
        let change = player.set_volume(volume);
        if change.clamped {
            eprintln!("Volume {} is out of range. Using {}.", volume, change.applied);
        }
    }

    match folder {
        Some(folder) => match u8::try_from(track) {
            Ok(track) => player.play_from_folder(folder, track),
            Err(_) => {
                eprintln!("Folder tracks must be between 0 and 255.");
                std::process::exit(1);
            }
        },
        None => player.play_track(track),
    }

    timer::sleep_ms(seconds * 1000);
    player.stop();
}
