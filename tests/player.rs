use dfplayer_driver::{CommandCode, CommandFrame, Delay, DfPlayer, VolumeChange};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct TotalDelay {
    total_ms: u64,
}

impl Delay for TotalDelay {
    fn delay_ms(&mut self, duration: u64) {
        self.total_ms += duration;
    }
}

fn split_frames(bytes: &[u8]) -> Vec<CommandFrame> {
    bytes
        .chunks(10)
        .map(|chunk| CommandFrame::try_from(chunk).expect("driver wrote an invalid frame"))
        .collect()
}

#[test]
fn session_writes_valid_frames_in_order() {
    let mut wire: Vec<u8> = Vec::new();
    let mut delay = TotalDelay::default();
    {
        let mut player = DfPlayer::with_delay(&mut wire, &mut delay);
        assert!(!player.is_online());
        player.initialize();
        assert!(player.is_online());

        assert_eq!(
            player.set_volume(42),
            VolumeChange {
                applied: 30,
                clamped: true
            }
        );
        player.volume_up();
        player.volume_down();
        player.play_track(300);
        player.play_from_folder(1, 3);
        player.pause();
        player.resume();
        player.next();
        player.prev();
        player.stop();
        assert_eq!(player.volume(), 29);
    }

    let frames = split_frames(&wire);
    let commands: Vec<CommandCode> = frames.iter().map(|f| f.command()).collect();
    assert_eq!(
        commands,
        vec![
            CommandCode::Reset,
            CommandCode::SetVolume,
            CommandCode::SetVolume,
            CommandCode::SetVolume,
            CommandCode::Play,
            CommandCode::PlayFromFolder,
            CommandCode::Pause,
            CommandCode::Pause,
            CommandCode::Next,
            CommandCode::Prev,
            CommandCode::Stop,
        ]
    );
    assert!(!commands.contains(&CommandCode::QueryStatus));

    assert_eq!(frames[1].param(), 20);
    assert_eq!(frames[2].param(), 30);
    assert_eq!(frames[3].param(), 29);
    assert_eq!((frames[4].param_high(), frames[4].param_low()), (0x01, 0x2C));
    assert_eq!((frames[5].param_high(), frames[5].param_low()), (1, 3));
    assert_eq!(frames[6], frames[7]);

    // boot + reset settle + one settling delay per frame
    assert_eq!(delay.total_ms, 500 + 1000 + 30 * frames.len() as u64);
}
